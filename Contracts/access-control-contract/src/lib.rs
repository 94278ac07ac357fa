#![no_std]
//! Access Control Contract
//!
//! Role-based access control plus owner-replacement governance for the node network.
//! The contract owner and every `Admin` holder form the admin set: they grant and revoke
//! roles, open upgrade proposals and vote on them. A proposal stays open for a fixed number
//! of ledgers; once the window has closed with more yes than no votes it can be executed
//! exactly once, handing contract ownership to the proposed address.

mod error;
mod events;
mod helper;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    events::Events,
    helper::validate_description,
    storage::Storage,
};

pub use crate::error::AccessError;
pub use crate::helper::{MAX_DESCRIPTION_LENGTH, PROPOSAL_DURATION};
pub use crate::types::{Proposal, ProposalStatus, Role};

#[contract]
pub struct AccessControlContract;

/// Public interface of the access control contract.
pub trait AccessControlTrait {
    // Role management
    /// Grant `role` (wire tag 1..=3) to `account`. Caller must be the owner or an admin.
    fn grant_role(
        env: Env,
        caller: Address,
        role: u32,
        account: Address,
    ) -> Result<bool, AccessError>;
    /// Revoke `role` from `account`. Revoking a role the account never held is a no-op.
    fn revoke_role(
        env: Env,
        caller: Address,
        role: u32,
        account: Address,
    ) -> Result<bool, AccessError>;
    /// Whether `account` holds `role`. Unknown tags read as not held.
    fn has_role(env: Env, role: u32, account: Address) -> bool;
    /// Whether `account` passes the admin guard (owner or `Admin` holder).
    fn is_admin(env: Env, account: Address) -> bool;
    fn get_contract_owner(env: Env) -> Address;

    // Governance
    /// Open a proposal to hand contract ownership to `new_owner`. Returns the proposal id.
    fn propose_upgrade(
        env: Env,
        caller: Address,
        new_owner: Address,
        description: String,
    ) -> Result<u64, AccessError>;
    /// Cast one yes/no vote while the proposal window is open.
    fn vote_on_upgrade(
        env: Env,
        caller: Address,
        proposal_id: u64,
        choice: bool,
    ) -> Result<bool, AccessError>;
    /// Execute a passed proposal after its window closed; returns the new owner.
    /// Any signer may trigger it: the tally and the executed flag are the only gates.
    fn execute_upgrade(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<Address, AccessError>;
    fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal>;
    fn get_proposal_status(env: Env, proposal_id: u64) -> Option<ProposalStatus>;
    fn get_proposal_count(env: Env) -> u64;
    fn is_proposal_passed(env: Env, proposal_id: u64) -> bool;
    fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool;
    fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<bool>;
}

#[contractimpl]
impl AccessControlContract {
    /// The deploying account becomes the first contract owner.
    pub fn __constructor(env: Env, owner: Address) {
        Storage::new(&env).set_contract_owner(&owner);
    }
}

#[contractimpl]
impl AccessControlTrait for AccessControlContract {
    fn grant_role(
        env: Env,
        caller: Address,
        role: u32,
        account: Address,
    ) -> Result<bool, AccessError> {
        let role = Role::from_tag(role)?;
        caller.require_auth();

        let store = Storage::new(&env);
        store.require_admin(&caller)?;

        store.set_role(role, &account, true);
        Events::emit_role_granted(&env, role, &account, &caller);
        Ok(true)
    }

    fn revoke_role(
        env: Env,
        caller: Address,
        role: u32,
        account: Address,
    ) -> Result<bool, AccessError> {
        let role = Role::from_tag(role)?;
        caller.require_auth();

        let store = Storage::new(&env);
        store.require_admin(&caller)?;

        store.set_role(role, &account, false);
        Events::emit_role_revoked(&env, role, &account, &caller);
        Ok(true)
    }

    fn has_role(env: Env, role: u32, account: Address) -> bool {
        match Role::from_tag(role) {
            Ok(role) => Storage::new(&env).has_role(role, &account),
            Err(_) => false,
        }
    }

    fn is_admin(env: Env, account: Address) -> bool {
        Storage::new(&env).is_admin(&account)
    }

    fn get_contract_owner(env: Env) -> Address {
        Storage::new(&env).contract_owner()
    }

    fn propose_upgrade(
        env: Env,
        caller: Address,
        new_owner: Address,
        description: String,
    ) -> Result<u64, AccessError> {
        caller.require_auth();
        let store = Storage::new(&env);
        store.require_admin(&caller)?;
        validate_description(&description)?;

        let id = store.next_proposal_id();
        let proposal = Proposal {
            id,
            new_owner,
            description,
            proposer: caller,
            created_at: env.ledger().sequence(),
            votes_yes: 0,
            votes_no: 0,
            executed: false,
        };
        store.save_proposal(&proposal);
        Events::emit_proposal_created(&env, &proposal);
        Ok(id)
    }

    fn vote_on_upgrade(
        env: Env,
        caller: Address,
        proposal_id: u64,
        choice: bool,
    ) -> Result<bool, AccessError> {
        caller.require_auth();
        let store = Storage::new(&env);
        store.require_admin(&caller)?;

        let mut proposal = store.get_proposal(proposal_id)?;
        if proposal.voting_ended(env.ledger().sequence()) {
            return Err(AccessError::VotingClosed);
        }
        if store.get_vote(proposal_id, &caller).is_some() {
            return Err(AccessError::AlreadyVoted);
        }

        if choice {
            proposal.votes_yes += 1;
        } else {
            proposal.votes_no += 1;
        }
        store.record_vote(proposal_id, &caller, choice);
        store.save_proposal(&proposal);
        Events::emit_vote_cast(&env, &proposal, &caller, choice);
        Ok(true)
    }

    fn execute_upgrade(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<Address, AccessError> {
        caller.require_auth();
        let store = Storage::new(&env);

        let mut proposal = store.get_proposal(proposal_id)?;
        let now = env.ledger().sequence();
        if !proposal.voting_ended(now) {
            return Err(AccessError::VotingNotEnded);
        }
        if proposal.executed {
            return Err(AccessError::ProposalAlreadyExecuted);
        }
        if !proposal.is_passed(now) {
            return Err(AccessError::ProposalNotPassed);
        }

        let previous_owner = store.contract_owner();
        proposal.executed = true;
        store.save_proposal(&proposal);
        store.set_contract_owner(&proposal.new_owner);

        log!(&env, "contract owner replaced", proposal_id, proposal.new_owner);
        Events::emit_upgrade_executed(&env, proposal_id, &previous_owner, &proposal.new_owner);
        Ok(proposal.new_owner)
    }

    fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        Storage::new(&env).find_proposal(proposal_id)
    }

    fn get_proposal_status(env: Env, proposal_id: u64) -> Option<ProposalStatus> {
        let now = env.ledger().sequence();
        Storage::new(&env).find_proposal(proposal_id).map(|p| p.status(now))
    }

    fn get_proposal_count(env: Env) -> u64 {
        Storage::new(&env).proposal_count()
    }

    fn is_proposal_passed(env: Env, proposal_id: u64) -> bool {
        let now = env.ledger().sequence();
        Storage::new(&env)
            .find_proposal(proposal_id)
            .map(|p| p.is_passed(now))
            .unwrap_or(false)
    }

    fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        Storage::new(&env).get_vote(proposal_id, &voter).is_some()
    }

    fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<bool> {
        Storage::new(&env).get_vote(proposal_id, &voter)
    }
}
