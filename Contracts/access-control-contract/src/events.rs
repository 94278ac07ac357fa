use soroban_sdk::{contracttype, symbol_short, Address, Env, String};
use crate::types::{Proposal, Role};

#[contracttype]
#[derive(Clone)]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub account: Address,
    pub granted_by: Address,
    pub ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub account: Address,
    pub revoked_by: Address,
    pub ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct ProposalCreatedEvent {
    pub proposal_id: u64,
    pub new_owner: Address,
    pub description: String,
    pub proposer: Address,
    pub deadline: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub proposal_id: u64,
    pub voter: Address,
    pub choice: bool,
    pub votes_yes: u32,
    pub votes_no: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct UpgradeExecutedEvent {
    pub proposal_id: u64,
    pub previous_owner: Address,
    pub new_owner: Address,
    pub ledger: u32,
}

pub struct Events;

impl Events {
    pub fn emit_role_granted(env: &Env, role: Role, account: &Address, granted_by: &Address) {
        let event = RoleGrantedEvent {
            role,
            account: account.clone(),
            granted_by: granted_by.clone(),
            ledger: env.ledger().sequence(),
        };
        env.events().publish((symbol_short!("role_grnt"), role.tag()), event);
    }

    pub fn emit_role_revoked(env: &Env, role: Role, account: &Address, revoked_by: &Address) {
        let event = RoleRevokedEvent {
            role,
            account: account.clone(),
            revoked_by: revoked_by.clone(),
            ledger: env.ledger().sequence(),
        };
        env.events().publish((symbol_short!("role_rvk"), role.tag()), event);
    }

    pub fn emit_proposal_created(env: &Env, proposal: &Proposal) {
        let event = ProposalCreatedEvent {
            proposal_id: proposal.id,
            new_owner: proposal.new_owner.clone(),
            description: proposal.description.clone(),
            proposer: proposal.proposer.clone(),
            deadline: proposal.deadline(),
        };
        env.events().publish((symbol_short!("prop_new"), proposal.id), event);
    }

    pub fn emit_vote_cast(env: &Env, proposal: &Proposal, voter: &Address, choice: bool) {
        let event = VoteCastEvent {
            proposal_id: proposal.id,
            voter: voter.clone(),
            choice,
            votes_yes: proposal.votes_yes,
            votes_no: proposal.votes_no,
        };
        env.events().publish((symbol_short!("vote"), proposal.id), event);
    }

    pub fn emit_upgrade_executed(
        env: &Env,
        proposal_id: u64,
        previous_owner: &Address,
        new_owner: &Address,
    ) {
        let event = UpgradeExecutedEvent {
            proposal_id,
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
            ledger: env.ledger().sequence(),
        };
        env.events().publish((symbol_short!("upgraded"), proposal_id), event);
    }
}
