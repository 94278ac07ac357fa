use soroban_sdk::{contracttype, Address, Env};
use crate::{
    error::AccessError,
    types::{Proposal, Role},
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    ProposalSeq,
    RoleMember(Role, Address),
    Proposal(u64),
    Vote(u64, Address),
}

pub struct Storage<'a> {
    env: &'a Env,
}

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn contract_owner(&self) -> Address {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .expect("contract owner is set by the constructor")
    }

    pub fn set_contract_owner(&self, owner: &Address) {
        self.env.storage().instance().set(&DataKey::Owner, owner);
    }

    /// Authorization guard: the current owner or any `Admin` holder.
    pub fn is_admin(&self, account: &Address) -> bool {
        *account == self.contract_owner() || self.has_role(Role::Admin, account)
    }

    pub fn require_admin(&self, caller: &Address) -> Result<(), AccessError> {
        if self.is_admin(caller) { Ok(()) } else { Err(AccessError::Unauthorized) }
    }

    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::RoleMember(role, account.clone()))
            .unwrap_or(false)
    }

    pub fn set_role(&self, role: Role, account: &Address, granted: bool) {
        let key = DataKey::RoleMember(role, account.clone());
        if granted {
            self.env.storage().persistent().set(&key, &true);
        } else {
            // absent reads as ungranted
            self.env.storage().persistent().remove(&key);
        }
    }

    pub fn proposal_count(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::ProposalSeq)
            .unwrap_or(0)
    }

    pub fn next_proposal_id(&self) -> u64 {
        let seq = self.proposal_count() + 1;
        self.env.storage().instance().set(&DataKey::ProposalSeq, &seq);
        seq
    }

    pub fn save_proposal(&self, proposal: &Proposal) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Proposal(proposal.id), proposal);
    }

    pub fn find_proposal(&self, id: u64) -> Option<Proposal> {
        self.env.storage().persistent().get(&DataKey::Proposal(id))
    }

    pub fn get_proposal(&self, id: u64) -> Result<Proposal, AccessError> {
        self.find_proposal(id).ok_or(AccessError::ProposalNotFound)
    }

    pub fn get_vote(&self, id: u64, voter: &Address) -> Option<bool> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Vote(id, voter.clone()))
    }

    pub fn record_vote(&self, id: u64, voter: &Address, choice: bool) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Vote(id, voter.clone()), &choice);
    }
}
