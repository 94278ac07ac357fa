use soroban_sdk::{contracttype, Address, String};

use crate::{error::AccessError, helper::PROPOSAL_DURATION};

/// Capability buckets an account can hold. Roles are flat: holding `Admin`
/// does not imply either of the other two.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 1,
    OperatorManager = 2,
    Upgrader = 3,
}

impl Role {
    /// Maps the wire tag used by callers onto a known role.
    pub fn from_tag(tag: u32) -> Result<Role, AccessError> {
        match tag {
            1 => Ok(Role::Admin),
            2 => Ok(Role::OperatorManager),
            3 => Ok(Role::Upgrader),
            _ => Err(AccessError::InvalidRole),
        }
    }

    pub fn tag(self) -> u32 {
        self as u32
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub new_owner: Address,
    pub description: String,
    pub proposer: Address,
    pub created_at: u32,
    pub votes_yes: u32,
    pub votes_no: u32,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    /// Voting window still open.
    Active = 0,
    /// Window closed with more yes than no votes; waiting for execution.
    Passed = 1,
    /// Window closed without a yes majority.
    Rejected = 2,
    Executed = 3,
}

impl Proposal {
    /// First ledger sequence at which voting is closed.
    pub fn deadline(&self) -> u32 {
        self.created_at.saturating_add(PROPOSAL_DURATION)
    }

    pub fn voting_ended(&self, now: u32) -> bool {
        now >= self.deadline()
    }

    pub fn has_majority(&self) -> bool {
        self.votes_yes > self.votes_no
    }

    /// Lifecycle position derived purely from the stored record and `now`.
    pub fn status(&self, now: u32) -> ProposalStatus {
        if !self.voting_ended(now) {
            ProposalStatus::Active
        } else if self.executed {
            ProposalStatus::Executed
        } else if self.has_majority() {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        }
    }

    pub fn is_passed(&self, now: u32) -> bool {
        self.voting_ended(now) && self.has_majority()
    }
}
