use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessError {
    // Roles
    Unauthorized = 100,
    InvalidRole = 101,

    // Governance
    ProposalNotFound = 102,
    AlreadyVoted = 103,
    VotingClosed = 104,
    VotingNotEnded = 105,
    ProposalNotPassed = 106,
    ProposalAlreadyExecuted = 107,
    InvalidDescription = 108,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::Unauthorized => {
                write!(f, "Caller is neither the contract owner nor an admin")
            }
            AccessError::InvalidRole => write!(f, "Unknown role"),

            AccessError::ProposalNotFound => write!(f, "Proposal not found"),
            AccessError::AlreadyVoted => write!(f, "Account already voted on this proposal"),
            AccessError::VotingClosed => write!(f, "Voting period has ended"),
            AccessError::VotingNotEnded => write!(f, "Voting period has not ended yet"),
            AccessError::ProposalNotPassed => write!(f, "Proposal did not pass"),
            AccessError::ProposalAlreadyExecuted => write!(f, "Proposal already executed"),
            AccessError::InvalidDescription => write!(f, "Invalid proposal description"),
        }
    }
}
