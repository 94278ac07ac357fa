use crate::error::AccessError;
use soroban_sdk::String;

// Governance constants
pub const PROPOSAL_DURATION: u32 = 144; // ledgers a proposal stays open for voting
pub const MAX_DESCRIPTION_LENGTH: u32 = 256;

/// Validates proposal description length
pub fn validate_description(description: &String) -> Result<(), AccessError> {
    let len = description.len();
    if len == 0 || len > MAX_DESCRIPTION_LENGTH {
        return Err(AccessError::InvalidDescription);
    }
    Ok(())
}
