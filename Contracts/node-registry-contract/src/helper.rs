use crate::error::RegistryError;
use soroban_sdk::String;

pub const MAX_ENDPOINT_LENGTH: u32 = 128;

/// Validates node endpoint length
pub fn validate_endpoint(endpoint: &String) -> Result<(), RegistryError> {
    let len = endpoint.len();
    if len == 0 || len > MAX_ENDPOINT_LENGTH {
        return Err(RegistryError::InvalidEndpoint);
    }
    Ok(())
}
