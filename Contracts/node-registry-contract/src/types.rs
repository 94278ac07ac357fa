use soroban_sdk::{contracttype, BytesN, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeRecord {
    /// Compressed secp256k1 public key.
    pub public_key: BytesN<33>,
    pub endpoint: String,
    pub registered_at: u32,
    pub approved: bool,
}
