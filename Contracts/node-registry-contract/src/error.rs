use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    Unauthorized = 100,
    NodeNotFound = 101,
    NodeAlreadyRegistered = 102,
    InvalidEndpoint = 103,
    NodeAlreadyApproved = 104,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unauthorized => write!(f, "Not authorized"),
            RegistryError::NodeNotFound => write!(f, "Node not registered"),
            RegistryError::NodeAlreadyRegistered => write!(f, "Node already registered"),
            RegistryError::InvalidEndpoint => write!(f, "Invalid node endpoint"),
            RegistryError::NodeAlreadyApproved => write!(f, "Node already approved"),
        }
    }
}
