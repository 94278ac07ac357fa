use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};
use crate::{error::RegistryError, types::NodeRecord};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    AccessControl,
    NodeCount,
    Node(Address),
}

pub struct Storage<'a> {
    env: &'a Env,
}

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn set_access_control(&self, access_control: &Address) {
        self.env.storage().instance().set(&DataKey::AccessControl, access_control);
    }

    pub fn access_control(&self) -> Address {
        self.env
            .storage()
            .instance()
            .get(&DataKey::AccessControl)
            .expect("access control address is set by the constructor")
    }

    /// Current owner as recorded by the access control contract.
    pub fn owner(&self) -> Address {
        let func = Symbol::new(self.env, "get_contract_owner");
        self.env.invoke_contract(&self.access_control(), &func, Vec::new(self.env))
    }

    pub fn require_owner(&self, caller: &Address) -> Result<(), RegistryError> {
        if *caller == self.owner() { Ok(()) } else { Err(RegistryError::Unauthorized) }
    }

    pub fn node_count(&self) -> u32 {
        self.env.storage().instance().get(&DataKey::NodeCount).unwrap_or(0)
    }

    fn set_node_count(&self, count: u32) {
        self.env.storage().instance().set(&DataKey::NodeCount, &count);
    }

    pub fn find_node(&self, node: &Address) -> Option<NodeRecord> {
        self.env.storage().persistent().get(&DataKey::Node(node.clone()))
    }

    pub fn get_node(&self, node: &Address) -> Result<NodeRecord, RegistryError> {
        self.find_node(node).ok_or(RegistryError::NodeNotFound)
    }

    pub fn has_node(&self, node: &Address) -> bool {
        self.env.storage().persistent().has(&DataKey::Node(node.clone()))
    }

    pub fn save_node(&self, node: &Address, record: &NodeRecord) {
        self.env.storage().persistent().set(&DataKey::Node(node.clone()), record);
    }

    pub fn insert_node(&self, node: &Address, record: &NodeRecord) {
        self.save_node(node, record);
        self.set_node_count(self.node_count() + 1);
    }

    pub fn delete_node(&self, node: &Address) {
        self.env.storage().persistent().remove(&DataKey::Node(node.clone()));
        self.set_node_count(self.node_count().saturating_sub(1));
    }
}
