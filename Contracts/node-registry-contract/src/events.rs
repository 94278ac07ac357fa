use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};
use crate::types::NodeRecord;

#[contracttype]
#[derive(Clone)]
pub struct NodeRegisteredEvent {
    pub node: Address,
    pub public_key: BytesN<33>,
    pub endpoint: String,
    pub ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct NodeApprovedEvent {
    pub node: Address,
    pub approved_by: Address,
    pub ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct NodeRemovedEvent {
    pub node: Address,
    pub removed_by: Address,
    pub was_approved: bool,
    pub ledger: u32,
}

pub struct Events;

impl Events {
    pub fn emit_node_registered(env: &Env, node: &Address, record: &NodeRecord) {
        let event = NodeRegisteredEvent {
            node: node.clone(),
            public_key: record.public_key.clone(),
            endpoint: record.endpoint.clone(),
            ledger: record.registered_at,
        };
        env.events().publish((symbol_short!("node_reg"),), event);
    }

    pub fn emit_node_approved(env: &Env, node: &Address, approved_by: &Address) {
        let event = NodeApprovedEvent {
            node: node.clone(),
            approved_by: approved_by.clone(),
            ledger: env.ledger().sequence(),
        };
        env.events().publish((symbol_short!("node_appr"),), event);
    }

    pub fn emit_node_removed(env: &Env, node: &Address, removed_by: &Address, was_approved: bool) {
        let event = NodeRemovedEvent {
            node: node.clone(),
            removed_by: removed_by.clone(),
            was_approved,
            ledger: env.ledger().sequence(),
        };
        env.events().publish((symbol_short!("node_rm"),), event);
    }
}
