#![no_std]
//! Node Registry Contract
//!
//! Keeps the set of network nodes: each node registers itself with a public key and an
//! endpoint, the contract owner approves it, and either the owner or the node itself can
//! remove the record again. Ownership is not stored here; it is read from the access
//! control contract on every privileged call, so a governance upgrade hands registry
//! administration to the new owner immediately.

mod error;
mod events;
mod helper;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

use crate::{events::Events, helper::validate_endpoint, storage::Storage};

pub use crate::error::RegistryError;
pub use crate::helper::MAX_ENDPOINT_LENGTH;
pub use crate::types::NodeRecord;

#[contract]
pub struct NodeRegistryContract;

pub trait NodeRegistryTrait {
    /// Register the calling node. The node starts unapproved.
    fn register_node(
        env: Env,
        node: Address,
        public_key: BytesN<33>,
        endpoint: String,
    ) -> Result<bool, RegistryError>;
    /// Owner-only: mark a registered node as authorized.
    fn approve_node(env: Env, caller: Address, node: Address) -> Result<bool, RegistryError>;
    /// Owner or the node itself: drop the record and with it any authorization.
    fn remove_node(env: Env, caller: Address, node: Address) -> Result<bool, RegistryError>;
    fn get_node(env: Env, node: Address) -> Option<NodeRecord>;
    fn is_authorized(env: Env, node: Address) -> bool;
    fn get_node_count(env: Env) -> u32;
    fn get_access_control(env: Env) -> Address;
}

#[contractimpl]
impl NodeRegistryContract {
    /// `access_control` is the contract whose owner administers this registry.
    pub fn __constructor(env: Env, access_control: Address) {
        Storage::new(&env).set_access_control(&access_control);
    }
}

#[contractimpl]
impl NodeRegistryTrait for NodeRegistryContract {
    fn register_node(
        env: Env,
        node: Address,
        public_key: BytesN<33>,
        endpoint: String,
    ) -> Result<bool, RegistryError> {
        node.require_auth();

        let storage = Storage::new(&env);
        if storage.has_node(&node) {
            return Err(RegistryError::NodeAlreadyRegistered);
        }
        validate_endpoint(&endpoint)?;

        let record = NodeRecord {
            public_key,
            endpoint,
            registered_at: env.ledger().sequence(),
            approved: false,
        };
        storage.insert_node(&node, &record);
        Events::emit_node_registered(&env, &node, &record);
        Ok(true)
    }

    fn approve_node(env: Env, caller: Address, node: Address) -> Result<bool, RegistryError> {
        caller.require_auth();

        let storage = Storage::new(&env);
        storage.require_owner(&caller)?;

        let mut record = storage.get_node(&node)?;
        if record.approved {
            return Err(RegistryError::NodeAlreadyApproved);
        }
        record.approved = true;
        storage.save_node(&node, &record);
        Events::emit_node_approved(&env, &node, &caller);
        Ok(true)
    }

    fn remove_node(env: Env, caller: Address, node: Address) -> Result<bool, RegistryError> {
        caller.require_auth();

        let storage = Storage::new(&env);
        if caller != node {
            storage.require_owner(&caller)?;
        }

        let record = storage.get_node(&node)?;
        storage.delete_node(&node);
        Events::emit_node_removed(&env, &node, &caller, record.approved);
        Ok(true)
    }

    fn get_node(env: Env, node: Address) -> Option<NodeRecord> {
        Storage::new(&env).find_node(&node)
    }

    fn is_authorized(env: Env, node: Address) -> bool {
        Storage::new(&env)
            .find_node(&node)
            .map(|record| record.approved)
            .unwrap_or(false)
    }

    fn get_node_count(env: Env) -> u32 {
        Storage::new(&env).node_count()
    }

    fn get_access_control(env: Env) -> Address {
        Storage::new(&env).access_control()
    }
}
