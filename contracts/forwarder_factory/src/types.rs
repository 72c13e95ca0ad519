use soroban_sdk::{contracttype, Address, BytesN};

/// Factory configuration. Everything except `owner` can be changed by an
/// operator; forwarders read it fresh on every call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    /// Copied from the bridge's owner at construction.
    pub owner: Address,
    /// `None` while the operator has cleared it; cloning and forwarding
    /// stop until a bridge is set again.
    pub bridge: Option<Address>,
    /// Wasm hash every new forwarder is deployed from.
    pub child_implementation: BytesN<32>,
    pub escape_hatch_caller: Address,
    pub escape_hatch_destination: Address,
}

impl FactoryConfig {
    /// Owner or escape hatch caller.
    pub fn is_operator(&self, caller: &Address) -> bool {
        *caller == self.owner || *caller == self.escape_hatch_caller
    }
}
