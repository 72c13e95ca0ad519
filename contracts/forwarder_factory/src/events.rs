//! Events emitted by the factory.
//!
//! | Topic        | Payload                        |
//! |--------------|--------------------------------|
//! | `new_fwd`    | [`NewFundForwarder`]           |
//! | `bridge`     | [`BridgeChanged`]              |
//! | `child_impl` | [`ChildImplementationChanged`] |
//! | `hatch_clr`  | [`EscapeHatchCallerChanged`]   |
//! | `escaped`    | [`EscapeHatchCalled`]          |

use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

pub const NEW_FUND_FORWARDER: &str = "new_fwd";
pub const BRIDGE_CHANGED: &str = "bridge";
pub const CHILD_IMPLEMENTATION_CHANGED: &str = "child_impl";
pub const ESCAPE_HATCH_CALLER_CHANGED: &str = "hatch_clr";
pub const ESCAPE_HATCH_CALLED: &str = "escaped";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewFundForwarder {
    pub funds_forwarder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BridgeChanged {
    pub new_bridge: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChildImplementationChanged {
    pub new_child_implementation: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscapeHatchCallerChanged {
    pub new_escape_hatch_caller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscapeHatchCalled {
    pub token: Address,
    pub amount: i128,
}

pub(crate) fn new_fund_forwarder(env: &Env, funds_forwarder: &Address) {
    env.events().publish(
        (Symbol::new(env, NEW_FUND_FORWARDER),),
        NewFundForwarder {
            funds_forwarder: funds_forwarder.clone(),
        },
    );
}

pub(crate) fn bridge_changed(env: &Env, new_bridge: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, BRIDGE_CHANGED),),
        BridgeChanged {
            new_bridge: new_bridge.clone(),
        },
    );
}

pub(crate) fn child_implementation_changed(env: &Env, new_child_implementation: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, CHILD_IMPLEMENTATION_CHANGED),),
        ChildImplementationChanged {
            new_child_implementation: new_child_implementation.clone(),
        },
    );
}

pub(crate) fn escape_hatch_caller_changed(env: &Env, new_escape_hatch_caller: &Address) {
    env.events().publish(
        (Symbol::new(env, ESCAPE_HATCH_CALLER_CHANGED),),
        EscapeHatchCallerChanged {
            new_escape_hatch_caller: new_escape_hatch_caller.clone(),
        },
    );
}

pub(crate) fn escape_hatch_called(env: &Env, token: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, ESCAPE_HATCH_CALLED),),
        EscapeHatchCalled {
            token: token.clone(),
            amount,
        },
    );
}
