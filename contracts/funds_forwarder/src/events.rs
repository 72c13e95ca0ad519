//! Events emitted by a forwarder instance.
//!
//! | Topic       | Payload               |
//! |-------------|-----------------------|
//! | `forwarded` | [`Forwarded`]         |
//! | `escaped`   | [`EscapeHatchCalled`] |

use soroban_sdk::{contracttype, Address, Env, Symbol};

pub const FORWARDED: &str = "forwarded";
pub const ESCAPE_HATCH_CALLED: &str = "escaped";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Forwarded {
    pub token: Address,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscapeHatchCalled {
    pub token: Address,
    pub amount: i128,
}

pub(crate) fn forwarded(env: &Env, token: &Address, balance: i128) {
    env.events().publish(
        (Symbol::new(env, FORWARDED),),
        Forwarded {
            token: token.clone(),
            balance,
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
