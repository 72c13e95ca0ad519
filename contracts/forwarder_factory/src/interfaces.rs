use soroban_sdk::{contractclient, Address, Env};

/// What the factory reads from the donation bridge it is built against.
#[contractclient(name = "BridgeClient")]
pub trait BridgeInterface {
    fn owner(env: Env) -> Address;
    fn escape_hatch_caller(env: Env) -> Address;
    fn escape_hatch_destination(env: Env) -> Address;
}
