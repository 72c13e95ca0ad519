use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, contracttype, Address, Env, IntoVal,
    Val,
};

/// Balance a [`TokenBehavior::NegativeBalance`] token reports for everyone.
pub const NEGATIVE_BALANCE: i128 = -5;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenBehavior {
    /// Moves funds and returns nothing.
    Standard,
    /// Moves nothing and returns `false`.
    ReturnsFalse,
    /// Standard, except that zero-amount transfers fail.
    RevertsOnZero,
    /// Moves nothing and returns nothing.
    ReportsSuccessWithoutMoving,
    /// Calls `forward` on the reentry target before moving the funds.
    Reenters,
    /// Standard transfers, but `balance` is always [`NEGATIVE_BALANCE`].
    NegativeBalance,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum TokenKey {
    Behavior,
    Balance(Address),
    ReentryTarget,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    InsufficientBalance = 1,
    NegativeAmount = 2,
    ZeroTransfer = 3,
}

#[contractclient(name = "ForwardingClient")]
pub trait Forwarding {
    fn forward(env: Env, token: Address) -> i128;
}

/// Balance-table token whose `transfer` follows a [`TokenBehavior`].
#[contract]
pub struct TestToken;

fn behavior(env: &Env) -> TokenBehavior {
    env.storage()
        .instance()
        .get(&TokenKey::Behavior)
        .unwrap_or(TokenBehavior::Standard)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&TokenKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .instance()
        .set(&TokenKey::Balance(id.clone()), &amount);
}

fn reenter(env: &Env) {
    let target: Option<Address> = env.storage().instance().get(&TokenKey::ReentryTarget);
    if let Some(target) = target {
        // The token does not care whether the nested call went through.
        let _ = ForwardingClient::new(env, &target).try_forward(&env.current_contract_address());
    }
}

#[contractimpl]
impl TestToken {
    pub fn __constructor(env: Env, behavior: TokenBehavior) {
        env.storage().instance().set(&TokenKey::Behavior, &behavior);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = read_balance(&env, &to);
        write_balance(&env, &to, balance + amount);
    }

    pub fn set_reentry_target(env: Env, target: Address) {
        env.storage().instance().set(&TokenKey::ReentryTarget, &target);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        match behavior(&env) {
            TokenBehavior::NegativeBalance => NEGATIVE_BALANCE,
            _ => read_balance(&env, &id),
        }
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<Val, TokenError> {
        if amount < 0 {
            return Err(TokenError::NegativeAmount);
        }
        from.require_auth();

        match behavior(&env) {
            TokenBehavior::ReturnsFalse => return Ok(false.into_val(&env)),
            TokenBehavior::ReportsSuccessWithoutMoving => return Ok(().into_val(&env)),
            TokenBehavior::RevertsOnZero if amount == 0 => return Err(TokenError::ZeroTransfer),
            TokenBehavior::Reenters => reenter(&env),
            _ => {}
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        write_balance(&env, &from, from_balance - amount);
        let to_balance = read_balance(&env, &to);
        write_balance(&env, &to, to_balance + amount);
        Ok(().into_val(&env))
    }
}
