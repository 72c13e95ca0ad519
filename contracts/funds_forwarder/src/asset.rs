//! # Assets
//!
//! Every asset is a token contract; native currency is its Stellar asset
//! contract. Balances are read at call time through the standard token
//! interface.
//!
//! A transfer out of the executing contract only counts as done when the
//! token did not fail, returned nothing, and the sender's balance dropped by
//! exactly the amount sent. A token reporting a negative balance is refused
//! before anything moves.

use soroban_sdk::{token, Address, Env};

use crate::Error;

pub fn balance_of(env: &Env, token: &Address, holder: &Address) -> Result<i128, Error> {
    match token::Client::new(env, token).try_balance(holder) {
        Ok(Ok(balance)) if balance >= 0 => Ok(balance),
        _ => Err(Error::TokenTransfer),
    }
}

/// Send `amount` of `token` from the executing contract to `to`.
pub fn transfer(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let this = env.current_contract_address();
    let before = balance_of(env, token, &this)?;

    let client = token::Client::new(env, token);
    if !matches!(client.try_transfer(&this, to, &amount), Ok(Ok(()))) {
        return Err(Error::TokenTransfer);
    }

    let after = balance_of(env, token, &this)?;
    if before.checked_sub(after) != Some(amount) {
        return Err(Error::TokenTransfer);
    }
    Ok(())
}
