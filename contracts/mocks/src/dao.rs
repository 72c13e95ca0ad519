use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, token, Address, Env, Symbol,
};

pub const RAGEQUIT: &str = "ragequit";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DaoKey {
    ApprovedToken,
    Shares(Address),
    TotalShares,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ragequit {
    pub member: Address,
    pub shares: u64,
    pub payout: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DaoError {
    InsufficientShares = 1,
    Overflow = 2,
}

/// Moloch-style guild bank holding a single approved token. Ragequitting
/// burns shares for the same fraction of the bank.
#[contract]
pub struct MolochDao;

fn read_shares(env: &Env, member: &Address) -> u64 {
    env.storage()
        .instance()
        .get(&DaoKey::Shares(member.clone()))
        .unwrap_or(0)
}

fn read_total(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DaoKey::TotalShares)
        .unwrap_or(0)
}

#[contractimpl]
impl MolochDao {
    pub fn __constructor(env: Env, approved_token: Address) {
        env.storage()
            .instance()
            .set(&DaoKey::ApprovedToken, &approved_token);
    }

    pub fn add_member(env: Env, member: Address, shares: u64) {
        let held = read_shares(&env, &member);
        let total = read_total(&env);
        let storage = env.storage().instance();
        storage.set(&DaoKey::Shares(member), &(held + shares));
        storage.set(&DaoKey::TotalShares, &(total + shares));
    }

    pub fn approved_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DaoKey::ApprovedToken)
            .expect("dao not configured")
    }

    pub fn shares_of(env: Env, member: Address) -> u64 {
        read_shares(&env, &member)
    }

    pub fn ragequit(env: Env, member: Address, shares_to_burn: u64) -> Result<(), DaoError> {
        member.require_auth();
        let held = read_shares(&env, &member);
        if shares_to_burn == 0 || shares_to_burn > held {
            return Err(DaoError::InsufficientShares);
        }
        let total = read_total(&env);

        let token = token::Client::new(&env, &Self::approved_token(env.clone()));
        let this = env.current_contract_address();
        let payout = token
            .balance(&this)
            .checked_mul(i128::from(shares_to_burn))
            .ok_or(DaoError::Overflow)?
            / i128::from(total);

        let storage = env.storage().instance();
        storage.set(&DaoKey::Shares(member.clone()), &(held - shares_to_burn));
        storage.set(&DaoKey::TotalShares, &(total - shares_to_burn));
        if payout > 0 {
            token.transfer(&this, &member, &payout);
        }

        env.events().publish(
            (Symbol::new(&env, RAGEQUIT),),
            Ragequit {
                member,
                shares: shares_to_burn,
                payout,
            },
        );
        Ok(())
    }
}
