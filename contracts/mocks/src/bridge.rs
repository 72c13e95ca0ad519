use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, token, Address, Env, Symbol, Vec,
};

pub const DONATE: &str = "donate";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum BridgeKey {
    Owner,
    EscapeHatchCaller,
    EscapeHatchDestination,
    Whitelisted(Address),
    /// Part of the bridge's balance already claimed by recorded donations.
    Accounted(Address),
    Donations,
    Paused,
}

/// One donation as the bridge recorded it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub giver_id: u64,
    pub receiver_id: u64,
    pub token: Address,
    pub amount: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BridgeError {
    Paused = 1,
    TokenNotWhitelisted = 2,
    ZeroDonation = 3,
    DonationNotReceived = 4,
}

/// Reference donation bridge. A donation is only recorded for a whitelisted
/// token, and only when the bridge holds at least `amount` of it beyond what
/// earlier donations account for.
#[contract]
pub struct LocalBridge;

fn read_address(env: &Env, key: &BridgeKey) -> Address {
    env.storage()
        .instance()
        .get(key)
        .expect("bridge not configured")
}

#[contractimpl]
impl LocalBridge {
    pub fn __constructor(
        env: Env,
        owner: Address,
        escape_hatch_caller: Address,
        escape_hatch_destination: Address,
    ) {
        let storage = env.storage().instance();
        storage.set(&BridgeKey::Owner, &owner);
        storage.set(&BridgeKey::EscapeHatchCaller, &escape_hatch_caller);
        storage.set(&BridgeKey::EscapeHatchDestination, &escape_hatch_destination);
    }

    pub fn owner(env: Env) -> Address {
        read_address(&env, &BridgeKey::Owner)
    }

    pub fn escape_hatch_caller(env: Env) -> Address {
        read_address(&env, &BridgeKey::EscapeHatchCaller)
    }

    pub fn escape_hatch_destination(env: Env) -> Address {
        read_address(&env, &BridgeKey::EscapeHatchDestination)
    }

    pub fn whitelist_token(env: Env, token: Address) {
        env.storage()
            .instance()
            .set(&BridgeKey::Whitelisted(token), &true);
    }

    /// Make every subsequent `donate` fail.
    pub fn pause(env: Env) {
        env.storage().instance().set(&BridgeKey::Paused, &true);
    }

    pub fn donations(env: Env) -> Vec<Donation> {
        env.storage()
            .instance()
            .get(&BridgeKey::Donations)
            .unwrap_or(Vec::new(&env))
    }

    pub fn donate(
        env: Env,
        giver_id: u64,
        receiver_id: u64,
        token: Address,
        amount: i128,
    ) -> Result<(), BridgeError> {
        let storage = env.storage().instance();
        if storage.get::<_, bool>(&BridgeKey::Paused).unwrap_or(false) {
            return Err(BridgeError::Paused);
        }
        if !storage
            .get::<_, bool>(&BridgeKey::Whitelisted(token.clone()))
            .unwrap_or(false)
        {
            return Err(BridgeError::TokenNotWhitelisted);
        }
        if amount <= 0 {
            return Err(BridgeError::ZeroDonation);
        }

        let held = token::Client::new(&env, &token).balance(&env.current_contract_address());
        let accounted: i128 = storage
            .get(&BridgeKey::Accounted(token.clone()))
            .unwrap_or(0);
        if held - accounted < amount {
            return Err(BridgeError::DonationNotReceived);
        }
        storage.set(&BridgeKey::Accounted(token.clone()), &(accounted + amount));

        let donation = Donation {
            giver_id,
            receiver_id,
            token,
            amount,
        };
        let mut donations = Self::donations(env.clone());
        donations.push_back(donation.clone());
        storage.set(&BridgeKey::Donations, &donations);

        env.events()
            .publish((Symbol::new(&env, DONATE),), donation);
        Ok(())
    }
}
