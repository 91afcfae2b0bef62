#![no_std]
//! Minimal token used by tests. Speaks the `transfer`/`balance` subset of
//! the token interface and can be told to reject incoming funds for a
//! given address.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockTokenError {
    InsufficientBalance = 1,
    RecipientRejected = 2,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Balance(Address),
    Rejecting(Address),
}

#[contract]
pub struct MockTokenContract;

#[contractimpl]
impl MockTokenContract {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance: i128 = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Balance(to), &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn set_rejecting(env: Env, id: Address, rejecting: bool) {
        if rejecting {
            env.storage().persistent().set(&DataKey::Rejecting(id), &true);
        } else {
            env.storage().persistent().remove(&DataKey::Rejecting(id));
        }
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if env.storage().persistent().has(&DataKey::Rejecting(to.clone())) {
            panic_with_error!(&env, MockTokenError::RecipientRejected);
        }

        let from_balance: i128 = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic_with_error!(&env, MockTokenError::InsufficientBalance);
        }
        env.storage()
            .persistent()
            .set(&DataKey::Balance(from), &(from_balance - amount));

        let to_balance: i128 = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Balance(to), &(to_balance + amount));
    }
}
