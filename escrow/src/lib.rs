#![no_std]

mod events;
mod storage;
mod utils;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{
        Escrow, EscrowDataKey as DataKey, EscrowError as Error, EscrowStatus, ADMIN, TOKEN,
    },
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Symbol, Vec};
use storage::{
    escrow_count, get_data, get_token, has_data, next_escrow_id, party_escrow_count,
    party_escrows, read_escrow, store_data, write_escrow,
};
use utils::{index_parties, resolve, transfer};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        store_data(&env, &ADMIN, &admin);
        store_data(&env, &TOKEN, &token);
        store_data(&env, &DataKey::EscrowCount, &0u64);
        EscrowEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    // The depositor funds the escrow from their own balance of the current
    // deposit token, which is recorded on the escrow so later changes to
    // TOKEN never affect it. The arbiter must be a third party.
    fn create_new_escrow(
        env: Env,
        depositor: Address,
        beneficiary: Address,
        arbiter: Address,
        amount: i128,
    ) -> Result<u64, Error> {
        depositor.require_auth();
        let token: Address = get_token(&env)?;

        if arbiter == depositor || arbiter == beneficiary {
            return Err(Error::IndependentArbiterNeeded);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        transfer(
            &env,
            &token,
            &depositor,
            &env.current_contract_address(),
            amount,
        )?;

        let escrow_id: u64 = next_escrow_id(&env);
        let escrow: Escrow = Escrow {
            id: escrow_id,
            depositor: depositor.clone(),
            beneficiary: beneficiary.clone(),
            arbiter: arbiter.clone(),
            token,
            locked_amount: amount,
            is_executed: false,
            status: EscrowStatus::Open,
            created_at: env.ledger().timestamp(),
        };
        write_escrow(&env, &escrow);
        index_parties(&env, &escrow);

        log!(&env, "escrow {} opened with {} locked", escrow_id, amount);
        EscrowEvent::NewEscrow(escrow_id, depositor, beneficiary, arbiter).publish(&env);

        Ok(escrow_id)
    }

    // Pay the beneficiary
    fn approve(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error> {
        let escrow: Escrow = resolve(&env, &caller, escrow_id, EscrowStatus::Approved)?;

        log!(&env, "escrow {} approved, {} released", escrow_id, escrow.locked_amount);
        EscrowEvent::Approved(escrow_id).publish(&env);
        Ok(())
    }

    // Refund the depositor
    fn revoke(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error> {
        let escrow: Escrow = resolve(&env, &caller, escrow_id, EscrowStatus::Revoked)?;

        log!(&env, "escrow {} revoked, {} refunded", escrow_id, escrow.locked_amount);
        EscrowEvent::Revoked(escrow_id).publish(&env);
        Ok(())
    }

    fn get_depositor(env: Env, escrow_id: u64) -> Result<Address, Error> {
        Ok(read_escrow(&env, escrow_id)?.depositor)
    }

    fn get_beneficiary(env: Env, escrow_id: u64) -> Result<Address, Error> {
        Ok(read_escrow(&env, escrow_id)?.beneficiary)
    }

    fn get_arbiter(env: Env, escrow_id: u64) -> Result<Address, Error> {
        Ok(read_escrow(&env, escrow_id)?.arbiter)
    }

    fn get_locked_amount(env: Env, escrow_id: u64) -> Result<i128, Error> {
        Ok(read_escrow(&env, escrow_id)?.locked_amount)
    }

    fn is_executed(env: Env, escrow_id: u64) -> Result<bool, Error> {
        Ok(read_escrow(&env, escrow_id)?.is_executed)
    }

    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error> {
        read_escrow(&env, escrow_id)
    }

    fn status(env: Env, escrow_id: u64) -> Result<EscrowStatus, Error> {
        Ok(read_escrow(&env, escrow_id)?.status)
    }

    fn escrow_count(env: Env) -> u64 {
        escrow_count(&env)
    }

    fn party_escrow_count(env: Env, party: Address) -> u32 {
        party_escrow_count(&env, &party)
    }

    // Pages through a party's escrows in creation order, at most
    // MAX_PAGE_SIZE ids per call.
    fn get_party_escrows(env: Env, party: Address, start: u32, limit: u32) -> Vec<u64> {
        party_escrows(&env, &party, start, limit)
    }

    fn token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }
}
