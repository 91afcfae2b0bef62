use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol, Vec};
use super::types::{Escrow, EscrowError as Error, EscrowStatus};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn create_new_escrow(
        env: Env,
        depositor: Address,
        beneficiary: Address,
        arbiter: Address,
        amount: i128,
    ) -> Result<u64, Error>;
    fn approve(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error>;
    fn revoke(env: Env, caller: Address, escrow_id: u64) -> Result<(), Error>;
    fn get_depositor(env: Env, escrow_id: u64) -> Result<Address, Error>;
    fn get_beneficiary(env: Env, escrow_id: u64) -> Result<Address, Error>;
    fn get_arbiter(env: Env, escrow_id: u64) -> Result<Address, Error>;
    fn get_locked_amount(env: Env, escrow_id: u64) -> Result<i128, Error>;
    fn is_executed(env: Env, escrow_id: u64) -> Result<bool, Error>;
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error>;
    fn status(env: Env, escrow_id: u64) -> Result<EscrowStatus, Error>;
    fn escrow_count(env: Env) -> u64;
    fn party_escrow_count(env: Env, party: Address) -> u32;
    fn get_party_escrows(env: Env, party: Address, start: u32, limit: u32) -> Vec<u64>;
    fn token(env: Env) -> Result<Address, Error>;
}
