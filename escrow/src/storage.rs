use common::escrow::types::{
    Escrow, EscrowDataKey as DataKey, EscrowError as Error, MAX_PAGE_SIZE, TOKEN,
};
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage().persistent().set(key, val);
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// INSTANCE STORAGE (config and the id counter)
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn has_data<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    get_data(env, &TOKEN).ok_or(Error::NotInitialized)
}

pub fn escrow_count(env: &Env) -> u64 {
    get_data(env, &DataKey::EscrowCount).unwrap_or(0)
}

pub fn next_escrow_id(env: &Env) -> u64 {
    let escrow_id: u64 = escrow_count(env);
    store_data(env, &DataKey::EscrowCount, &(escrow_id + 1));
    escrow_id
}

// ESCROW RECORDS
pub fn read_escrow(env: &Env, escrow_id: u64) -> Result<Escrow, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Escrow(escrow_id))
        .ok_or(Error::EscrowNotFound)
}

pub fn write_escrow(env: &Env, escrow: &Escrow) {
    store_persistent(env, &DataKey::Escrow(escrow.id), escrow);
}

// PARTY INDEX
// One entry per (party, position) so a party's list never has to be
// rewritten as a whole.
pub fn party_escrow_count(env: &Env, party: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PartyEscrowCount(party.clone()))
        .unwrap_or(0)
}

pub fn add_party_escrow(env: &Env, party: &Address, escrow_id: u64) {
    let position: u32 = party_escrow_count(env, party);
    store_persistent(
        env,
        &DataKey::PartyEscrow(party.clone(), position),
        &escrow_id,
    );
    store_persistent(
        env,
        &DataKey::PartyEscrowCount(party.clone()),
        &(position + 1),
    );
}

pub fn party_escrows(env: &Env, party: &Address, start: u32, limit: u32) -> Vec<u64> {
    let end: u32 = party_escrow_count(env, party).min(start.saturating_add(limit.min(MAX_PAGE_SIZE)));
    let mut escrows: Vec<u64> = Vec::new(env);
    for position in start..end {
        if let Some(escrow_id) = env
            .storage()
            .persistent()
            .get::<DataKey, u64>(&DataKey::PartyEscrow(party.clone(), position))
        {
            escrows.push_back(escrow_id);
        }
    }
    escrows
}
