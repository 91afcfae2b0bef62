use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    IndependentArbiterNeeded = 1,
    NotAuthorized = 2,
    AlreadyPaidOut = 3,
    TransferFailed = 4,
    EscrowNotFound = 5,
    AlreadyInitialized = 6,
    NotInitialized = 7,
    InvalidAmount = 8,
    StateNotAlreadySet = 9,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub id: u64,
    pub depositor: Address,
    pub beneficiary: Address,
    pub arbiter: Address,
    pub token: Address, // Asset the deposit was locked in
    pub locked_amount: i128,
    pub is_executed: bool,
    pub status: EscrowStatus,
    pub created_at: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum EscrowStatus {
    Open = 0,
    Approved = 1,
    Revoked = 2,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    Escrow(u64),                  // Escrow struct mapping
    EscrowCount,                  // Next escrow id
    PartyEscrowCount(Address),    // Number of escrows a party takes part in
    PartyEscrow(Address, u32),    // Position in a party's list -> escrow id
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const TOKEN: Symbol = symbol_short!("TOKEN");

// Largest page `get_party_escrows` returns.
pub const MAX_PAGE_SIZE: u32 = 50;
