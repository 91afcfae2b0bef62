use common::escrow::types::{Escrow, EscrowError as Error, EscrowStatus};
use soroban_sdk::{token, Address, Env};

use crate::storage::{add_party_escrow, read_escrow, write_escrow};

/// Moves `amount` of `token`. A transfer the token contract refuses comes
/// back as `TransferFailed` instead of trapping, so callers can fail the
/// whole invocation with a named error.
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client: token::TokenClient<'_> = token::Client::new(env, token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

// The arbiter always differs from the other two; depositor and beneficiary
// may be the same address and are indexed once.
pub fn index_parties(env: &Env, escrow: &Escrow) {
    add_party_escrow(env, &escrow.depositor, escrow.id);
    if escrow.beneficiary != escrow.depositor {
        add_party_escrow(env, &escrow.beneficiary, escrow.id);
    }
    add_party_escrow(env, &escrow.arbiter, escrow.id);
}

/// Latches the escrow into `outcome` and pays out in the token the deposit
/// was locked in. The latch is written before the transfer; a failed
/// transfer returns an error, which rolls back the latch along with the
/// rest of the invocation.
pub fn resolve(
    env: &Env,
    caller: &Address,
    escrow_id: u64,
    outcome: EscrowStatus,
) -> Result<Escrow, Error> {
    caller.require_auth();
    let mut escrow: Escrow = read_escrow(env, escrow_id)?;

    if *caller != escrow.arbiter {
        return Err(Error::NotAuthorized);
    }
    if escrow.is_executed {
        return Err(Error::AlreadyPaidOut);
    }

    escrow.is_executed = true;
    escrow.status = outcome;
    write_escrow(env, &escrow);

    let recipient: &Address = match outcome {
        EscrowStatus::Approved => &escrow.beneficiary,
        _ => &escrow.depositor,
    };
    transfer(
        env,
        &escrow.token,
        &env.current_contract_address(),
        recipient,
        escrow.locked_amount,
    )?;

    Ok(escrow)
}
