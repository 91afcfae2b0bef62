#![cfg(test)]

use super::{outcome, EscrowTest, DEPOSIT, DEPOSITOR_FUNDS};
use crate::events::EscrowEvent;
use common::escrow::types::{Escrow, EscrowError as Error, EscrowStatus, MAX_PAGE_SIZE};
use soroban_sdk::testutils::Events;
use soroban_sdk::{log, vec, Env, Vec};

#[test]
fn test_create_new_escrow() {
    let test: EscrowTest = EscrowTest::setup();

    let escrow_id: u64 = test.create_escrow();

    // new escrow will have escrow id 0
    assert_eq!(escrow_id, 0);
    assert_eq!(test.escrow_client.get_depositor(&0), test.depositor);
    assert_eq!(test.escrow_client.get_beneficiary(&0), test.beneficiary);
    assert_eq!(test.escrow_client.get_arbiter(&0), test.arbiter);
    assert_eq!(test.escrow_client.get_locked_amount(&0), DEPOSIT);
    assert!(!test.escrow_client.is_executed(&0));
    assert_eq!(test.escrow_client.status(&0), EscrowStatus::Open);
    assert_eq!(test.escrow_client.escrow_count(), 1);

    // Deposit now sits with the contract
    assert_eq!(
        test.token_client.balance(&test.escrow_client.address),
        DEPOSIT
    );
    assert_eq!(
        test.token_client.balance(&test.depositor),
        DEPOSITOR_FUNDS - DEPOSIT
    );
}

#[test]
fn test_create_new_escrow_publishes_event() {
    let test: EscrowTest = EscrowTest::setup();

    let escrow_id: u64 = test.create_escrow();

    assert!(
        test.published(EscrowEvent::NewEscrow(
            escrow_id,
            test.depositor.clone(),
            test.beneficiary.clone(),
            test.arbiter.clone(),
        )),
        "new escrow event not present"
    );
    log!(&test.env, "{}", test.env.events().all());
}

#[test]
fn test_create_new_escrow_requires_depositor_auth() {
    let test: EscrowTest = EscrowTest::setup();

    test.create_escrow();

    assert!(test
        .env
        .auths()
        .iter()
        .any(|(address, _)| *address == test.depositor));
}

#[test]
fn test_arbiter_must_be_independent() {
    let test: EscrowTest = EscrowTest::setup();

    let same_as_depositor = test.escrow_client.try_create_new_escrow(
        &test.depositor,
        &test.beneficiary,
        &test.depositor,
        &DEPOSIT,
    );
    assert_eq!(outcome(same_as_depositor), Err(Error::IndependentArbiterNeeded));

    let same_as_beneficiary = test.escrow_client.try_create_new_escrow(
        &test.depositor,
        &test.beneficiary,
        &test.beneficiary,
        &DEPOSIT,
    );
    assert_eq!(outcome(same_as_beneficiary), Err(Error::IndependentArbiterNeeded));

    // Nothing stored, nothing moved
    assert_eq!(test.escrow_client.escrow_count(), 0);
    assert_eq!(
        outcome(test.escrow_client.try_get_escrow(&0)),
        Err(Error::EscrowNotFound)
    );
    assert_eq!(test.token_client.balance(&test.depositor), DEPOSITOR_FUNDS);
}

#[test]
fn test_deposit_must_be_positive() {
    let test: EscrowTest = EscrowTest::setup();

    for amount in [0_i128, -DEPOSIT] {
        let result = test.escrow_client.try_create_new_escrow(
            &test.depositor,
            &test.beneficiary,
            &test.arbiter,
            &amount,
        );
        assert_eq!(outcome(result), Err(Error::InvalidAmount));
    }

    assert_eq!(test.escrow_client.escrow_count(), 0);
}

#[test]
fn test_escrow_ids_are_sequential() {
    let test: EscrowTest = EscrowTest::setup();

    assert_eq!(test.create_escrow(), 0);
    assert_eq!(test.create_second_escrow(), 1);
    assert_eq!(test.create_escrow(), 2);

    assert_eq!(test.escrow_client.escrow_count(), 3);
    assert_eq!(test.escrow_client.get_depositor(&1), test.depositor2);
    assert_eq!(test.escrow_client.get_locked_amount(&2), DEPOSIT);
}

#[test]
fn test_party_escrows_index() {
    let test: EscrowTest = EscrowTest::setup();

    test.create_escrow();
    test.create_second_escrow();
    test.escrow_client.create_new_escrow(
        &test.depositor,
        &test.beneficiary2,
        &test.arbiter,
        &DEPOSIT,
    );
    // Depositor paying into an escrow for themselves is allowed
    test.escrow_client.create_new_escrow(
        &test.depositor2,
        &test.depositor2,
        &test.arbiter2,
        &DEPOSIT,
    );

    let env: &Env = &test.env;
    let page = |party| test.escrow_client.get_party_escrows(party, &0, &10);
    assert_eq!(page(&test.depositor), vec![env, 0u64, 2]);
    assert_eq!(page(&test.beneficiary2), vec![env, 1u64, 2]);
    assert_eq!(page(&test.arbiter), vec![env, 0u64, 2]);
    assert_eq!(page(&test.depositor2), vec![env, 1u64, 3]);
    assert_eq!(page(&test.outsider), Vec::<u64>::new(env));
    assert_eq!(test.escrow_client.party_escrow_count(&test.depositor2), 2);
    assert_eq!(test.escrow_client.party_escrow_count(&test.outsider), 0);
}

#[test]
fn test_party_escrows_are_paged() {
    let test: EscrowTest = EscrowTest::setup();
    for _ in 0..(MAX_PAGE_SIZE + 5) {
        test.create_escrow();
    }
    let env: &Env = &test.env;

    assert_eq!(
        test.escrow_client.party_escrow_count(&test.beneficiary),
        MAX_PAGE_SIZE + 5
    );
    assert_eq!(
        test.escrow_client
            .get_party_escrows(&test.beneficiary, &0, &3),
        vec![env, 0u64, 1, 2]
    );

    // Oversized requests are capped
    let first_page: Vec<u64> = test
        .escrow_client
        .get_party_escrows(&test.beneficiary, &0, &u32::MAX);
    assert_eq!(first_page.len(), MAX_PAGE_SIZE);

    let last_page: Vec<u64> = test
        .escrow_client
        .get_party_escrows(&test.beneficiary, &MAX_PAGE_SIZE, &MAX_PAGE_SIZE);
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page.get(4), Some(u64::from(MAX_PAGE_SIZE + 4)));

    assert_eq!(
        test.escrow_client
            .get_party_escrows(&test.beneficiary, &(MAX_PAGE_SIZE + 5), &10),
        Vec::<u64>::new(env)
    );
}

#[test]
fn test_get_escrow_returns_whole_record() {
    let test: EscrowTest = EscrowTest::setup();

    let escrow_id: u64 = test.create_escrow();
    let escrow: Escrow = test.escrow_client.get_escrow(&escrow_id);

    assert_eq!(escrow.id, escrow_id);
    assert_eq!(escrow.locked_amount, DEPOSIT);
    assert_eq!(escrow.status, EscrowStatus::Open);
    assert!(!escrow.is_executed);
    assert_eq!(escrow.depositor, test.depositor);
    assert_eq!(escrow.token, test.token_client.address);
}

#[test]
fn test_unknown_escrow_lookups_fail() {
    let test: EscrowTest = EscrowTest::setup();
    test.create_escrow();

    assert_eq!(
        outcome(test.escrow_client.try_get_depositor(&5)),
        Err(Error::EscrowNotFound)
    );
    assert_eq!(
        outcome(test.escrow_client.try_get_beneficiary(&5)),
        Err(Error::EscrowNotFound)
    );
    assert_eq!(
        outcome(test.escrow_client.try_get_arbiter(&5)),
        Err(Error::EscrowNotFound)
    );
    assert_eq!(
        outcome(test.escrow_client.try_get_locked_amount(&5)),
        Err(Error::EscrowNotFound)
    );
    assert_eq!(
        outcome(test.escrow_client.try_is_executed(&1)),
        Err(Error::EscrowNotFound)
    );
    assert_eq!(
        outcome(test.escrow_client.try_status(&1)),
        Err(Error::EscrowNotFound)
    );
}
