//! Client-side tracking of a request sent to the escrow contract.
//!
//! A request starts `Submitted` once a signer has been chosen and moves
//! exactly once to `Confirmed` or `Failed`.

use soroban_sdk::Address;

use super::types::EscrowError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EscrowAction {
    Create,
    Approve(u64),
    Revoke(u64),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    Submitted,
    /// Carries the id of the escrow the request created or resolved.
    Confirmed(u64),
    Failed(EscrowError),
}

#[derive(Clone, Debug)]
pub struct EscrowRequest {
    pub signer: Address,
    pub action: EscrowAction,
    status: RequestStatus,
}

impl EscrowRequest {
    pub fn submit(signer: Address, action: EscrowAction) -> Self {
        EscrowRequest {
            signer,
            action,
            status: RequestStatus::Submitted,
        }
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Submitted)
    }

    /// Marks the request confirmed. Fails with the current status if the
    /// request has already settled.
    pub fn confirm(&mut self, escrow_id: u64) -> Result<(), RequestStatus> {
        self.transition(RequestStatus::Confirmed(escrow_id))
    }

    pub fn fail(&mut self, error: EscrowError) -> Result<(), RequestStatus> {
        self.transition(RequestStatus::Failed(error))
    }

    pub fn settle(&mut self, outcome: Result<u64, EscrowError>) -> Result<(), RequestStatus> {
        match outcome {
            Ok(escrow_id) => self.confirm(escrow_id),
            Err(error) => self.fail(error),
        }
    }

    fn transition(&mut self, next: RequestStatus) -> Result<(), RequestStatus> {
        if !self.is_pending() {
            return Err(self.status);
        }
        self.status = next;
        Ok(())
    }
}
