use soroban_sdk::{Address, Env, Val, Vec};

pub enum EscrowEvent {
    Initialized,
    Upgraded(u32),
    NewEscrow(u64, Address, Address, Address),
    Approved(u64),
    Revoked(u64),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::NewEscrow(..) => stringify!(NewEscrow),
            EscrowEvent::Approved(..) => stringify!(Approved),
            EscrowEvent::Revoked(..) => stringify!(Revoked),
        }
    }

    pub fn publish(&self, env: &Env) {
        match self {
            EscrowEvent::Initialized => {
                let v: Vec<Val> = Vec::new(env);
                env.events().publish((self.name(),), v)
            }
            EscrowEvent::Upgraded(version) => env.events().publish((self.name(),), *version),
            // Parties go into topics so a client can filter on any one of them.
            EscrowEvent::NewEscrow(escrow_id, depositor, beneficiary, arbiter) => {
                env.events().publish(
                    (
                        self.name(),
                        depositor.clone(),
                        beneficiary.clone(),
                        arbiter.clone(),
                    ),
                    *escrow_id,
                )
            }
            EscrowEvent::Approved(escrow_id) | EscrowEvent::Revoked(escrow_id) => {
                env.events().publish((self.name(),), *escrow_id)
            }
        }
    }
}
