//! # Participant registry
//!
//! Ordered set of the addresses that joined the *current* round of a
//! campaign. Insertion order is preserved and an address appears at most
//! once per round. The registry is emptied when the round closes.
//!
//! Public indexing is **1-based**: the first participant of a round lives at
//! index `1`.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRegistry {
    pub participants: Vec<Address>,
}

impl ParticipantRegistry {
    pub fn new(env: &Env) -> Self {
        Self {
            participants: Vec::new(env),
        }
    }

    /// Append `address` to the round.
    ///
    /// Fails with `DuplicateParticipant` if it already joined this round.
    pub fn register(&mut self, address: &Address) -> Result<(), Error> {
        if self.contains(address) {
            return Err(Error::DuplicateParticipant);
        }
        self.participants.push_back(address.clone());
        Ok(())
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.participants.contains(address)
    }

    pub fn count(&self) -> u32 {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Snapshot of the participants in registration order.
    pub fn all(&self) -> Vec<Address> {
        self.participants.clone()
    }

    /// 1-based lookup. Index `0` and anything past `count()` are out of range.
    pub fn participant_at(&self, index: u32) -> Result<Address, Error> {
        if index == 0 {
            return Err(Error::IndexOutOfRange);
        }
        self.participants
            .get(index - 1)
            .ok_or(Error::IndexOutOfRange)
    }

    pub fn clear(&mut self, env: &Env) {
        self.participants = Vec::new(env);
    }
}
