//! # Campaign round state machine
//!
//! A [`CampaignRound`] composes the [`ParticipantRegistry`] and the
//! [`FundsCustody`] of one campaign with its organizer and round counter.
//!
//! ```text
//!            participate (≥ MIN_CONTRIBUTION, not yet registered)
//!           ┌──────┐
//!           ▼      │
//!   ──► Open(n) ───┘
//!           │
//!           │ pick_winner (organizer, ≥ 1 participant)
//!           ▼
//!       Open(n + 1)   registry cleared, custody drained
//! ```
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! round exactly as it was. Storage and token movement are the contract
//! layer's concern; this module is plain value logic.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::custody::FundsCustody;
use crate::registry::ParticipantRegistry;
use crate::selection::WinnerSelector;
use crate::Error;

/// Round number of a freshly deployed campaign.
pub const FIRST_ROUND: u32 = 1;

/// Upper bound on participants per round, keeps `contains` and the payout
/// path within a predictable budget.
pub const MAX_PARTICIPANTS_PER_ROUND: u32 = 500;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignRound {
    /// Fixed at deployment, never reassigned.
    pub organizer: Address,
    pub round_number: u32,
    pub registry: ParticipantRegistry,
    pub custody: FundsCustody,
}

/// Outcome of a closed round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    /// The round that was closed, not the one that just opened.
    pub round: u32,
    pub winner: Address,
    pub prize: i128,
}

impl CampaignRound {
    pub fn new(env: &Env, organizer: Address) -> Self {
        Self {
            organizer,
            round_number: FIRST_ROUND,
            registry: ParticipantRegistry::new(env),
            custody: FundsCustody::new(),
        }
    }

    /// Register `caller` with a contribution of `amount`.
    ///
    /// Checks run in this order: contribution size, duplicate, capacity.
    pub fn participate(&mut self, caller: &Address, amount: i128) -> Result<(), Error> {
        let mut custody = self.custody.clone();
        custody.deposit(amount)?;

        if self.registry.contains(caller) {
            return Err(Error::DuplicateParticipant);
        }
        if self.registry.count() >= MAX_PARTICIPANTS_PER_ROUND {
            return Err(Error::RoundFull);
        }

        self.registry.register(caller)?;
        self.custody = custody;
        Ok(())
    }

    /// Close the round: pay the pool to a selected participant and open the
    /// next round with empty state.
    pub fn pick_winner<S: WinnerSelector>(
        &mut self,
        env: &Env,
        caller: &Address,
        selector: &S,
    ) -> Result<Payout, Error> {
        if *caller != self.organizer {
            return Err(Error::NotOrganizer);
        }
        if self.registry.is_empty() {
            return Err(Error::NoParticipants);
        }

        let index = selector.select(self.registry.count());
        let winner = self.registry.participant_at(index.saturating_add(1))?;
        let next_round = self.round_number.checked_add(1).ok_or(Error::Overflow)?;

        let closed = self.round_number;
        let prize = self.custody.payout();
        self.registry.clear(env);
        self.round_number = next_round;

        Ok(Payout {
            round: closed,
            winner,
            prize,
        })
    }

    pub fn can_participate(&self, caller: &Address) -> bool {
        !self.registry.contains(caller)
    }

    pub fn balance(&self) -> i128 {
        self.custody.balance()
    }

    pub fn number_of_participants(&self) -> u32 {
        self.registry.count()
    }

    pub fn all_participants(&self) -> Vec<Address> {
        self.registry.all()
    }

    /// 1-based, see [`ParticipantRegistry::participant_at`].
    pub fn participant_at(&self, index: u32) -> Result<Address, Error> {
        self.registry.participant_at(index)
    }
}
