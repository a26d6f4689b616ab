//! # Types
//!
//! Shared data structures used by the contract entry points and storage.
//!
//! ## Config / Round split
//!
//! A campaign is stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at deployment; never mutated.
//! - [`CampaignRound`] — the state machine, written on every participation
//!   and every winner pick.
//!
//! The public API exposes the reconstructed [`Campaign`] view for convenience.

use soroban_sdk::{contracttype, Address, Vec};

use crate::round::CampaignRound;

/// Immutable campaign configuration, written once at deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// Sequential handle assigned by the factory.
    pub id: u64,
    /// Token contributions are paid in and prizes are paid out in.
    pub token: Address,
    /// Deployment parameter, stored verbatim. Informational only.
    pub target: i128,
    /// Ledger timestamp of deployment.
    pub created_at: u64,
}

/// Read-only view of a campaign, combining its config and current round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub organizer: Address,
    pub token: Address,
    pub target: i128,
    pub created_at: u64,
    pub round_number: u32,
    pub balance: i128,
    /// Participants of the current round, in registration order.
    pub participants: Vec<Address>,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, round: CampaignRound) -> Self {
        Campaign {
            id: config.id,
            organizer: round.organizer.clone(),
            token: config.token,
            target: config.target,
            created_at: config.created_at,
            round_number: round.round_number,
            balance: round.balance(),
            participants: round.all_participants(),
        }
    }
}

/// Record of a closed round. Written once, never modified.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundResult {
    pub round: u32,
    pub winner: Address,
    pub prize: i128,
    /// Ledger timestamp at which the round was closed.
    pub closed_at: u64,
}
