//! # Campaign Factory Contract
//!
//! Round-based crowdfunding: the factory deploys independent campaigns, each
//! of which pools contributions from participants and lets its organizer
//! close the round by paying the whole pool to one participant. A new round
//! then starts with an empty participant list.
//!
//! | Phase        | Entry Point(s)                                         |
//! |--------------|--------------------------------------------------------|
//! | Deployment   | [`CampaignFactory::deploy_new_campaign`]               |
//! | Contribution | [`CampaignFactory::participate`]                       |
//! | Payout       | [`CampaignFactory::pick_winner`]                       |
//! | Queries      | `get_all_deployed_campaigns`, `get_campaign`, `get_balance`, `get_number_of_participators`, `get_all_participators`, `get_participator_address`, `round_number`, `organizer_address`, `can_participate`, `get_round_result` |
//!
//! ## Architecture
//!
//! The round state machine lives in [`round`], built from [`registry`] and
//! [`custody`]; it is plain value logic with no storage access. Storage access
//! is delegated to [`storage`]. This file loads state, runs the state machine,
//! moves tokens and emits events.
//!
//! Every invocation is atomic: any failure panics with an [`Error`] code and
//! the host reverts all writes and transfers made by that invocation.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, token, Address, Env, Vec,
};

pub mod custody;
pub mod events;
pub mod registry;
pub mod round;
pub mod selection;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use custody::MIN_CONTRIBUTION;
pub use round::{CampaignRound, Payout, FIRST_ROUND, MAX_PARTICIPANTS_PER_ROUND};
use selection::PrngSelector;
pub use types::{Campaign, CampaignConfig, RoundResult};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    CampaignNotFound = 1,
    ContributionTooSmall = 2,
    DuplicateParticipant = 3,
    NotOrganizer = 4,
    IndexOutOfRange = 5,
    NoParticipants = 6,
    RoundFull = 7,
    Overflow = 8,
}

#[contract]
pub struct CampaignFactory;

#[contractimpl]
impl CampaignFactory {
    // ─────────────────────────────────────────────────────────
    // Factory
    // ─────────────────────────────────────────────────────────

    /// Deploy a new campaign organized by `organizer`.
    ///
    /// - `organizer` must sign and becomes the only address allowed to pick winners.
    /// - `token` is the asset contributions and prizes are paid in.
    /// - `target` is stored verbatim on the campaign config.
    ///
    /// Returns the campaign handle.
    pub fn deploy_new_campaign(env: Env, organizer: Address, token: Address, target: i128) -> u64 {
        organizer.require_auth();

        let id = ok_or_panic(&env, storage::next_campaign_id(&env));
        let config = CampaignConfig {
            id,
            token: token.clone(),
            target,
            created_at: env.ledger().timestamp(),
        };
        let round = CampaignRound::new(&env, organizer.clone());
        storage::save_campaign(&env, &config, &round);

        log!(&env, "campaign {} deployed by {}", id, organizer);
        events::emit_campaign_deployed(&env, id, organizer, token, target);

        id
    }

    /// Handles of every campaign deployed so far, in creation order.
    pub fn get_all_deployed_campaigns(env: Env) -> Vec<u64> {
        storage::all_campaign_ids(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        let config = ok_or_panic(&env, storage::load_config(&env, campaign_id));
        let round = load_round(&env, campaign_id);
        Campaign::from_parts(config, round)
    }

    // ─────────────────────────────────────────────────────────
    // Round lifecycle
    // ─────────────────────────────────────────────────────────

    /// Join the current round of `campaign_id` with a contribution of `amount`.
    ///
    /// `amount` is transferred from `caller` to the contract.
    /// Fails with `ContributionTooSmall`, `DuplicateParticipant` or `RoundFull`.
    pub fn participate(env: Env, campaign_id: u64, caller: Address, amount: i128) {
        caller.require_auth();

        let config = ok_or_panic(&env, storage::load_config(&env, campaign_id));
        let mut round = load_round(&env, campaign_id);
        ok_or_panic(&env, round.participate(&caller, amount));

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&caller, &env.current_contract_address(), &amount);

        storage::save_round(&env, campaign_id, &round);

        log!(
            &env,
            "campaign {} round {}: {} joined with {}",
            campaign_id,
            round.round_number,
            caller,
            amount
        );
        events::emit_participant_joined(&env, campaign_id, round.round_number, caller, amount);
    }

    /// Close the current round of `campaign_id`.
    ///
    /// Only the organizer may call this. The whole pool is transferred to a
    /// participant drawn by [`PrngSelector`], the participant list is cleared
    /// and the round number advances by one. Returns the winner.
    pub fn pick_winner(env: Env, campaign_id: u64, caller: Address) -> Address {
        caller.require_auth();

        let config = ok_or_panic(&env, storage::load_config(&env, campaign_id));
        let mut round = load_round(&env, campaign_id);
        let selector = PrngSelector::new(&env);
        let payout = ok_or_panic(&env, round.pick_winner(&env, &caller, &selector));

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &payout.winner, &payout.prize);

        storage::save_round(&env, campaign_id, &round);
        storage::save_round_result(
            &env,
            campaign_id,
            &RoundResult {
                round: payout.round,
                winner: payout.winner.clone(),
                prize: payout.prize,
                closed_at: env.ledger().timestamp(),
            },
        );

        log!(
            &env,
            "campaign {} round {} closed: {} won {}",
            campaign_id,
            payout.round,
            payout.winner,
            payout.prize
        );
        events::emit_winner_picked(
            &env,
            campaign_id,
            payout.round,
            payout.winner.clone(),
            payout.prize,
        );

        payout.winner
    }

    /// `true` if `caller` has not joined the current round yet.
    pub fn can_participate(env: Env, campaign_id: u64, caller: Address) -> bool {
        load_round(&env, campaign_id).can_participate(&caller)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Pooled balance of the current round.
    pub fn get_balance(env: Env, campaign_id: u64) -> i128 {
        load_round(&env, campaign_id).balance()
    }

    pub fn get_number_of_participators(env: Env, campaign_id: u64) -> u32 {
        load_round(&env, campaign_id).number_of_participants()
    }

    pub fn get_all_participators(env: Env, campaign_id: u64) -> Vec<Address> {
        load_round(&env, campaign_id).all_participants()
    }

    /// Participant at 1-based `index` in the current round.
    pub fn get_participator_address(env: Env, campaign_id: u64, index: u32) -> Address {
        let round = load_round(&env, campaign_id);
        ok_or_panic(&env, round.participant_at(index))
    }

    pub fn round_number(env: Env, campaign_id: u64) -> u32 {
        load_round(&env, campaign_id).round_number
    }

    pub fn organizer_address(env: Env, campaign_id: u64) -> Address {
        load_round(&env, campaign_id).organizer
    }

    /// Outcome of a closed round, `None` if `round` has not closed yet.
    pub fn get_round_result(env: Env, campaign_id: u64, round: u32) -> Option<RoundResult> {
        load_round(&env, campaign_id);
        storage::load_round_result(&env, campaign_id, round)
    }
}

// ─────────────────────────────────────────────────────────
// Internal Helpers
// ─────────────────────────────────────────────────────────

fn load_round(env: &Env, campaign_id: u64) -> CampaignRound {
    ok_or_panic(env, storage::load_round(env, campaign_id))
}

/// Abort the invocation with the contract error code on `Err`.
fn ok_or_panic<T>(env: &Env, result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}
