//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the factory:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type  | Description                          |
//! |-----------------|-------|--------------------------------------|
//! | `CampaignCount` | `u64` | Number of campaigns deployed so far  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                 | Type             | Description                    |
//! |---------------------|------------------|--------------------------------|
//! | `Config(id)`        | `CampaignConfig` | Immutable campaign metadata    |
//! | `Round(id)`         | `CampaignRound`  | Round state machine            |
//! | `Result(id, round)` | `RoundResult`    | Outcome of a closed round      |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Each campaign owns its own entries, so two campaigns never write to the
//! same key.

use soroban_sdk::{contracttype, Env, Vec};

use crate::round::CampaignRound;
use crate::types::{CampaignConfig, RoundResult};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Number of deployed campaigns; also the next handle (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by handle (Persistent).
    Config(u64),
    /// Round state keyed by handle (Persistent).
    Round(u64),
    /// Closed round outcome keyed by handle and round number (Persistent).
    Result(u64, u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Factory counter ──────────────────────────────────────────────────

pub fn campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Read and increment the campaign counter.
/// Returns the handle the new campaign should use.
pub fn next_campaign_id(env: &Env) -> Result<u64, Error> {
    let current = campaign_count(env);
    let next = current.checked_add(1).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    Ok(current)
}

/// Handles of every deployed campaign, in creation order.
pub fn all_campaign_ids(env: &Env) -> Vec<u64> {
    let mut ids = Vec::new(env);
    for id in 0..campaign_count(env) {
        ids.push_back(id);
    }
    ids
}

// ── Campaign entries ─────────────────────────────────────────────────

/// Write config and initial round for a newly deployed campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, round: &CampaignRound) {
    let config_key = DataKey::Config(config.id);
    env.storage().persistent().set(&config_key, config);
    bump_persistent(env, &config_key);
    save_round(env, config.id, round);
}

pub fn load_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    let key = DataKey::Config(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_round(env: &Env, id: u64) -> Result<CampaignRound, Error> {
    let key = DataKey::Round(id);
    let round: CampaignRound = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(round)
}

pub fn save_round(env: &Env, id: u64, round: &CampaignRound) {
    let key = DataKey::Round(id);
    env.storage().persistent().set(&key, round);
    bump_persistent(env, &key);
}

// ── Round history ────────────────────────────────────────────────────

pub fn save_round_result(env: &Env, id: u64, result: &RoundResult) {
    let key = DataKey::Result(id, result.round);
    env.storage().persistent().set(&key, result);
    bump_persistent(env, &key);
}

pub fn load_round_result(env: &Env, id: u64, round: u32) -> Option<RoundResult> {
    let key = DataKey::Result(id, round);
    let result: Option<RoundResult> = env.storage().persistent().get(&key);
    if result.is_some() {
        bump_persistent(env, &key);
    }
    result
}
