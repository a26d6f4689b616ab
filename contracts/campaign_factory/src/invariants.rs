#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Vec};

use crate::types::Campaign;
use crate::{FIRST_ROUND, MAX_PARTICIPANTS_PER_ROUND, MIN_CONTRIBUTION};

/// INV-1: A campaign is always in round 1 or later.
pub fn assert_round_positive(campaign: &Campaign) {
    assert!(
        campaign.round_number >= FIRST_ROUND,
        "INV-1 violated: campaign {} is in round {}",
        campaign.id,
        campaign.round_number
    );
}

/// INV-2: The pool holds at least the minimum for every participant, and is
/// empty exactly when nobody has joined.
pub fn assert_balance_covers_participants(campaign: &Campaign) {
    let count = campaign.participants.len() as i128;
    assert!(
        campaign.balance >= count * MIN_CONTRIBUTION,
        "INV-2 violated: campaign {} holds {} for {} participants",
        campaign.id,
        campaign.balance,
        count
    );
    assert_eq!(
        campaign.balance == 0,
        count == 0,
        "INV-2 violated: campaign {} balance {} with {} participants",
        campaign.id,
        campaign.balance,
        count
    );
}

/// INV-3: No address appears twice in one round.
pub fn assert_participants_unique(campaign: &Campaign) {
    let participants = &campaign.participants;
    for i in 0..participants.len() {
        let a = participants.get_unchecked(i);
        for j in (i + 1)..participants.len() {
            assert_ne!(
                a,
                participants.get_unchecked(j),
                "INV-3 violated: duplicate participant in campaign {}",
                campaign.id
            );
        }
    }
}

/// INV-4: A round never exceeds its capacity.
pub fn assert_within_capacity(campaign: &Campaign) {
    assert!(
        campaign.participants.len() <= MAX_PARTICIPANTS_PER_ROUND,
        "INV-4 violated: campaign {} has {} participants",
        campaign.id,
        campaign.participants.len()
    );
}

/// INV-5: After a contribution of `amount`, the pool grows by exactly `amount`.
pub fn assert_deposit_invariant(balance_before: i128, balance_after: i128, amount: i128) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-5 violated: deposit invariant broken: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// INV-6: Closing a round empties it and advances the counter by one.
pub fn assert_round_reset(before: &Campaign, after: &Campaign) {
    assert_eq!(
        after.round_number,
        before.round_number + 1,
        "INV-6 violated: round went from {} to {}",
        before.round_number,
        after.round_number
    );
    assert_eq!(after.balance, 0, "INV-6 violated: balance not drained");
    assert!(
        after.participants.is_empty(),
        "INV-6 violated: participants not cleared"
    );
}

/// INV-7: Campaign handles are sequential starting from 0.
pub fn assert_sequential_ids(ids: &Vec<u64>) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(id, i as u64, "INV-7 violated: expected id {}, got {}", i, id);
    }
}

/// INV-8: Fields fixed at deployment never change.
pub fn assert_campaign_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-8 violated: campaign id changed");
    assert_eq!(
        original.organizer, current.organizer,
        "INV-8 violated: organizer changed"
    );
    assert_eq!(original.token, current.token, "INV-8 violated: token changed");
    assert_eq!(original.target, current.target, "INV-8 violated: target changed");
    assert_eq!(
        original.created_at, current.created_at,
        "INV-8 violated: created_at changed"
    );
}

/// INV-9: The winner of a round was one of its participants.
pub fn assert_winner_was_participant(winner: &Address, participants: &Vec<Address>) {
    assert!(
        participants.contains(winner),
        "INV-9 violated: winner did not participate in the round"
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_round_positive(campaign);
    assert_balance_covers_participants(campaign);
    assert_participants_unique(campaign);
    assert_within_capacity(campaign);
}
