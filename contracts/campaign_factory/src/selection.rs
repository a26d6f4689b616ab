//! # Winner selection
//!
//! Picking a winner goes through [`WinnerSelector`] so the state machine never
//! touches an entropy source directly.
//!
//! ## Entropy warning
//!
//! [`PrngSelector`] draws from the host PRNG (`env.prng()`). Its seed is
//! derived from ledger data that validators can influence, so it is fine for
//! small pools but should not guard high-value draws. Those need a
//! commit-reveal scheme or an external randomness oracle plugged in behind
//! this trait.

use soroban_sdk::Env;

pub trait WinnerSelector {
    /// Return a 0-based index into a registry of `count` participants.
    /// `count` is always at least 1.
    fn select(&self, count: u32) -> u32;
}

/// Uniform selection from the Soroban host PRNG.
pub struct PrngSelector<'a> {
    env: &'a Env,
}

impl<'a> PrngSelector<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl WinnerSelector for PrngSelector<'_> {
    fn select(&self, count: u32) -> u32 {
        let last = u64::from(count.saturating_sub(1));
        let index: u64 = self.env.prng().gen_range(0..=last);
        index as u32
    }
}

/// Always picks the same index. Used to make draws reproducible in tests.
#[cfg(test)]
pub struct FixedSelector(pub u32);

#[cfg(test)]
impl WinnerSelector for FixedSelector {
    fn select(&self, _count: u32) -> u32 {
        self.0
    }
}
