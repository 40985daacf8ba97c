//! Pure claim arithmetic: bonus + capped linear unlock.
//!
//! All quantities are whole tokens; `to_base_units` scales for CPI
//! transfers. Intermediate math runs in `u128` and every narrowing or
//! overflowing step maps to `VestingError::MathOverflow`.

use crate::constants::BPS_DENOMINATOR;
use crate::error::VestingError;
use crate::state::Beneficiary;

type MathResult<T> = core::result::Result<T, VestingError>;

/// Total whole tokens unlocked for `entry` at `now`, anchored at the
/// schedule's release timestamp. Monotone in `now`, capped at the
/// allocation.
///
/// - The bonus fraction is unlocked unconditionally once released.
/// - Before `released_at + lockup_period` the linear portion is zero.
/// - Afterwards the non-bonus remainder unlocks linearly over
///   `release_period`, saturating once the period has fully elapsed.
pub fn unlocked_amount(entry: &Beneficiary, released_at: i64, now: i64) -> MathResult<u64> {
    let allocated = entry.allocated_tokens as u128;
    let bonus = allocated
        .checked_mul(entry.initial_bonus_bps as u128)
        .ok_or(VestingError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    let remaining = allocated
        .checked_sub(bonus)
        .ok_or(VestingError::MathOverflow)?;

    let lockup_end = released_at
        .checked_add(entry.lockup_period)
        .ok_or(VestingError::MathOverflow)?;

    let linear = if now < lockup_end || entry.release_period <= 0 {
        0
    } else {
        let elapsed = (now - lockup_end).min(entry.release_period) as u128;
        remaining
            .checked_mul(elapsed)
            .ok_or(VestingError::MathOverflow)?
            / entry.release_period as u128
    };

    let unlocked = (bonus + linear).min(allocated);
    u64::try_from(unlocked).map_err(|_| VestingError::MathOverflow)
}

/// Newly claimable now: unlocked-to-date minus already claimed. Zero means
/// the caller must wait for more balance to unlock.
pub fn claimable_amount(entry: &Beneficiary, released_at: i64, now: i64) -> MathResult<u64> {
    let unlocked = unlocked_amount(entry, released_at, now)?;
    unlocked
        .checked_sub(entry.claimed_tokens)
        .ok_or(VestingError::MathOverflow)
}

/// Scale whole tokens into base units: `amount * 10^decimals`.
pub fn to_base_units(amount: u64, decimals: u8) -> MathResult<u64> {
    let scale = 10u128
        .checked_pow(decimals as u32)
        .ok_or(VestingError::MathOverflow)?;
    let scaled = (amount as u128)
        .checked_mul(scale)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(scaled).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    /// Seconds in a 30-day vesting month.
    const SECONDS_PER_MONTH: i64 = 30 * 24 * 60 * 60;

    const RELEASED_AT: i64 = 1_700_000_000;

    fn entry(allocated: u64, bonus_bps: u16, lockup: i64, release: i64) -> Beneficiary {
        Beneficiary {
            key: Pubkey::new_unique(),
            allocated_tokens: allocated,
            claimed_tokens: 0,
            initial_bonus_bps: bonus_bps,
            lockup_period: lockup,
            release_period: release,
        }
    }

    #[test]
    fn nine_of_twelve_months_vests_three_quarters() {
        // 100 tokens, no bonus, 12-month lockup, 12-month linear release.
        let b = entry(100, 0, 12 * SECONDS_PER_MONTH, 12 * SECONDS_PER_MONTH);
        let lockup_end = RELEASED_AT + 12 * SECONDS_PER_MONTH;

        let now = lockup_end + 9 * SECONDS_PER_MONTH;
        assert_eq!(unlocked_amount(&b, RELEASED_AT, now).unwrap(), 75);
        assert_eq!(claimable_amount(&b, RELEASED_AT, now).unwrap(), 75);
    }

    #[test]
    fn nothing_linear_before_lockup_ends() {
        let b = entry(100, 0, 12 * SECONDS_PER_MONTH, 12 * SECONDS_PER_MONTH);
        let just_before = RELEASED_AT + 12 * SECONDS_PER_MONTH - 1;
        assert_eq!(unlocked_amount(&b, RELEASED_AT, just_before).unwrap(), 0);
    }

    #[test]
    fn bonus_available_from_first_claim() {
        // 10% bonus is unlockable immediately at release, lockup pending.
        let b = entry(1_000, 1_000, 12 * SECONDS_PER_MONTH, 12 * SECONDS_PER_MONTH);
        assert_eq!(unlocked_amount(&b, RELEASED_AT, RELEASED_AT).unwrap(), 100);
    }

    #[test]
    fn bonus_plus_linear_midway() {
        // 1000 tokens, 10% bonus, 6 of 12 months elapsed after lockup:
        // 100 + 900 * 6/12 = 550.
        let b = entry(1_000, 1_000, SECONDS_PER_MONTH, 12 * SECONDS_PER_MONTH);
        let now = RELEASED_AT + SECONDS_PER_MONTH + 6 * SECONDS_PER_MONTH;
        assert_eq!(unlocked_amount(&b, RELEASED_AT, now).unwrap(), 550);
    }

    #[test]
    fn unlock_caps_at_allocation() {
        let b = entry(100, 2_500, 0, 12 * SECONDS_PER_MONTH);
        let far_future = RELEASED_AT + 100 * SECONDS_PER_MONTH;
        assert_eq!(unlocked_amount(&b, RELEASED_AT, far_future).unwrap(), 100);
    }

    #[test]
    fn full_bonus_unlocks_everything_at_release() {
        let b = entry(100, 10_000, 12 * SECONDS_PER_MONTH, 12 * SECONDS_PER_MONTH);
        assert_eq!(unlocked_amount(&b, RELEASED_AT, RELEASED_AT).unwrap(), 100);
    }

    #[test]
    fn unlocked_is_monotone_and_bounded() {
        let b = entry(997, 750, 2 * SECONDS_PER_MONTH, 10 * SECONDS_PER_MONTH);
        let mut prev = 0;
        for month in 0..=15 {
            let now = RELEASED_AT + month * SECONDS_PER_MONTH;
            let unlocked = unlocked_amount(&b, RELEASED_AT, now).unwrap();
            assert!(unlocked >= prev, "unlock regressed at month {}", month);
            assert!(unlocked <= b.allocated_tokens);
            prev = unlocked;
        }
        assert_eq!(prev, b.allocated_tokens);
    }

    #[test]
    fn repeat_claim_after_full_payout_yields_zero() {
        let mut b = entry(100, 0, SECONDS_PER_MONTH, 12 * SECONDS_PER_MONTH);
        let done = RELEASED_AT + 13 * SECONDS_PER_MONTH;

        let first = claimable_amount(&b, RELEASED_AT, done).unwrap();
        assert_eq!(first, 100);
        b.claimed_tokens += first;

        // Nothing newly unlocked at the same instant or any later one.
        assert_eq!(claimable_amount(&b, RELEASED_AT, done).unwrap(), 0);
        assert_eq!(
            claimable_amount(&b, RELEASED_AT, done + SECONDS_PER_MONTH).unwrap(),
            0
        );
    }

    #[test]
    fn incremental_claims_accumulate_to_allocation() {
        let mut b = entry(100, 0, 0, 12 * SECONDS_PER_MONTH);
        let mut total = 0u64;
        for month in [3, 7, 12] {
            let now = RELEASED_AT + month * SECONDS_PER_MONTH;
            let payable = claimable_amount(&b, RELEASED_AT, now).unwrap();
            b.claimed_tokens += payable;
            total += payable;
        }
        assert_eq!(total, 100);
        assert_eq!(b.claimed_tokens, b.allocated_tokens);
    }

    #[test]
    fn base_unit_scaling() {
        assert_eq!(to_base_units(1_000, 0).unwrap(), 1_000);
        assert_eq!(to_base_units(1_000, 9).unwrap(), 1_000_000_000_000);
        assert!(matches!(
            to_base_units(u64::MAX, 2),
            Err(VestingError::MathOverflow)
        ));
    }
}
