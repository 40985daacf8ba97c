use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;
use crate::state::Beneficiary;
use crate::utils::vesting_math;

/// Vesting lifecycle. Transitions are monotonic and happen exactly once:
/// `Uninitialized -> Initialized -> Released`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScheduleStatus {
    #[default]
    Uninitialized,
    Initialized,
    Released,
}

/// One vesting schedule per mint (PDA `[b"schedule", mint]`).
#[account]
#[derive(Default)]
pub struct VestingSchedule {
    /// Funding sender; sole authority for `release`.
    pub initializer: Pubkey,
    /// Escrow token account PDA holding the unclaimed balance.
    pub escrow_wallet: Pubkey,
    pub mint: Pubkey,
    /// Total whole tokens escrowed at initialization.
    pub total_allocated: u64,
    /// Anchor timestamp for lockup/linear math; zero until released.
    pub released_at: i64,
    /// Fixed at initialization; entries mutate only via `record_claim`.
    pub beneficiaries: Vec<Beneficiary>,
    pub status: ScheduleStatus,
    /// Token precision for base-unit scaling (SBF has no floats).
    pub decimals: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // initializer
        32 + // escrow_wallet
        32 + // mint
        8 +  // total_allocated
        8 +  // released_at
        4 + MAX_BENEFICIARIES * Beneficiary::SIZE + // beneficiaries
        1 +  // status
        1;   // decimals

    /// `Initialized -> Released`, recording the release timestamp.
    pub fn mark_released(&mut self, now: i64) -> core::result::Result<(), VestingError> {
        if self.status != ScheduleStatus::Initialized {
            return Err(VestingError::InvalidStateTransition);
        }
        self.status = ScheduleStatus::Released;
        self.released_at = now;
        Ok(())
    }

    pub fn find_beneficiary(
        &self,
        key: &Pubkey,
    ) -> core::result::Result<(usize, &Beneficiary), VestingError> {
        self.beneficiaries
            .iter()
            .enumerate()
            .find(|(_, b)| b.key == *key)
            .ok_or(VestingError::BeneficiaryNotFound)
    }

    /// Claimable amount for `key` at `now`, with the entry's index. Zero
    /// until the schedule is released; nothing unlocks before the gate
    /// flips.
    pub fn claimable_for(
        &self,
        key: &Pubkey,
        now: i64,
    ) -> core::result::Result<(usize, u64), VestingError> {
        let (index, entry) = self.find_beneficiary(key)?;
        if self.status != ScheduleStatus::Released {
            return Ok((index, 0));
        }
        let amount = vesting_math::claimable_amount(entry, self.released_at, now)?;
        Ok((index, amount))
    }

    /// Record a successful payout against the entry at `index`.
    pub fn record_claim(
        &mut self,
        index: usize,
        amount: u64,
    ) -> core::result::Result<(), VestingError> {
        let entry = self
            .beneficiaries
            .get_mut(index)
            .ok_or(VestingError::BeneficiaryNotFound)?;
        let claimed = entry
            .claimed_tokens
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > entry.allocated_tokens {
            return Err(VestingError::MathOverflow);
        }
        entry.claimed_tokens = claimed;
        Ok(())
    }

    /// Whole tokens the escrow still holds: `total_allocated - sum(claimed)`.
    pub fn escrow_remaining(&self) -> core::result::Result<u64, VestingError> {
        let mut claimed: u128 = 0;
        for b in self.beneficiaries.iter() {
            claimed = claimed
                .checked_add(b.claimed_tokens as u128)
                .ok_or(VestingError::MathOverflow)?;
        }
        (self.total_allocated as u128)
            .checked_sub(claimed)
            .ok_or(VestingError::MathOverflow)
            .and_then(|v| u64::try_from(v).map_err(|_| VestingError::MathOverflow))
    }
}
