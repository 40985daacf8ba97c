use anchor_lang::prelude::*;

/// A single beneficiary entry stored in the schedule account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Beneficiary {
    pub key: Pubkey,
    /// Total whole tokens this beneficiary is entitled to.
    pub allocated_tokens: u64,
    /// Running total already withdrawn; starts at 0, never decreases.
    pub claimed_tokens: u64,
    /// Fraction of the allocation unlocked at release, in basis points.
    pub initial_bonus_bps: u16,
    /// Seconds after release before linear unlock begins.
    pub lockup_period: i64,
    /// Seconds over which the non-bonus remainder unlocks linearly.
    pub release_period: i64,
}

impl Beneficiary {
    pub const SIZE: usize =
        32 + // key
        8 +  // allocated_tokens
        8 +  // claimed_tokens
        2 +  // initial_bonus_bps
        8 +  // lockup_period
        8;   // release_period
}

/// Instruction input; `claimed_tokens` is not caller-supplied and always
/// starts at zero.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryInput {
    pub key: Pubkey,
    pub allocated_tokens: u64,
    pub initial_bonus_bps: u16,
    pub lockup_period: i64,
    pub release_period: i64,
}

impl From<&BeneficiaryInput> for Beneficiary {
    fn from(input: &BeneficiaryInput) -> Self {
        Self {
            key: input.key,
            allocated_tokens: input.allocated_tokens,
            claimed_tokens: 0,
            initial_bonus_bps: input.initial_bonus_bps,
            lockup_period: input.lockup_period,
            release_period: input.release_period,
        }
    }
}
