#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::BeneficiaryInput;

declare_id!("5xhjkNtJT4U8v34ZLB3iPauiuxkwc8NjtULu7BZbVcpT");

#[program]
pub mod token_vesting {
    use super::*;

    /// Escrow `total_allocated` tokens from the sender and register the
    /// beneficiary list for this mint. One schedule per mint.
    pub fn initialize(
        ctx: Context<Initialize>,
        beneficiaries: Vec<BeneficiaryInput>,
        total_allocated: u64,
        decimals: u8,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, beneficiaries, total_allocated, decimals)
    }

    /// Flip the release gate. Sender-only; anchors lockup/linear unlock
    /// math at the current timestamp.
    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    /// Pay out whatever has newly unlocked for the calling beneficiary.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Emit the current claimable amount for `wallet` without transferring.
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claim_quote::emit_claim_quote(ctx, wallet)
    }
}
