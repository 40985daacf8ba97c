use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::state::VestingSchedule;

/// Read-only quote of the currently claimable amount for `wallet`. Before
/// release the quote is zero.
pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
    let st = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let (index, claimable) = st.claimable_for(&wallet, now)?;
    let entry = &st.beneficiaries[index];

    emit!(ClaimQuote {
        mint: st.mint,
        wallet,
        claimable,
        claimed_tokens: entry.claimed_tokens,
        allocated_tokens: entry.allocated_tokens,
        escrow_remaining: st.escrow_remaining()?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"schedule", mint.key().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,

    pub mint: Account<'info, Mint>,
}

#[event]
pub struct ClaimQuote {
    pub mint: Pubkey,
    pub wallet: Pubkey,
    pub claimable: u64,
    pub claimed_tokens: u64,
    pub allocated_tokens: u64,
    pub escrow_remaining: u64,
}
