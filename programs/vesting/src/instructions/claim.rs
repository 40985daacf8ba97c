use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingSchedule;
use crate::utils::vesting_math;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;
    let mint_key = ctx.accounts.mint.key();
    let sender_key = ctx.accounts.sender.key();
    let now = Clock::get()?.unix_timestamp;

    let st = &mut ctx.accounts.schedule;
    // Zero before the release gate flips, zero when nothing has newly
    // unlocked; both are the same refusal.
    let (index, payable) = st.claimable_for(&sender_key, now)?;
    require!(payable > 0, VestingError::ClaimNotAllowed);

    let transfer_amount = vesting_math::to_base_units(payable, st.decimals)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", mint_key.as_ref(), &[schedule_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_wallet.to_account_info(),
                to: ctx.accounts.wallet_to_deposit_to.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        transfer_amount,
    )?;

    let st = &mut ctx.accounts.schedule;
    st.record_claim(index, payable)?;

    emit!(TokensClaimed {
        mint: st.mint,
        wallet: sender_key,
        amount: payable,
        claimed_total: st.beneficiaries[index].claimed_tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [b"schedule", mint.key().as_ref()],
        bump,
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"escrow", mint.key().as_ref()],
        bump,
        constraint = escrow_wallet.key() == schedule.escrow_wallet @ VestingError::InvalidTokenAccount,
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(constraint = mint.key() == schedule.mint @ VestingError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = sender,
        associated_token::mint = mint,
        associated_token::authority = sender
    )]
    pub wallet_to_deposit_to: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub mint: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
