use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{BPS_DENOMINATOR, MAX_BENEFICIARIES};
use crate::error::VestingError;
use crate::state::{Beneficiary, BeneficiaryInput, ScheduleStatus, VestingSchedule};
use crate::utils::vesting_math;

pub fn initialize(
    ctx: Context<Initialize>,
    beneficiaries: Vec<BeneficiaryInput>,
    total_allocated: u64,
    decimals: u8,
) -> Result<()> {
    require!(total_allocated > 0, VestingError::InvalidConfig);
    require!(
        !beneficiaries.is_empty() && beneficiaries.len() <= MAX_BENEFICIARIES,
        VestingError::InvalidConfig
    );
    require!(
        decimals == ctx.accounts.mint.decimals,
        VestingError::InvalidTokenMint
    );

    let mut sum: u128 = 0;
    for (i, input) in beneficiaries.iter().enumerate() {
        require!(input.key != Pubkey::default(), VestingError::InvalidConfig);
        require!(input.allocated_tokens > 0, VestingError::InvalidConfig);
        require!(
            (input.initial_bonus_bps as u64) <= BPS_DENOMINATOR,
            VestingError::InvalidConfig
        );
        require!(input.lockup_period >= 0, VestingError::InvalidConfig);
        require!(input.release_period > 0, VestingError::InvalidConfig);

        // Reject duplicate keys within the batch.
        for other in beneficiaries.iter().take(i) {
            require!(other.key != input.key, VestingError::InvalidConfig);
        }

        sum = sum
            .checked_add(input.allocated_tokens as u128)
            .ok_or(VestingError::MathOverflow)?;
    }
    require!(
        sum <= total_allocated as u128,
        VestingError::AllocationExceedsTotal
    );

    let escrow_deposit = vesting_math::to_base_units(total_allocated, decimals)?;
    require!(
        ctx.accounts.wallet_to_withdraw_from.amount >= escrow_deposit,
        VestingError::InsufficientFunds
    );

    let st = &mut ctx.accounts.schedule;
    require!(
        st.status == ScheduleStatus::Uninitialized,
        VestingError::AlreadyInitialized
    );

    st.initializer = ctx.accounts.sender.key();
    st.escrow_wallet = ctx.accounts.escrow_wallet.key();
    st.mint = ctx.accounts.mint.key();
    st.total_allocated = total_allocated;
    st.released_at = 0;
    st.beneficiaries = beneficiaries.iter().map(Beneficiary::from).collect();
    st.status = ScheduleStatus::Initialized;
    st.decimals = decimals;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.wallet_to_withdraw_from.to_account_info(),
                to: ctx.accounts.escrow_wallet.to_account_info(),
                authority: ctx.accounts.sender.to_account_info(),
            },
        ),
        escrow_deposit,
    )?;

    msg!(
        "Escrowed {} base units for {} beneficiaries",
        escrow_deposit,
        ctx.accounts.schedule.beneficiaries.len()
    );

    emit!(ScheduleInitialized {
        mint: ctx.accounts.schedule.mint,
        initializer: ctx.accounts.schedule.initializer,
        total_allocated,
        beneficiary_count: ctx.accounts.schedule.beneficiaries.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = sender,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"schedule", mint.key().as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = sender,
        seeds = [b"escrow", mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = schedule
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = wallet_to_withdraw_from.owner == sender.key() @ VestingError::InvalidTokenAccount,
        constraint = wallet_to_withdraw_from.mint == mint.key() @ VestingError::InvalidTokenMint,
    )]
    pub wallet_to_withdraw_from: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleInitialized {
    pub mint: Pubkey,
    pub initializer: Pubkey,
    pub total_allocated: u64,
    pub beneficiary_count: u8,
}
