use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn release(ctx: Context<Release>) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;
    st.mark_released(now)?;

    msg!("Vesting released at {}", now);
    emit!(VestingReleased {
        mint: st.mint,
        released_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(
        mut,
        seeds = [b"schedule", mint.key().as_ref()],
        bump,
        constraint = schedule.initializer == sender.key() @ VestingError::InvalidSender
    )]
    pub schedule: Account<'info, VestingSchedule>,

    pub mint: Account<'info, Mint>,

    pub sender: Signer<'info>,
}

#[event]
pub struct VestingReleased {
    pub mint: Pubkey,
    pub released_at: i64,
}
