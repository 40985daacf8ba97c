use anchor_lang::prelude::*;

/// Custom error codes for the vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Schedule for this mint is already initialized")]
    AlreadyInitialized,

    #[msg("Sender balance is below the total allocation")]
    InsufficientFunds,

    #[msg("Beneficiary allocations exceed the total allocation")]
    AllocationExceedsTotal,

    #[msg("Sender is not the schedule initializer")]
    InvalidSender,

    #[msg("Invalid vesting state transition")]
    InvalidStateTransition,

    #[msg("Beneficiary does not exist in schedule")]
    BeneficiaryNotFound,

    #[msg("Not allowed to claim new tokens currently")]
    ClaimNotAllowed,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
