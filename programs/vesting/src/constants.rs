//! Program-wide constants.

/// Max beneficiaries stored in a single schedule account.
pub const MAX_BENEFICIARIES: usize = 50;

/// Basis-point denominator for the initial bonus fraction.
pub const BPS_DENOMINATOR: u64 = 10_000;
