pub mod vesting_math;
