pub mod beneficiary;
pub mod schedule;

pub use beneficiary::*;
pub use schedule::*;
