pub mod claim;
pub mod emit_claim_quote;
pub mod initialize;
pub mod release;

pub use claim::*;
pub use emit_claim_quote::*;
pub use initialize::*;
pub use release::*;
