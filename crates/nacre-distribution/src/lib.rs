// crates/nacre-distribution/src/lib.rs
//
// nacre-distribution: $NCR supply constants, the pre-mined distribution
// table, and the locked-address transaction check for the Nacre Protocol.
//
// The entire $NCR supply exists from genesis, split equally across a fixed
// table of distribution addresses. Only a prefix of that table is spendable;
// the transaction-verification layer calls `Distribution::transaction_is_locked`
// to reject spends from the frozen remainder.
//
// All monetary values are tracked in grit (the smallest unit of $NCR).
// 1 NCR = 1,000,000 grit (10^6).

mod addresses;
pub mod distribution;
pub mod supply;
pub mod token;

// Re-export key types for ergonomic access from downstream crates.
pub use distribution::Distribution;
pub use supply::{
    DISTRIBUTION_ADDRESSES_TOTAL, INITIAL_UNLOCKED_COUNT, UNLOCK_ADDRESS_RATE,
    UNLOCK_TIME_INTERVAL,
};
pub use token::{Grit, Ncr, GRIT_PER_NCR, MAX_SUPPLY_GRIT};
