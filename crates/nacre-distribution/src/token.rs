// crates/nacre-distribution/src/token.rs
//
// $NCR (Nacre) token type and supply constants.
//
// The smallest unit of $NCR is the "grit" (the particle that seeds a pearl).
// 1 NCR = 10^6 grit. All internal accounting uses grit to avoid
// floating-point precision issues in supply calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of grit in one NCR. 1 NCR = 10^6 grit.
pub const GRIT_PER_NCR: u64 = 1_000_000;

/// Maximum supply of $NCR in grit. 100,000,000 NCR * 10^6 grit/NCR.
/// The full amount exists from genesis; there is no emission.
pub const MAX_SUPPLY_GRIT: u64 = 100_000_000 * GRIT_PER_NCR;

/// Type alias for grit, the smallest unit of $NCR.
pub type Grit = u64;

/// The $NCR (Nacre) token amount.
///
/// Wraps an amount in grit (the smallest denomination).
/// All arithmetic is performed in integer grit to avoid floating-point errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ncr {
    /// Amount in grit (1 NCR = 10^6 grit).
    pub grit: u64,
}

impl Ncr {
    /// Create an Ncr amount from a whole number of NCR.
    pub fn from_whole(ncr: u64) -> Self {
        Self {
            grit: ncr * GRIT_PER_NCR,
        }
    }

    /// Create an Ncr amount from a grit value.
    pub fn from_grit(grit: u64) -> Self {
        Self { grit }
    }

    /// Convert this amount to NCR as a floating-point value.
    pub fn to_ncr(&self) -> f64 {
        self.grit as f64 / GRIT_PER_NCR as f64
    }

    /// Returns zero NCR.
    pub fn zero() -> Self {
        Self { grit: 0 }
    }
}

impl Add for Ncr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            grit: self.grit + rhs.grit,
        }
    }
}

impl Sub for Ncr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            grit: self.grit.saturating_sub(rhs.grit),
        }
    }
}

impl fmt::Display for Ncr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.grit / GRIT_PER_NCR;
        let frac = self.grit % GRIT_PER_NCR;
        if frac == 0 {
            write!(f, "{} NCR", whole)
        } else {
            // Display up to 6 decimal places, trimming trailing zeros
            let frac_str = format!("{:06}", frac);
            let trimmed = frac_str.trim_end_matches('0');
            write!(f, "{}.{} NCR", whole, trimmed)
        }
    }
}
