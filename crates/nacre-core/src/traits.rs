// crates/nacre-core/src/traits.rs

use crate::address::Address;

/// A consumed transaction output, as seen by supply-protection checks.
///
/// Implemented by the ledger's unspent-output types. The distribution layer
/// only ever reads the owning address; amounts, output hashes, and
/// signatures stay with the ledger.
pub trait SpentOutput {
    /// The address that owned this output before the transaction spent it.
    fn owner(&self) -> &Address;
}

/// An `Address` owns itself. Callers that have already projected a
/// transaction's inputs down to addresses can pass those directly.
impl SpentOutput for Address {
    fn owner(&self) -> &Address {
        self
    }
}
