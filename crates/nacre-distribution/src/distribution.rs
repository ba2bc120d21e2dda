// crates/nacre-distribution/src/distribution.rs
//
// The distribution table, its unlocked/locked partition, and the
// transaction lock check.
//
// The table is validated and frozen at construction: supply must divide
// evenly across it, the unlocked prefix must fit inside it, and entries
// must be distinct. After that everything is a read-only query, so a
// `Distribution` can be shared freely across verification threads.

use std::collections::HashSet;

use nacre_core::{Address, NacreError, SpentOutput};

use crate::addresses::MAINNET_DISTRIBUTION_ADDRESSES;
use crate::supply::INITIAL_UNLOCKED_COUNT;
use crate::token::{Grit, Ncr, MAX_SUPPLY_GRIT};

/// The pre-mined distribution table and its unlocked/locked partition.
///
/// The first `initial_unlocked` addresses (in table order) are spendable;
/// the remainder are frozen, and any transaction spending an output owned
/// by one of them must be rejected. Constructed once at bootstrap and
/// injected into the transaction-verification layer.
pub struct Distribution {
    /// Total supply in grit. Divides evenly across the table.
    max_supply: Grit,
    /// The full table, in canonical order.
    addresses: Vec<Address>,
    /// Length of the unlocked prefix.
    initial_unlocked: usize,
    /// Membership index over the locked suffix.
    locked_index: HashSet<Address>,
}

impl Distribution {
    /// Build a distribution from a supply, an ordered address table, and
    /// the number of addresses unlocked from genesis.
    ///
    /// Validates the whole table up front: either every invariant holds or
    /// construction fails and nothing is usable. The bootstrap caller must
    /// treat an error as fatal and abort before verifying any transactions.
    ///
    /// # Errors
    /// Returns `NacreError::Config` if the table is empty, if `max_supply`
    /// is not evenly divisible by the table length, if `initial_unlocked`
    /// exceeds the table length, or if any address appears twice.
    pub fn new(
        max_supply: Grit,
        addresses: Vec<Address>,
        initial_unlocked: usize,
    ) -> Result<Self, NacreError> {
        if addresses.is_empty() {
            return Err(NacreError::Config(
                "distribution table must contain at least one address".to_string(),
            ));
        }
        if max_supply % addresses.len() as u64 != 0 {
            return Err(NacreError::Config(format!(
                "max supply of {} grit is not evenly divisible across {} distribution addresses",
                max_supply,
                addresses.len()
            )));
        }
        if initial_unlocked > addresses.len() {
            return Err(NacreError::Config(format!(
                "initial unlocked count {} exceeds the distribution table size {}",
                initial_unlocked,
                addresses.len()
            )));
        }

        let mut seen: HashSet<&Address> = HashSet::with_capacity(addresses.len());
        for addr in &addresses {
            if !seen.insert(addr) {
                return Err(NacreError::Config(format!(
                    "duplicate distribution address {}",
                    addr
                )));
            }
        }

        let locked_index = addresses[initial_unlocked..].iter().cloned().collect();

        Ok(Self {
            max_supply,
            addresses,
            initial_unlocked,
            locked_index,
        })
    }

    /// The canonical mainnet distribution: the embedded 100-address table
    /// with the genesis supply and unlocked count.
    ///
    /// # Errors
    /// Returns `NacreError::Config` if the embedded table violates a supply
    /// invariant. That only happens if the constants were edited
    /// inconsistently, and the host must abort startup on it.
    pub fn mainnet() -> Result<Self, NacreError> {
        let addresses = MAINNET_DISTRIBUTION_ADDRESSES
            .iter()
            .map(|addr| Address::new(*addr))
            .collect();
        Self::new(MAX_SUPPLY_GRIT, addresses, INITIAL_UNLOCKED_COUNT as usize)
    }

    /// Total supply held by the table, in grit.
    pub fn max_supply(&self) -> Grit {
        self.max_supply
    }

    /// The initial balance allocated to each distribution address.
    /// Derived: `max_supply / table length`, exact by the divisibility check.
    pub fn initial_balance(&self) -> Ncr {
        Ncr::from_grit(self.max_supply / self.addresses.len() as u64)
    }

    /// The full distribution table, in canonical order.
    ///
    /// Returns an independent copy; mutating it does not affect the table.
    pub fn addresses(&self) -> Vec<Address> {
        self.addresses.clone()
    }

    /// The addresses that are unlocked, i.e. whose outputs are spendable.
    ///
    /// This is the first `initial_unlocked` entries of the table, in table
    /// order, as an independent copy.
    pub fn unlocked_addresses(&self) -> Vec<Address> {
        self.addresses[..self.initial_unlocked].to_vec()
    }

    /// The addresses that are locked, i.e. whose outputs are unspendable.
    ///
    /// This is the remainder of the table after the unlocked prefix, in
    /// table order, as an independent copy.
    pub fn locked_addresses(&self) -> Vec<Address> {
        self.addresses[self.initial_unlocked..].to_vec()
    }

    /// Returns true if the transaction spends locked outputs.
    ///
    /// `spent_outputs` is the set of outputs the transaction consumes; the
    /// verdict is an existence check over their owning addresses and does
    /// not depend on their order. An address that is not in the table at
    /// all (including a malformed or empty one) simply never matches.
    pub fn transaction_is_locked<O: SpentOutput>(&self, spent_outputs: &[O]) -> bool {
        spent_outputs
            .iter()
            .any(|output| self.locked_index.contains(output.owner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::GRIT_PER_NCR;

    /// A stand-in for the ledger's spent-output type: owner plus the
    /// fields the distribution layer never looks at.
    struct TestOutput {
        owner: Address,
        #[allow(dead_code)]
        amount: Grit,
    }

    impl SpentOutput for TestOutput {
        fn owner(&self) -> &Address {
            &self.owner
        }
    }

    fn table(names: &[&str]) -> Vec<Address> {
        names.iter().map(|n| Address::new(*n)).collect()
    }

    /// Four addresses, one unlocked, one whole NCR each.
    fn toy() -> Distribution {
        Distribution::new(4 * GRIT_PER_NCR, table(&["A", "B", "C", "D"]), 1).unwrap()
    }

    fn outputs(owners: &[&str]) -> Vec<TestOutput> {
        owners
            .iter()
            .map(|o| TestOutput {
                owner: Address::new(*o),
                amount: GRIT_PER_NCR,
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let result = Distribution::new(100, Vec::new(), 0);
        assert!(matches!(result, Err(NacreError::Config(_))));
    }

    #[test]
    fn test_new_rejects_indivisible_supply() {
        // 100,000,001 does not divide across 100 addresses
        let addrs: Vec<Address> = (0..100).map(|i| Address::new(format!("addr{:03}", i))).collect();
        let result = Distribution::new(100_000_001, addrs, 25);
        assert!(matches!(result, Err(NacreError::Config(_))));
    }

    #[test]
    fn test_new_rejects_unlocked_count_beyond_table() {
        let result = Distribution::new(4 * GRIT_PER_NCR, table(&["A", "B", "C", "D"]), 5);
        assert!(matches!(result, Err(NacreError::Config(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_address() {
        let result = Distribution::new(4 * GRIT_PER_NCR, table(&["A", "B", "A", "D"]), 1);
        assert!(matches!(result, Err(NacreError::Config(_))));
    }

    #[test]
    fn test_addresses_returns_full_table_in_order() {
        let dist = toy();
        assert_eq!(dist.addresses(), table(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_partition_prefix_and_suffix() {
        let dist = toy();
        assert_eq!(dist.unlocked_addresses(), table(&["A"]));
        assert_eq!(dist.locked_addresses(), table(&["B", "C", "D"]));
    }

    #[test]
    fn test_partition_concatenation_matches_table() {
        let dist = toy();
        let mut concat = dist.unlocked_addresses();
        concat.extend(dist.locked_addresses());
        assert_eq!(concat, dist.addresses());
    }

    #[test]
    fn test_zero_unlocked_locks_everything() {
        let dist = Distribution::new(4 * GRIT_PER_NCR, table(&["A", "B", "C", "D"]), 0).unwrap();
        assert!(dist.unlocked_addresses().is_empty());
        assert_eq!(dist.locked_addresses().len(), 4);
        assert!(dist.transaction_is_locked(&outputs(&["A"])));
    }

    #[test]
    fn test_all_unlocked_locks_nothing() {
        let dist = Distribution::new(4 * GRIT_PER_NCR, table(&["A", "B", "C", "D"]), 4).unwrap();
        assert_eq!(dist.unlocked_addresses().len(), 4);
        assert!(dist.locked_addresses().is_empty());
        assert!(!dist.transaction_is_locked(&outputs(&["A", "B", "C", "D"])));
    }

    #[test]
    fn test_returned_copies_are_independent() {
        let dist = toy();

        let mut copy = dist.addresses();
        copy[0] = Address::new("tampered");
        copy.pop();
        assert_eq!(dist.addresses(), table(&["A", "B", "C", "D"]));

        let mut unlocked = dist.unlocked_addresses();
        unlocked.clear();
        assert_eq!(dist.unlocked_addresses(), table(&["A"]));
    }

    #[test]
    fn test_initial_balance() {
        let dist = toy();
        assert_eq!(dist.initial_balance(), Ncr::from_whole(1));
        assert_eq!(
            dist.initial_balance().grit * dist.addresses().len() as u64,
            dist.max_supply()
        );
    }

    #[test]
    fn test_empty_transaction_is_not_locked() {
        let dist = toy();
        assert!(!dist.transaction_is_locked(&outputs(&[])));
    }

    #[test]
    fn test_unlocked_only_transaction_is_not_locked() {
        let dist = toy();
        assert!(!dist.transaction_is_locked(&outputs(&["A"])));
    }

    #[test]
    fn test_single_locked_output_locks_transaction() {
        let dist = toy();
        assert!(dist.transaction_is_locked(&outputs(&["A", "C"])));
        assert!(dist.transaction_is_locked(&outputs(&["B"])));
    }

    #[test]
    fn test_verdict_is_order_independent() {
        let dist = toy();
        let forward = outputs(&["A", "Z", "C"]);
        let reversed = outputs(&["C", "Z", "A"]);
        assert_eq!(
            dist.transaction_is_locked(&forward),
            dist.transaction_is_locked(&reversed)
        );
        assert!(dist.transaction_is_locked(&forward));
    }

    #[test]
    fn test_unknown_addresses_never_match() {
        let dist = toy();
        // Addresses outside the table, including an empty one, are not the
        // check's problem: they just fail the membership test.
        assert!(!dist.transaction_is_locked(&outputs(&["Z", "not-an-address", ""])));
    }

    #[test]
    fn test_addresses_stand_in_for_outputs() {
        let dist = toy();
        let owners = [Address::new("A"), Address::new("C")];
        assert!(dist.transaction_is_locked(&owners));
    }
}
