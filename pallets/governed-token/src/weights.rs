//! Weights for pallet-governed-token.
//!
//! Storage access counts are exact per dispatchable; the ref-time constants
//! are conservative estimates until a benchmark run on reference hardware
//! replaces this file (`benchmarking.rs` covers every call).

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-governed-token.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
}

/// Weights for pallet-governed-token using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Initialized` (r:1 w:1), `Authority` (r:0 w:1), `Paused` (r:0 w:1)
    fn initialize() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 3))
    }
    /// Storage: `Authority` (r:1), `TotalSupply` (r:1 w:1), `Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(16_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    /// Storage: `Balances` (r:1 w:1), `TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(14_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    /// Storage: `Allowances` (r:1 w:1), `Balances` (r:1 w:1), `TotalSupply` (r:1 w:1)
    fn burn_from() -> Weight {
        Weight::from_parts(19_000_000, 3_625)
            .saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    /// Storage: `Paused` (r:1), `Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    /// Storage: `Paused` (r:1), `Allowances` (r:1 w:1), `Balances` (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(23_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads_writes(4, 3))
    }
    /// Storage: `Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Authority` (r:1), `Paused` (r:1 w:1)
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `Authority` (r:1), `Paused` (r:1 w:1)
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `Allowances` (r:1 w:1)
    fn increase_allowance() -> Weight {
        Weight::from_parts(13_000_000, 3_625)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `Allowances` (r:1 w:1)
    fn decrease_allowance() -> Weight {
        Weight::from_parts(13_000_000, 3_625)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 3))
    }
    fn mint() -> Weight {
        Weight::from_parts(16_000_000, 3_593).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(14_000_000, 3_593).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(19_000_000, 3_625).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(23_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(4, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_517).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_517).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(13_000_000, 3_625).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(13_000_000, 3_625).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
