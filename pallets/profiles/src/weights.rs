//! Weights for pallet_profiles
//!
//! Placeholder weights estimated from the storage accesses of each call, not produced by a
//! benchmark run. Regenerate them from `benchmarking.rs` with the `benchmark pallet` command
//! before using this pallet in a production runtime.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(non_snake_case)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_profiles.
pub trait WeightInfo {
    fn set_uri() -> Weight;
}

/// Weights for pallet_profiles using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: Profiles ProfileUriByAccount (r:0 w:1)
    fn set_uri() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    /// Storage: Profiles ProfileUriByAccount (r:0 w:1)
    fn set_uri() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
