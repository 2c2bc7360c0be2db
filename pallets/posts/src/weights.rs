//! Weights for pallet_posts
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

/// Weight functions needed for pallet_posts.
pub trait WeightInfo {
    fn create_post() -> Weight;
    fn create_comment() -> Weight;
    fn like_post() -> Weight;
}

/// Weights for pallet_posts using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: Posts NextPostId (r:1 w:1)
    /// Storage: Posts PostIdsByAccount (r:1 w:1)
    /// Storage: Posts PostById (r:0 w:1)
    fn create_post() -> Weight {
        Weight::from_parts(28_000_000, 3034)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: Posts PostById (r:3 w:2)
    /// Storage: Posts NextPostId (r:1 w:1)
    /// Storage: Posts CommentIdsByPostId (r:1 w:1)
    fn create_comment() -> Weight {
        Weight::from_parts(42_000_000, 11240)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    /// Storage: Posts PostById (r:1 w:1)
    /// Storage: Posts PostLikedByAccount (r:1 w:1)
    /// Storage: Posts PostLikers (r:1 w:1)
    fn like_post() -> Weight {
        Weight::from_parts(34_000_000, 8016)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    /// Storage: Posts NextPostId (r:1 w:1)
    /// Storage: Posts PostIdsByAccount (r:1 w:1)
    /// Storage: Posts PostById (r:0 w:1)
    fn create_post() -> Weight {
        Weight::from_parts(28_000_000, 3034)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    /// Storage: Posts PostById (r:3 w:2)
    /// Storage: Posts NextPostId (r:1 w:1)
    /// Storage: Posts CommentIdsByPostId (r:1 w:1)
    fn create_comment() -> Weight {
        Weight::from_parts(42_000_000, 11240)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    /// Storage: Posts PostById (r:1 w:1)
    /// Storage: Posts PostLikedByAccount (r:1 w:1)
    /// Storage: Posts PostLikers (r:1 w:1)
    fn like_post() -> Weight {
        Weight::from_parts(34_000_000, 8016)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
}
