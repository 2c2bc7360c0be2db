// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, Encode};

use frame_support::pallet_prelude::*;

/// Unique sequential identifier shared by posts and comments.
pub type PostId = u64;

#[derive(Encode, Decode, RuntimeDebug, strum::IntoStaticStr)]
pub enum UriError {
    /// Metadata URI is empty.
    UriIsEmpty,
}

impl From<UriError> for DispatchError {
    fn from(err: UriError) -> DispatchError {
        Self::Other(err.into())
    }
}

/// Ensure that a given metadata URI has at least one byte.
///
/// URI bytes are never interpreted, any non-empty sequence is accepted.
pub fn ensure_uri_is_not_empty(uri: &[u8]) -> DispatchResult {
    ensure!(!uri.is_empty(), UriError::UriIsEmpty);
    Ok(())
}

pub fn bool_to_option(value: bool) -> Option<bool> {
    if value {
        Some(value)
    } else {
        None
    }
}

pub mod mock_functions {
    use sp_std::vec::Vec;

    pub fn valid_uri() -> Vec<u8> {
        b"ipfs://QmRAQB6YaCaidP37UdDnjFY5aQuiBrbqdyoW1CaDgwxkD4".to_vec()
    }

    pub fn another_valid_uri() -> Vec<u8> {
        // Only the last character is changed, only for testing purposes.
        b"ipfs://QmRAQB6YaCaidP37UdDnjFY5aQuiBrbqdyoW1CaDgwxkD5".to_vec()
    }

    pub fn empty_uri() -> Vec<u8> {
        Vec::new()
    }
}
