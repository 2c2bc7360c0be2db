// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

use codec::{Decode, Encode};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use sp_std::prelude::*;

use crate::{Config, Pallet, ProfileUriByAccount};

#[derive(Eq, PartialEq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug, Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct FlatProfile<AccountId> {
    pub account: AccountId,
    pub uri: Vec<u8>,
}

impl<T: Config> Pallet<T> {
    /// Profiles of the given accounts, in the same order. Accounts without a profile are skipped.
    pub fn get_uris_by_accounts(accounts: Vec<T::AccountId>) -> Vec<FlatProfile<T::AccountId>> {
        accounts
            .into_iter()
            .filter_map(|account| {
                let uri = Self::get_uri(&account);
                if uri.is_empty() {
                    return None
                }

                Some(FlatProfile { account, uri: uri.into_inner() })
            })
            .collect()
    }

    /// All stored profiles, paginated. Order follows the storage map and is not creation order.
    pub fn get_profiles(offset: u64, limit: u16) -> Vec<FlatProfile<T::AccountId>> {
        ProfileUriByAccount::<T>::iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|(account, uri)| FlatProfile { account, uri: uri.into_inner() })
            .collect()
    }
}
