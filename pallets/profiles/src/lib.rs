// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

//! # Profiles Module
//!
//! Every account may point to one profile document stored off-chain (name, bio, website, etc).
//! This pallet only keeps the metadata URI of that document, the document itself is resolved
//! by clients.
//!
//! An account can always overwrite its own URI, and clear it by setting an empty one.
//! Nobody can write a profile URI of another account.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
pub mod rpc;
pub mod weights;

pub(crate) const LOG_TARGET: &str = "runtime::profiles";

#[frame_support::pallet]
pub mod pallet {
    use frame_support::{log, pallet_prelude::*};
    use frame_system::pallet_prelude::*;

    use crate::weights::WeightInfo;

    use super::LOG_TARGET;

    pub type MetadataUri<T> = BoundedVec<u8, <T as Config>::MaxUriLength>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The maximum length of a profile metadata URI.
        #[pallet::constant]
        type MaxUriLength: Get<u32>;

        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::without_storage_info]
    pub struct Pallet<T>(_);

    /// Metadata URI of a profile by the profile's account. Empty when not set.
    #[pallet::storage]
    #[pallet::getter(fn profile_uri_by_account)]
    pub type ProfileUriByAccount<T: Config> =
        StorageMap<_, Twox64Concat, T::AccountId, MetadataUri<T>, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Profile metadata URI was set or cleared.
        ProfileUpdated { account: T::AccountId },
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Set the metadata URI of the caller's profile. An empty URI clears the profile.
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::set_uri())]
        pub fn set_uri(origin: OriginFor<T>, uri: MetadataUri<T>) -> DispatchResult {
            let account = ensure_signed(origin)?;

            Self::do_set_uri(account, uri);
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub(crate) fn do_set_uri(account: T::AccountId, uri: MetadataUri<T>) {
            if uri.is_empty() {
                ProfileUriByAccount::<T>::remove(&account);
            } else {
                ProfileUriByAccount::<T>::insert(&account, uri);
            }

            log::debug!(target: LOG_TARGET, "profile updated by {:?}", account);

            Self::deposit_event(Event::ProfileUpdated { account });
        }

        /// Metadata URI of an account's profile, or an empty URI if the account has none.
        pub fn get_uri(account: &T::AccountId) -> MetadataUri<T> {
            Self::profile_uri_by_account(account)
        }

        pub fn has_profile(account: &T::AccountId) -> bool {
            ProfileUriByAccount::<T>::contains_key(account)
        }
    }
}
