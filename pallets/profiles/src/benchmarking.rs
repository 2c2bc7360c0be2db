// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

#![cfg(feature = "runtime-benchmarks")]

use frame_benchmarking::{benchmarks, whitelisted_caller};
use frame_support::traits::Get;
use frame_system::RawOrigin;
use sp_std::vec;

use crate::Pallet as Profiles;

use super::*;

benchmarks! {
    set_uri {
        let caller: T::AccountId = whitelisted_caller();
        let max_len = T::MaxUriLength::get() as usize;
        let uri = MetadataUri::<T>::try_from(vec![b'u'; max_len]).unwrap();
    }: _(RawOrigin::Signed(caller.clone()), uri.clone())
    verify {
        assert_eq!(Profiles::<T>::get_uri(&caller), uri);
    }

    impl_benchmark_test_suite!(Profiles, crate::mock::ExtBuilder::build(), crate::mock::Test);
}
