// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

#![cfg(feature = "runtime-benchmarks")]

use frame_benchmarking::{account, benchmarks, whitelisted_caller};
use frame_support::{dispatch::DispatchError, ensure, traits::Get};
use frame_system::RawOrigin;
use sp_std::vec;

use super::*;

fn max_len_uri<T: Config>() -> Result<MetadataUri<T>, DispatchError> {
    let max_len = T::MaxUriLength::get() as usize;
    MetadataUri::<T>::try_from(vec![b'u'; max_len])
        .map_err(|_| DispatchError::Other("Cannot build a max length uri"))
}

fn create_dummy_post<T: Config>(owner: T::AccountId) -> Result<Post<T>, DispatchError> {
    let post_id = NextPostId::<T>::get();

    Pallet::<T>::create_post(RawOrigin::Signed(owner).into(), max_len_uri::<T>()?)?;

    let post = PostById::<T>::get(post_id).ok_or(DispatchError::Other("Post wasn't created"))?;

    Ok(post)
}

benchmarks! {
    create_post {
        let caller: T::AccountId = whitelisted_caller();
        let uri = max_len_uri::<T>()?;
        let post_id = NextPostId::<T>::get();
    }: _(RawOrigin::Signed(caller.clone()), uri)
    verify {
        let post = PostById::<T>::get(post_id)
            .ok_or(DispatchError::Other("Post wasn't created"))?;

        ensure!(post.owner == caller, "Post wasn't created by the caller");
        ensure!(post.is_root_post(), "Post wasn't created as a root post");
    }

    create_comment {
        let caller: T::AccountId = whitelisted_caller();
        let post = create_dummy_post::<T>(account("author", 0, 0))?;
        let uri = max_len_uri::<T>()?;
        let comment_id = NextPostId::<T>::get();
    }: _(RawOrigin::Signed(caller), post.id, uri)
    verify {
        let comment = PostById::<T>::get(comment_id)
            .ok_or(DispatchError::Other("Comment wasn't created"))?;

        ensure!(comment.try_get_parent_id() == Some(post.id), "Comment has a wrong parent");
        ensure!(
            CommentIdsByPostId::<T>::get(post.id) == vec![comment_id],
            "Comment wasn't indexed under its parent"
        );
    }

    like_post {
        let caller: T::AccountId = whitelisted_caller();
        let post = create_dummy_post::<T>(account("author", 0, 0))?;
    }: _(RawOrigin::Signed(caller.clone()), post.id)
    verify {
        ensure!(Pallet::<T>::has_liked(&caller, post.id), "Post wasn't liked");
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::tests_utils::ExtBuilder::default().build(),
        crate::mock::Test,
    );
}
