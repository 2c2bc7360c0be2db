// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

//! # Posts Module
//!
//! Posts are the content items of the social ledger. This module allows you to create posts,
//! comment on existing posts and like posts or comments.
//!
//! Posts and comments share one id space: ids are allocated sequentially starting from
//! [`FIRST_POST_ID`] and are never reused. A post or comment stores only an opaque metadata URI,
//! the content itself lives off-chain.
//!
//! The pallet maintains the following indexes:
//! - top-level post ids by their owner (comments are not indexed here),
//! - comment ids by their parent, in creation order,
//! - likers by post, in the order they liked it.
//!
//! Nothing can be edited or deleted once created, and a like cannot be withdrawn.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;
pub use types::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests_utils;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
pub mod functions;
pub mod rpc;
pub mod types;
pub mod weights;

pub(crate) const LOG_TARGET: &str = "runtime::posts";

#[frame_support::pallet]
pub mod pallet {
    use frame_support::{log, pallet_prelude::*};
    use frame_system::pallet_prelude::*;
    use sp_std::vec::Vec;

    use social_ledger_support::{ensure_uri_is_not_empty, PostId};

    use crate::weights::WeightInfo;

    use super::*;

    pub type MetadataUri<T> = BoundedVec<u8, <T as Config>::MaxUriLength>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The maximum length of a post or comment metadata URI.
        #[pallet::constant]
        type MaxUriLength: Get<u32>;

        /// Max comments depth. A comment on a root post has depth 1.
        #[pallet::constant]
        type MaxCommentDepth: Get<u32>;

        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::without_storage_info]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultForNextPostId() -> PostId {
        FIRST_POST_ID
    }

    /// The next post id.
    #[pallet::storage]
    #[pallet::getter(fn next_post_id)]
    pub type NextPostId<T: Config> = StorageValue<_, PostId, ValueQuery, DefaultForNextPostId>;

    /// Get the details of a post or comment by its' id.
    #[pallet::storage]
    #[pallet::getter(fn post_by_id)]
    pub type PostById<T: Config> = StorageMap<_, Twox64Concat, PostId, Post<T>>;

    /// Get the ids of all root posts created by a given account.
    #[pallet::storage]
    #[pallet::getter(fn post_ids_by_account)]
    pub type PostIdsByAccount<T: Config> =
        StorageMap<_, Twox64Concat, T::AccountId, Vec<PostId>, ValueQuery>;

    /// Get the ids of all direct comments by their parent's post id.
    #[pallet::storage]
    #[pallet::getter(fn comment_ids_by_post_id)]
    pub type CommentIdsByPostId<T: Config> =
        StorageMap<_, Twox64Concat, PostId, Vec<PostId>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn post_likers)]
    pub type PostLikers<T: Config> =
        StorageMap<_, Twox64Concat, PostId, Vec<T::AccountId>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn post_liked_by_account)]
    pub type PostLikedByAccount<T: Config> =
        StorageMap<_, Blake2_128Concat, (T::AccountId, PostId), bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        PostCreated { account: T::AccountId, post_id: PostId },
        CommentCreated { account: T::AccountId, parent_id: PostId, comment_id: PostId },
        PostLiked { account: T::AccountId, post_id: PostId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Post was not found by id.
        PostNotFound,
        /// Account has already liked this post/comment.
        PostAlreadyLiked,
        /// Max comment depth reached.
        MaxCommentDepthReached,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::create_post())]
        pub fn create_post(origin: OriginFor<T>, uri: MetadataUri<T>) -> DispatchResult {
            let creator = ensure_signed(origin)?;

            ensure_uri_is_not_empty(&uri)?;

            let new_post_id =
                Self::insert_new_post(creator.clone(), PostExtension::RegularPost, uri)?;
            PostIdsByAccount::<T>::mutate(&creator, |ids| ids.push(new_post_id));

            log::debug!(target: LOG_TARGET, "post {} created by {:?}", new_post_id, creator);

            Self::deposit_event(Event::PostCreated { account: creator, post_id: new_post_id });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(<T as Config>::WeightInfo::create_comment())]
        pub fn create_comment(
            origin: OriginFor<T>,
            parent_id: PostId,
            uri: MetadataUri<T>,
        ) -> DispatchResult {
            let creator = ensure_signed(origin)?;

            ensure_uri_is_not_empty(&uri)?;

            let mut parent = Self::require_post(parent_id)?;
            Self::ensure_comment_depth_allowed(&parent)?;

            let comment_ext = Comment { root_post_id: parent.get_root_post_id(), parent_id };
            let comment_id =
                Self::insert_new_post(creator.clone(), PostExtension::Comment(comment_ext), uri)?;

            parent.inc_comments();
            PostById::<T>::insert(parent_id, parent);
            CommentIdsByPostId::<T>::mutate(parent_id, |ids| ids.push(comment_id));

            log::debug!(
                target: LOG_TARGET,
                "comment {} on post {} created by {:?}",
                comment_id,
                parent_id,
                creator
            );

            Self::deposit_event(Event::CommentCreated { account: creator, parent_id, comment_id });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(<T as Config>::WeightInfo::like_post())]
        pub fn like_post(origin: OriginFor<T>, post_id: PostId) -> DispatchResult {
            let liker = ensure_signed(origin)?;

            let mut post = Self::require_post(post_id)?;
            ensure!(!Self::has_liked(&liker, post_id), Error::<T>::PostAlreadyLiked);

            post.inc_likes();
            PostById::<T>::insert(post_id, post);
            PostLikers::<T>::mutate(post_id, |likers| likers.push(liker.clone()));
            PostLikedByAccount::<T>::insert((liker.clone(), post_id), true);

            log::debug!(target: LOG_TARGET, "post {} liked by {:?}", post_id, liker);

            Self::deposit_event(Event::PostLiked { account: liker, post_id });
            Ok(())
        }
    }
}
