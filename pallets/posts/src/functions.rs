// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

use frame_support::pallet_prelude::*;
use sp_runtime::{traits::Saturating, ArithmeticError};
use sp_std::vec::Vec;

use social_ledger_support::PostId;

use super::*;

impl<T: Config> Post<T> {
    pub fn new(
        id: PostId,
        created_by: T::AccountId,
        extension: PostExtension,
        uri: MetadataUri<T>,
    ) -> Self {
        Post { id, owner: created_by, extension, uri, likes_count: 0, comments_count: 0 }
    }

    pub fn is_owner(&self, account: &T::AccountId) -> bool {
        self.owner == *account
    }

    pub fn is_root_post(&self) -> bool {
        !self.is_comment()
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.extension, PostExtension::Comment(_))
    }

    pub fn try_get_comment_ext(&self) -> Option<Comment> {
        match self.extension {
            PostExtension::Comment(comment_ext) => Some(comment_ext),
            PostExtension::RegularPost => None,
        }
    }

    pub fn try_get_parent_id(&self) -> Option<PostId> {
        self.try_get_comment_ext().map(|comment_ext| comment_ext.parent_id)
    }

    /// Id of the root post of this post's comment tree. A root post is its own root.
    pub fn get_root_post_id(&self) -> PostId {
        self.try_get_comment_ext().map_or(self.id, |comment_ext| comment_ext.root_post_id)
    }

    pub fn inc_likes(&mut self) {
        self.likes_count.saturating_inc();
    }

    pub fn inc_comments(&mut self) {
        self.comments_count.saturating_inc();
    }
}

impl<T: Config> Pallet<T> {
    /// Check that there is a `Post` with such `post_id` in the storage
    /// or return`PostNotFound` error.
    pub fn ensure_post_exists(post_id: PostId) -> DispatchResult {
        ensure!(PostById::<T>::contains_key(post_id), Error::<T>::PostNotFound);
        Ok(())
    }

    /// Get `Post` by id from the storage or return `PostNotFound` error.
    pub fn require_post(post_id: PostId) -> Result<Post<T>, DispatchError> {
        Ok(Self::post_by_id(post_id).ok_or(Error::<T>::PostNotFound)?)
    }

    pub fn owner_of(post_id: PostId) -> Result<T::AccountId, DispatchError> {
        Self::require_post(post_id).map(|post| post.owner)
    }

    pub fn token_uri(post_id: PostId) -> Result<MetadataUri<T>, DispatchError> {
        Self::require_post(post_id).map(|post| post.uri)
    }

    /// Ids of root posts created by `account`, oldest first. Comments are not included.
    pub fn get_posts(account: &T::AccountId) -> Vec<PostId> {
        Self::post_ids_by_account(account)
    }

    /// Ids of direct comments on a given post, oldest first.
    pub fn get_comments(post_id: PostId) -> Result<Vec<PostId>, DispatchError> {
        Self::ensure_post_exists(post_id)?;
        Ok(Self::comment_ids_by_post_id(post_id))
    }

    /// Accounts that liked a given post, in the order they liked it.
    pub fn get_likers(post_id: PostId) -> Result<Vec<T::AccountId>, DispatchError> {
        Self::ensure_post_exists(post_id)?;
        Ok(Self::post_likers(post_id))
    }

    pub fn has_liked(account: &T::AccountId, post_id: PostId) -> bool {
        Self::post_liked_by_account((account, post_id))
    }

    /// Check that a comment created under `parent` would not exceed `MaxCommentDepth`.
    pub fn ensure_comment_depth_allowed(parent: &Post<T>) -> DispatchResult {
        let max_depth = T::MaxCommentDepth::get();

        let mut depth: u32 = 1;
        ensure!(depth <= max_depth, Error::<T>::MaxCommentDepthReached);

        let mut ancestor_parent_id = parent.try_get_parent_id();
        while let Some(parent_id) = ancestor_parent_id {
            depth.saturating_inc();
            ensure!(depth <= max_depth, Error::<T>::MaxCommentDepthReached);

            ancestor_parent_id = Self::require_post(parent_id)?.try_get_parent_id();
        }

        Ok(())
    }

    /// Store a new post under the next free id and advance the counter.
    ///
    /// Fails without writing anything if the id space is exhausted.
    pub(crate) fn insert_new_post(
        owner: T::AccountId,
        extension: PostExtension,
        uri: MetadataUri<T>,
    ) -> Result<PostId, DispatchError> {
        let new_post_id = Self::next_post_id();
        let next_post_id = new_post_id.checked_add(1).ok_or(ArithmeticError::Overflow)?;

        PostById::<T>::insert(new_post_id, Post::<T>::new(new_post_id, owner, extension, uri));
        NextPostId::<T>::put(next_post_id);

        Ok(new_post_id)
    }
}
