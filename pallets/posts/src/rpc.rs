// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

use codec::{Decode, Encode};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use sp_std::prelude::*;

use social_ledger_support::{bool_to_option, PostId};

use crate::{Config, Pallet, Post};

#[derive(Eq, PartialEq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(Debug, Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct FlatPost<AccountId> {
    pub id: PostId,

    pub owner: AccountId,

    pub uri: Vec<u8>,

    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub is_comment: Option<bool>,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub root_post_id: Option<PostId>,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub parent_id: Option<PostId>,

    pub likes_count: u32,
    pub comments_count: u32,
}

impl<T: Config> From<Post<T>> for FlatPost<T::AccountId> {
    fn from(from: Post<T>) -> Self {
        let comment_ext = from.try_get_comment_ext();
        let Post { id, owner, uri, likes_count, comments_count, .. } = from;

        Self {
            id,
            owner,
            uri: uri.into_inner(),
            is_comment: bool_to_option(comment_ext.is_some()),
            root_post_id: comment_ext.map(|ext| ext.root_post_id),
            parent_id: comment_ext.map(|ext| ext.parent_id),
            likes_count,
            comments_count,
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn get_posts_by_ids(
        post_ids: Vec<PostId>,
        offset: u64,
        limit: u16,
    ) -> Vec<FlatPost<T::AccountId>> {
        post_ids
            .into_iter()
            .skip(offset as usize)
            .filter_map(Self::post_by_id)
            .take(limit as usize)
            .map(|post| post.into())
            .collect()
    }

    /// Root posts of an account, newest first.
    pub fn get_posts_by_account(
        account: T::AccountId,
        offset: u64,
        limit: u16,
    ) -> Vec<FlatPost<T::AccountId>> {
        let mut post_ids = Self::get_posts(&account);
        post_ids.reverse();

        Self::get_posts_by_ids(post_ids, offset, limit)
    }

    /// Direct comments on a post, oldest first. Empty if the post does not exist.
    pub fn get_comments_by_post_id(
        post_id: PostId,
        offset: u64,
        limit: u16,
    ) -> Vec<FlatPost<T::AccountId>> {
        let comment_ids = Self::comment_ids_by_post_id(post_id);
        Self::get_posts_by_ids(comment_ids, offset, limit)
    }

    pub fn get_next_post_id() -> PostId {
        Self::next_post_id()
    }
}
