// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

use codec::{Decode, Encode};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

use social_ledger_support::PostId;

use crate::{Config, MetadataUri};

pub const FIRST_POST_ID: PostId = 0;

/// Information about a post's owner, its' kind and metadata URI.
#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct Post<T: Config> {
    /// Unique sequential identifier of a post. Examples of post ids: `0`, `1`, `2`, and so on.
    pub id: PostId,

    /// The account that created a given post. It never changes.
    pub owner: T::AccountId,

    /// Through post extension you can tell a root post from a comment.
    pub extension: PostExtension,

    /// URI of the off-chain metadata of a given post. Never empty.
    pub uri: MetadataUri<T>,

    /// The number of accounts that liked a given post.
    pub likes_count: u32,

    /// The number of direct comments on a given post.
    pub comments_count: u32,
}

/// Post extension provides information specific to the kind of a post.
#[derive(Encode, Decode, Clone, Copy, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub enum PostExtension {
    RegularPost,
    Comment(Comment),
}

#[derive(Encode, Decode, Clone, Copy, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Comment {
    /// The root post of a comment tree this comment belongs to.
    pub root_post_id: PostId,
    /// The post or comment this comment replies to.
    pub parent_id: PostId,
}

impl Default for PostExtension {
    fn default() -> Self {
        PostExtension::RegularPost
    }
}
