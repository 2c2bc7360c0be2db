// Copyright (C) DAPPFORCE PTE. LTD.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0.
//
// Full notice is available at https://github.com/dappforce/subsocial-parachain/blob/main/COPYRIGHT
// Full license is available at https://github.com/dappforce/subsocial-parachain/blob/main/LICENSE

use frame_support::{assert_ok, pallet_prelude::*};
use sp_io::TestExternalities;

use social_ledger_support::{mock_functions::*, PostId};

use crate::{mock::*, MetadataUri};

////// Ext Builder

pub struct ExtBuilder {
    max_comment_depth: u32,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        ExtBuilder { max_comment_depth: 1 }
    }
}

impl ExtBuilder {
    pub(crate) fn max_comment_depth(mut self, max_comment_depth: u32) -> Self {
        self.max_comment_depth = max_comment_depth;
        self
    }

    fn set_configs(&self) {
        MAX_COMMENT_DEPTH.with(|x| *x.borrow_mut() = self.max_comment_depth);
    }

    /// Default ext configuration with BlockNumber 1
    pub fn build(self) -> TestExternalities {
        self.set_configs();

        let storage = frame_system::GenesisConfig::default().build_storage::<Test>().unwrap();

        let mut ext = TestExternalities::from(storage);
        ext.execute_with(|| System::set_block_number(1));

        ext
    }

    /// Custom ext configuration with PostId 0 by ACCOUNT1 and BlockNumber 1
    pub fn build_with_post(self) -> TestExternalities {
        let mut ext = self.build();
        ext.execute_with(|| { assert_ok!(_create_default_post()); });
        ext
    }

    /// Custom ext configuration with PostId 0 by ACCOUNT1, PostId 1 (as comment) by ACCOUNT2
    /// and BlockNumber 1
    pub fn build_with_comment(self) -> TestExternalities {
        let mut ext = self.build_with_post();
        ext.execute_with(|| { assert_ok!(_create_default_comment()); });
        ext
    }
}

////// Consts

pub(crate) const ACCOUNT1: AccountId = 1;
pub(crate) const ACCOUNT2: AccountId = 2;
pub(crate) const ACCOUNT3: AccountId = 3;

pub(crate) const POST1: PostId = 0;
pub(crate) const POST2: PostId = 1;
pub(crate) const POST3: PostId = 2;
pub(crate) const POST4: PostId = 3;

pub(crate) const UNKNOWN_POST: PostId = 1000;

////// Fixtures

pub(crate) fn uri(bytes: &[u8]) -> MetadataUri<Test> {
    MetadataUri::<Test>::try_from(bytes.to_vec()).expect("qed; uri exceeds MaxUriLength")
}

pub(crate) fn post_uri() -> MetadataUri<Test> {
    uri(&valid_uri())
}

pub(crate) fn comment_uri() -> MetadataUri<Test> {
    uri(&another_valid_uri())
}

////// Post utils

pub(crate) fn _create_default_post() -> DispatchResult {
    _create_post(None, None)
}

pub(crate) fn _create_post(
    origin: Option<RuntimeOrigin>,
    uri: Option<MetadataUri<Test>>,
) -> DispatchResult {
    Posts::create_post(
        origin.unwrap_or_else(|| RuntimeOrigin::signed(ACCOUNT1)),
        uri.unwrap_or_else(post_uri),
    )
}

////// Comment utils

pub(crate) fn _create_default_comment() -> DispatchResult {
    _create_comment(None, None, None)
}

pub(crate) fn _create_comment(
    origin: Option<RuntimeOrigin>,
    parent_id: Option<PostId>,
    uri: Option<MetadataUri<Test>>,
) -> DispatchResult {
    Posts::create_comment(
        origin.unwrap_or_else(|| RuntimeOrigin::signed(ACCOUNT2)),
        parent_id.unwrap_or(POST1),
        uri.unwrap_or_else(comment_uri),
    )
}

////// Like utils

pub(crate) fn _like_default_post() -> DispatchResult {
    _like_post(None, None)
}

pub(crate) fn _like_post(origin: Option<RuntimeOrigin>, post_id: Option<PostId>) -> DispatchResult {
    Posts::like_post(
        origin.unwrap_or_else(|| RuntimeOrigin::signed(ACCOUNT2)),
        post_id.unwrap_or(POST1),
    )
}
