//! # Airdrop Registry Contract
//!
//! Distributes a fungible token to many recipients in one atomic invocation
//! and records every distribution in an append-only campaign registry.
//!
//! | Operation          | Typed entry point                        | Binary selector (`execute`)   |
//! |--------------------|------------------------------------------|-------------------------------|
//! | Create campaign    | [`AirdropRegistry::create_campaign`]     | `createCampaign(address,tuple(address,uint256)[])` |
//! | Read campaign      | [`AirdropRegistry::get_campaign`]        | `getCampaign(uint256)`        |
//! | Count campaigns    | [`AirdropRegistry::get_campaign_count`]  | `getCampaignCount()`          |
//! | Recipient bound    | [`AirdropRegistry::max_recipients`]      | n/a                           |
//!
//! ## Architecture
//!
//! Selector routing lives in [`dispatch`], the wire format in [`codec`],
//! the pull-then-push movement in [`distribution`], and sub-calls into the
//! token in [`token`]. Storage access is fully delegated to `storage`. This
//! file contains only the public entry points.
//!
//! ## Atomicity
//!
//! Every entry point returns `Result<_, Error>`. Any `Err`, or a trap in a
//! token sub-call, fails the invocation and the host rolls back all of its
//! storage writes and sub-call effects.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Bytes, Env, Vec, U256};

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod distribution;
pub mod events;
mod storage;
pub mod token;
mod types;
pub mod uint;

#[cfg(test)]
mod test_codec;

pub use types::{Campaign, Distribution};
pub use uint::Uint256;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// A campaign needs at least one recipient.
    NoRecipients = 1,
    /// More recipients than `config::MAX_RECIPIENTS`.
    TooManyRecipients = 2,
    /// Amounts sum to zero.
    ZeroTotalAmount = 3,
    /// Calldata is truncated, has trailing bytes, or holds an invalid value.
    MalformedCalldata = 4,
    /// Calldata exceeds `config::MAX_CALLDATA_LEN`.
    CalldataTooLarge = 5,
    /// A checked 256-bit operation would wrap.
    Overflow = 6,
    /// No campaign with this ID has been created.
    CampaignNotFound = 7,
    /// The token refused or trapped on the pull from the creator.
    TransferFromFailed = 8,
    /// The token refused or trapped on a push to a recipient.
    TransferFailed = 9,
    /// No operation is registered under the selector.
    UnknownSelector = 10,
    /// The address kind has no fixed-width wire encoding.
    UnsupportedAddress = 11,
}

#[contract]
pub struct AirdropRegistry;

#[contractimpl]
impl AirdropRegistry {
    // ─────────────────────────────────────────────────────────
    // Campaign creation
    // ─────────────────────────────────────────────────────────

    /// Create a campaign distributing `entries` of `token`.
    ///
    /// - `creator` must authorize and must have approved this contract for
    ///   the sum of all amounts on `token`.
    /// - Between 1 and `max_recipients()` entries, summing to more than zero.
    ///
    /// Returns the new campaign ID.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        token: Address,
        entries: Vec<Distribution>,
    ) -> Result<U256, Error> {
        creator.require_auth();
        distribution::create_campaign(&env, &creator, &token, &entries)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, campaign_id: U256) -> Result<Campaign, Error> {
        storage::load_campaign(&env, &campaign_id)
    }

    pub fn get_campaign_count(env: Env) -> U256 {
        storage::campaign_count(&env).to_host(&env)
    }

    pub fn max_recipients(_env: Env) -> u32 {
        config::MAX_RECIPIENTS
    }

    // ─────────────────────────────────────────────────────────
    // Binary interface
    // ─────────────────────────────────────────────────────────

    /// Run a selector-prefixed binary call on behalf of `caller`.
    ///
    /// `caller` must authorize `createCampaign`; the read selectors need no
    /// authorization. See [`dispatch`] for the selector table and return
    /// layouts.
    pub fn execute(env: Env, caller: Address, calldata: Bytes) -> Result<Bytes, Error> {
        dispatch::route(&env, &caller, calldata)
    }
}
