//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type   | Description                         |
//! |-----------------|--------|-------------------------------------|
//! | `CampaignCount` | `U256` | Next campaign ID; never decreases   |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! One column per campaign field, each keyed by campaign ID:
//!
//! | Key              | Type      |
//! |------------------|-----------|
//! | `Creator(id)`    | `Address` |
//! | `Token(id)`      | `Address` |
//! | `Total(id)`      | `U256`    |
//! | `Recipients(id)` | `u32`     |
//! | `Block(id)`      | `U256`    |
//!
//! Columns are only ever written by [`save_campaign`], once per ID. This layout
//! is frozen at deployment.

use soroban_sdk::{contracttype, Address, Env, U256};

use crate::config::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::types::Campaign;
use crate::uint::Uint256;
use crate::Error;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Campaign counter (Instance).
    CampaignCount,
    /// Creator column (Persistent).
    Creator(U256),
    /// Token column (Persistent).
    Token(U256),
    /// Total amount column (Persistent).
    Total(U256),
    /// Recipient count column (Persistent).
    Recipients(U256),
    /// Block height column (Persistent).
    Block(U256),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Number of campaigns created so far.
pub fn campaign_count(env: &Env) -> Uint256 {
    bump_instance(env);
    env.storage()
        .instance()
        .get::<_, U256>(&DataKey::CampaignCount)
        .map(|count| Uint256::from_host(&count))
        .unwrap_or(Uint256::ZERO)
}

/// Read the counter, store `counter + 1`, and return the old value.
pub fn next_campaign_id(env: &Env) -> Result<Uint256, Error> {
    let current = campaign_count(env);
    let next = current.checked_add(Uint256::ONE).ok_or(Error::Overflow)?;
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &next.to_host(env));
    Ok(current)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn put<V>(env: &Env, key: DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(&key, value);
    bump_persistent(env, &key);
}

fn fetch<V>(env: &Env, key: DataKey) -> Result<V, Error>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env
        .storage()
        .persistent()
        .get::<_, V>(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(value)
}

/// Write all five columns of `campaign`.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let id = &campaign.campaign_id;
    put(env, DataKey::Creator(id.clone()), &campaign.creator);
    put(env, DataKey::Token(id.clone()), &campaign.token);
    put(env, DataKey::Total(id.clone()), &campaign.total_amount);
    put(env, DataKey::Recipients(id.clone()), &campaign.recipient_count);
    put(env, DataKey::Block(id.clone()), &campaign.block_height);
}

/// Load a campaign by ID. IDs at or above the counter are not found.
pub fn load_campaign(env: &Env, campaign_id: &U256) -> Result<Campaign, Error> {
    if Uint256::from_host(campaign_id) >= campaign_count(env) {
        return Err(Error::CampaignNotFound);
    }

    let creator: Address = fetch(env, DataKey::Creator(campaign_id.clone()))?;
    let token: Address = fetch(env, DataKey::Token(campaign_id.clone()))?;
    let total_amount: U256 = fetch(env, DataKey::Total(campaign_id.clone()))?;
    let recipient_count: u32 = fetch(env, DataKey::Recipients(campaign_id.clone()))?;
    let block_height: U256 = fetch(env, DataKey::Block(campaign_id.clone()))?;

    Ok(Campaign {
        campaign_id: campaign_id.clone(),
        creator,
        token,
        total_amount,
        recipient_count,
        block_height,
    })
}
