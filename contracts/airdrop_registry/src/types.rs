//! # Types
//!
//! Shared data structures used across the registry.
//!
//! ## Design decisions
//!
//! ### Aggregate-only campaigns
//!
//! A [`Campaign`] keeps only the aggregate of a distribution: total amount
//! and recipient count. The individual `(recipient, amount)` pairs are not
//! persisted. They survive in the invocation's arguments and in the token
//! sub-call trace, which is what off-chain indexers replay.
//!
//! ### Host integers at the boundary
//!
//! Amounts and identifiers cross the contract boundary as the host `U256`
//! type. Arithmetic on them goes through [`crate::uint::Uint256`].

use soroban_sdk::{contracttype, Address, U256};

/// One leg of an airdrop: `amount` of the campaign token to `recipient`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub recipient: Address,
    pub amount: U256,
}

/// Immutable record of one airdrop, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Dense, zero-based identifier; the counter value before creation.
    pub campaign_id: U256,
    /// Address that authorized the pull of `total_amount`.
    pub creator: Address,
    /// Token contract that was distributed.
    pub token: Address,
    /// Exact sum of every distribution amount.
    pub total_amount: U256,
    /// Number of `transfer` sub-calls issued.
    pub recipient_count: u32,
    /// Ledger sequence at creation.
    pub block_height: U256,
}
