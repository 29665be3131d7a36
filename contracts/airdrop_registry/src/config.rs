//! # Config
//!
//! Compile-time parameters of the registry. Nothing here is adjustable after
//! deployment; changing a value means deploying a new contract.

use crate::codec::{ADDRESS_LEN, ENTRY_LEN, SELECTOR_LEN, U32_LEN};

/// Upper bound (inclusive) on recipients per campaign.
///
/// Every recipient costs one `transfer` sub-call and one balance-entry write
/// on the token, so the bound caps the footprint of a single invocation.
pub const MAX_RECIPIENTS: u32 = 50;

/// Largest calldata accepted by `execute`, in bytes.
pub const MAX_CALLDATA_LEN: u32 = 4_096;

/// Fixed prefix of a `createCampaign` call: selector, token, entry count.
pub const CREATE_CAMPAIGN_HEADER_LEN: u32 = SELECTOR_LEN + ADDRESS_LEN + U32_LEN;

// A full campaign must always fit in one call.
const _: () = assert!(CREATE_CAMPAIGN_HEADER_LEN + MAX_RECIPIENTS * ENTRY_LEN <= MAX_CALLDATA_LEN);

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
