//! # Distribution engine
//!
//! Validates a campaign request and performs the pull-then-push movement:
//!
//! 1. bound-check the recipient count and sum the amounts with checked
//!    256-bit addition;
//! 2. take the next campaign ID and persist the campaign;
//! 3. pull the total from the creator into this contract;
//! 4. push each amount to its recipient, in entry order;
//! 5. emit `CampaignCreated`.
//!
//! Every failure returns `Err`. The host then discards the storage writes of
//! step 2 and every token movement of steps 3–4, so an invocation either
//! creates a fully funded campaign or leaves no trace.

use soroban_sdk::{log, Address, Env, Vec, U256};

use crate::config::MAX_RECIPIENTS;
use crate::types::{Campaign, Distribution};
use crate::uint::Uint256;
use crate::{events, storage, token, Error};

/// Reject recipient counts outside `1..=MAX_RECIPIENTS`.
pub fn check_recipient_count(env: &Env, count: u32) -> Result<(), Error> {
    if count == 0 {
        log!(env, "no recipients");
        return Err(Error::NoRecipients);
    }
    if count > MAX_RECIPIENTS {
        log!(env, "too many recipients", count, MAX_RECIPIENTS);
        return Err(Error::TooManyRecipients);
    }
    Ok(())
}

/// Sum every amount, failing on 256-bit overflow.
pub fn total_amount(entries: &Vec<Distribution>) -> Result<Uint256, Error> {
    entries.iter().try_fold(Uint256::ZERO, |total, entry| {
        total
            .checked_add(Uint256::from_host(&entry.amount))
            .ok_or(Error::Overflow)
    })
}

/// Create a campaign distributing `entries` of `token` on behalf of `creator`.
///
/// `creator` must already be authenticated and must have approved this
/// contract for at least the total amount on `token`.
pub fn create_campaign(
    env: &Env,
    creator: &Address,
    token: &Address,
    entries: &Vec<Distribution>,
) -> Result<U256, Error> {
    let recipient_count = entries.len();
    check_recipient_count(env, recipient_count)?;

    let total = total_amount(entries).map_err(|err| {
        log!(env, "amounts overflow", creator.clone(), recipient_count);
        err
    })?;
    if total.is_zero() {
        log!(env, "zero total amount", creator.clone());
        return Err(Error::ZeroTotalAmount);
    }

    let campaign_id = storage::next_campaign_id(env)?.to_host(env);
    let campaign = Campaign {
        campaign_id: campaign_id.clone(),
        creator: creator.clone(),
        token: token.clone(),
        total_amount: total.to_host(env),
        recipient_count,
        block_height: Uint256::from_u32(env.ledger().sequence()).to_host(env),
    };
    storage::save_campaign(env, &campaign);

    token::pull(env, token, creator, &total)?;
    for entry in entries.iter() {
        token::push(env, token, &entry.recipient, &Uint256::from_host(&entry.amount))?;
    }

    events::emit_campaign_created(env, &campaign);
    log!(env, "campaign created", campaign_id.clone(), recipient_count);

    Ok(campaign_id)
}
