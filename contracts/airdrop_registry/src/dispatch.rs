//! # Dispatch
//!
//! Routes binary calls to the registry's operations by selector, and builds
//! calldata for those operations on the client side.
//!
//! | Selector      | Signature                                           |
//! |---------------|-----------------------------------------------------|
//! | `20 9f a5 41` | `createCampaign(address,tuple(address,uint256)[])`  |
//! | `5b 7f af 79` | `getCampaign(uint256)`                              |
//! | `f8 36 fb 36` | `getCampaignCount()`                                |

use soroban_sdk::{log, Address, Bytes, Env, Vec};

use crate::codec::{Reader, Selector, Writer};
use crate::config::MAX_CALLDATA_LEN;
use crate::types::Distribution;
use crate::uint::Uint256;
use crate::{distribution, storage, Error};

pub const CREATE_CAMPAIGN_SIGNATURE: &str = "createCampaign(address,tuple(address,uint256)[])";
pub const GET_CAMPAIGN_SIGNATURE: &str = "getCampaign(uint256)";
pub const GET_CAMPAIGN_COUNT_SIGNATURE: &str = "getCampaignCount()";

pub const CREATE_CAMPAIGN: Selector = Selector([0x20, 0x9f, 0xa5, 0x41]);
pub const GET_CAMPAIGN: Selector = Selector([0x5b, 0x7f, 0xaf, 0x79]);
pub const GET_CAMPAIGN_COUNT: Selector = Selector([0xf8, 0x36, 0xfb, 0x36]);

/// Decode `calldata` and run the operation its selector names.
///
/// `caller` becomes the creator of any campaign created by this call and must
/// authorize it. Reads need no authorization.
pub fn route(env: &Env, caller: &Address, calldata: Bytes) -> Result<Bytes, Error> {
    if calldata.len() > MAX_CALLDATA_LEN {
        return Err(Error::CalldataTooLarge);
    }

    let mut reader = Reader::new(env, calldata);
    match reader.read_selector()? {
        CREATE_CAMPAIGN => create_campaign(env, caller, &mut reader),
        GET_CAMPAIGN => get_campaign(env, &mut reader),
        GET_CAMPAIGN_COUNT => get_campaign_count(env, &mut reader),
        other => fallback(env, other),
    }
}

fn create_campaign(env: &Env, caller: &Address, reader: &mut Reader) -> Result<Bytes, Error> {
    caller.require_auth();

    let token = reader.read_address()?;
    let count = reader.read_u32()?;
    distribution::check_recipient_count(env, count)?;
    let entries = reader.read_entries(count)?;
    reader.finish()?;

    let campaign_id = distribution::create_campaign(env, caller, &token, &entries)?;

    let mut out = Writer::new(env);
    out.write_u256(&Uint256::from_host(&campaign_id));
    Ok(out.into_bytes())
}

// creator(33) token(33) total(32) count(4) block(32)
fn get_campaign(env: &Env, reader: &mut Reader) -> Result<Bytes, Error> {
    let campaign_id = reader.read_u256()?;
    reader.finish()?;

    let campaign = storage::load_campaign(env, &campaign_id.to_host(env))?;

    let mut out = Writer::new(env);
    out.write_address(&campaign.creator)?;
    out.write_address(&campaign.token)?;
    out.write_u256(&Uint256::from_host(&campaign.total_amount));
    out.write_u32(campaign.recipient_count);
    out.write_u256(&Uint256::from_host(&campaign.block_height));
    Ok(out.into_bytes())
}

fn get_campaign_count(env: &Env, reader: &mut Reader) -> Result<Bytes, Error> {
    reader.finish()?;
    let mut out = Writer::new(env);
    out.write_u256(&storage::campaign_count(env));
    Ok(out.into_bytes())
}

fn fallback(env: &Env, selector: Selector) -> Result<Bytes, Error> {
    log!(env, "unknown selector", selector.to_u32());
    Err(Error::UnknownSelector)
}

// ─────────────────────────────────────────────────────────
// Calldata builders
// ─────────────────────────────────────────────────────────

pub fn encode_create_campaign(
    env: &Env,
    token: &Address,
    entries: &Vec<Distribution>,
) -> Result<Bytes, Error> {
    let mut w = Writer::new(env);
    w.write_selector(CREATE_CAMPAIGN);
    w.write_address(token)?;
    w.write_entries(entries)?;
    Ok(w.into_bytes())
}

pub fn encode_get_campaign(env: &Env, campaign_id: &Uint256) -> Bytes {
    let mut w = Writer::new(env);
    w.write_selector(GET_CAMPAIGN);
    w.write_u256(campaign_id);
    w.into_bytes()
}

pub fn encode_get_campaign_count(env: &Env) -> Bytes {
    let mut w = Writer::new(env);
    w.write_selector(GET_CAMPAIGN_COUNT);
    w.into_bytes()
}
