//! # Token boundary
//!
//! Synchronous sub-calls into the distributed token. The token speaks the
//! same binary convention as the registry: one `execute(caller, calldata)`
//! entry point, selector-prefixed calldata, and a response that is either
//! empty or starts with a boolean.
//!
//! A call succeeds when the response is empty or its first byte is `true`.
//! A trap inside the token, an undecodable response, or `false` all count as
//! failure. The caller then aborts the whole invocation, which also unwinds
//! every earlier sub-call of that invocation.

use soroban_sdk::{contractclient, log, Address, Bytes, Env};

use crate::codec::{Reader, Selector, Writer};
use crate::uint::Uint256;
use crate::Error;

pub const TRANSFER_SIGNATURE: &str = "transfer(address,uint256)";
pub const TRANSFER_FROM_SIGNATURE: &str = "transferFrom(address,address,uint256)";

/// `transfer(address,uint256)`
pub const TRANSFER: Selector = Selector([0x3b, 0x88, 0xef, 0x57]);
/// `transferFrom(address,address,uint256)`
pub const TRANSFER_FROM: Selector = Selector([0x4b, 0x66, 0x85, 0xe7]);

/// Interface the distributed token must expose.
#[contractclient(name = "TokenClient")]
pub trait TokenInterface {
    fn execute(env: Env, caller: Address, calldata: Bytes) -> Bytes;
}

/// Move `amount` from `from` into this contract, using the allowance `from`
/// granted to this contract.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: &Uint256) -> Result<(), Error> {
    let vault = env.current_contract_address();
    let mut calldata = Writer::new(env);
    calldata.write_selector(TRANSFER_FROM);
    calldata.write_address(from)?;
    calldata.write_address(&vault)?;
    calldata.write_u256(amount);

    if !call(env, token, &vault, calldata.into_bytes()) {
        log!(env, "transferFrom failed", token.clone(), from.clone());
        return Err(Error::TransferFromFailed);
    }
    Ok(())
}

/// Move `amount` held by this contract to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: &Uint256) -> Result<(), Error> {
    let vault = env.current_contract_address();
    let mut calldata = Writer::new(env);
    calldata.write_selector(TRANSFER);
    calldata.write_address(to)?;
    calldata.write_u256(amount);

    if !call(env, token, &vault, calldata.into_bytes()) {
        log!(env, "transfer failed", token.clone(), to.clone());
        return Err(Error::TransferFailed);
    }
    Ok(())
}

fn call(env: &Env, token: &Address, vault: &Address, calldata: Bytes) -> bool {
    let client = TokenClient::new(env, token);
    match client.try_execute(vault, &calldata) {
        Ok(Ok(response)) => accepted(env, response),
        _ => false,
    }
}

fn accepted(env: &Env, response: Bytes) -> bool {
    if response.is_empty() {
        return true;
    }
    matches!(Reader::new(env, response).read_bool(), Ok(true))
}
