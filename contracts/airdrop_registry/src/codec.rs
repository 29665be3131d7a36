//! # Codec
//!
//! Binary call/return format shared by the registry's `execute` entry point and
//! the token boundary.
//!
//! | Type      | Width | Encoding                                         |
//! |-----------|-------|--------------------------------------------------|
//! | selector  | 4     | first four bytes of SHA-256(canonical signature)  |
//! | `u32`     | 4     | big-endian                                       |
//! | `u256`    | 32    | big-endian                                       |
//! | `bool`    | 1     | `0x00` / `0x01`                                  |
//! | `address` | 33    | kind byte (`0` account, `1` contract) + 32-byte key |
//!
//! Every field has a static width. The one variable-length construct is the
//! count-prefixed `(address, u256)` entry list, whose byte length must match
//! the declared count exactly.

use soroban_sdk::{
    xdr::{FromXdr, ToXdr},
    Address, Bytes, Env, Vec,
};

use crate::types::Distribution;
use crate::uint::Uint256;
use crate::Error;

pub const SELECTOR_LEN: u32 = 4;
pub const U32_LEN: u32 = 4;
pub const U256_LEN: u32 = 32;
pub const ADDRESS_LEN: u32 = 33;

/// One `(recipient, amount)` pair.
pub const ENTRY_LEN: u32 = ADDRESS_LEN + U256_LEN;

pub const ACCOUNT_KIND: u8 = 0;
pub const CONTRACT_KIND: u8 = 1;

// XDR of `ScVal::Address` up to the 32-byte key.
const XDR_ACCOUNT_PREFIX: [u8; 12] = [0, 0, 0, 18, 0, 0, 0, 0, 0, 0, 0, 0];
const XDR_CONTRACT_PREFIX: [u8; 8] = [0, 0, 0, 18, 0, 0, 0, 1];

// ─────────────────────────────────────────────────────────
// Selector
// ─────────────────────────────────────────────────────────

/// Routing key of a call: a digest of the function's canonical signature,
/// e.g. `getCampaign(uint256)`. Argument names never take part.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    /// Compute the selector of `signature` with the host's SHA-256.
    pub fn of(env: &Env, signature: &str) -> Self {
        let digest = env
            .crypto()
            .sha256(&Bytes::from_slice(env, signature.as_bytes()))
            .to_bytes()
            .to_array();
        Selector([digest[0], digest[1], digest[2], digest[3]])
    }

    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

// ─────────────────────────────────────────────────────────
// Address <-> fixed-width identifier
// ─────────────────────────────────────────────────────────

/// Encode `address` as its 33-byte wire identifier.
pub fn encode_address(env: &Env, address: &Address) -> Result<[u8; 33], Error> {
    let xdr = address.clone().to_xdr(env);
    let (kind, prefix): (u8, &[u8]) = match xdr.len() {
        44 => (ACCOUNT_KIND, &XDR_ACCOUNT_PREFIX[..]),
        40 => (CONTRACT_KIND, &XDR_CONTRACT_PREFIX[..]),
        _ => return Err(Error::UnsupportedAddress),
    };

    let prefix_len = prefix.len() as u32;
    let mut head = [0u8; 12];
    xdr.slice(0..prefix_len)
        .copy_into_slice(&mut head[..prefix.len()]);
    if &head[..prefix.len()] != prefix {
        return Err(Error::UnsupportedAddress);
    }

    let mut out = [0u8; 33];
    out[0] = kind;
    xdr.slice(prefix_len..).copy_into_slice(&mut out[1..]);
    Ok(out)
}

/// Rebuild a host address from its 33-byte wire identifier.
pub fn decode_address(env: &Env, raw: &[u8; 33]) -> Result<Address, Error> {
    let mut xdr = Bytes::new(env);
    match raw[0] {
        ACCOUNT_KIND => xdr.extend_from_array(&XDR_ACCOUNT_PREFIX),
        CONTRACT_KIND => xdr.extend_from_array(&XDR_CONTRACT_PREFIX),
        _ => return Err(Error::MalformedCalldata),
    }
    xdr.extend_from_slice(&raw[1..]);
    Address::from_xdr(env, &xdr).map_err(|_| Error::MalformedCalldata)
}

// ─────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────

/// Forward-only cursor over call or return bytes.
///
/// Every read is bounds-checked against the remaining length and fails with
/// [`Error::MalformedCalldata`] instead of reading past the end.
pub struct Reader {
    env: Env,
    data: Bytes,
    offset: u32,
}

impl Reader {
    pub fn new(env: &Env, data: Bytes) -> Self {
        Self {
            env: env.clone(),
            data,
            offset: 0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.data.len() - self.offset
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let len = N as u32;
        if self.remaining() < len {
            return Err(Error::MalformedCalldata);
        }
        let mut buf = [0u8; N];
        self.data
            .slice(self.offset..self.offset + len)
            .copy_into_slice(&mut buf);
        self.offset += len;
        Ok(buf)
    }

    pub fn read_selector(&mut self) -> Result<Selector, Error> {
        Ok(Selector(self.take::<4>()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(u32::from_be_bytes(self.take::<4>()?))
    }

    pub fn read_u256(&mut self) -> Result<Uint256, Error> {
        Ok(Uint256::from_be_bytes(&self.take::<32>()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, Error> {
        match self.take::<1>()?[0] {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::MalformedCalldata),
        }
    }

    pub fn read_address(&mut self) -> Result<Address, Error> {
        let raw = self.take::<33>()?;
        decode_address(&self.env, &raw)
    }

    /// Read `count` back-to-back `(address, u256)` entries.
    ///
    /// Fails before decoding anything if fewer than `count` entries' worth of
    /// bytes remain.
    pub fn read_entries(&mut self, count: u32) -> Result<Vec<Distribution>, Error> {
        let needed = count
            .checked_mul(ENTRY_LEN)
            .ok_or(Error::MalformedCalldata)?;
        if self.remaining() < needed {
            return Err(Error::MalformedCalldata);
        }

        let mut entries = Vec::new(&self.env);
        for _ in 0..count {
            let recipient = self.read_address()?;
            let amount = self.read_u256()?;
            entries.push_back(Distribution {
                recipient,
                amount: amount.to_host(&self.env),
            });
        }
        Ok(entries)
    }

    /// Assert that every byte has been consumed.
    pub fn finish(&self) -> Result<(), Error> {
        if self.remaining() != 0 {
            return Err(Error::MalformedCalldata);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────

/// Append-only builder for call and return bytes.
pub struct Writer {
    env: Env,
    buf: Bytes,
}

impl Writer {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            buf: Bytes::new(env),
        }
    }

    pub fn write_selector(&mut self, selector: Selector) {
        self.buf.extend_from_array(&selector.0);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_array(&value.to_be_bytes());
    }

    pub fn write_u256(&mut self, value: &Uint256) {
        self.buf.extend_from_array(&value.to_be_bytes());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push_back(value as u8);
    }

    pub fn write_address(&mut self, address: &Address) -> Result<(), Error> {
        let raw = encode_address(&self.env, address)?;
        self.buf.extend_from_array(&raw);
        Ok(())
    }

    /// Write a count-prefixed entry list.
    pub fn write_entries(&mut self, entries: &Vec<Distribution>) -> Result<(), Error> {
        self.write_u32(entries.len());
        for entry in entries.iter() {
            self.write_address(&entry.recipient)?;
            self.write_u256(&Uint256::from_host(&entry.amount));
        }
        Ok(())
    }

    pub fn len(&self) -> u32 {
        self.buf.len()
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf
    }
}
