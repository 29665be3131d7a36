//! # Uint256
//!
//! Fixed-width 256-bit unsigned integer used for every amount, identifier and
//! block height the registry handles.
//!
//! Backed by `primitive_types::U256`: four `u64` limbs, least-significant limb
//! first. On the wire it is 32 big-endian bytes. Only checked arithmetic is
//! exposed.
//!
//! The host also has a `U256` object type. That type lives behind an `Env`
//! handle and is what the typed entry points and storage use.
//! [`Uint256::to_host`] and [`Uint256::from_host`] convert losslessly between
//! the two.

use primitive_types::U256 as Limbs;
use soroban_sdk::{Env, U256};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uint256(Limbs);

impl Uint256 {
    pub const ZERO: Self = Self(Limbs([0; 4]));
    pub const ONE: Self = Self(Limbs([1, 0, 0, 0]));
    pub const MAX: Self = Self(Limbs::MAX);

    /// Build from limbs, least-significant first.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(Limbs(limbs))
    }

    pub const fn limbs(&self) -> [u64; 4] {
        self.0 .0
    }

    pub const fn from_u32(value: u32) -> Self {
        Self::from_u64(value as u64)
    }

    pub const fn from_u64(value: u64) -> Self {
        Self::from_limbs([value, 0, 0, 0])
    }

    pub const fn from_u128(value: u128) -> Self {
        Self::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self + rhs`, or `None` if the sum does not fit in 256 bits.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// `self - rhs`, or `None` if `rhs > self`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Narrow to `u32`, or `None` if the value does not fit.
    pub fn to_u32(&self) -> Option<u32> {
        self.to_u64().and_then(|v| u32::try_from(v).ok())
    }

    /// Narrow to `u64`, or `None` if the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.bits() <= 64 {
            Some(self.0.low_u64())
        } else {
            None
        }
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Self(Limbs::from_big_endian(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.0.to_big_endian(&mut out);
        out
    }

    pub fn to_host(&self, env: &Env) -> U256 {
        let [lo_lo, lo_hi, hi_lo, hi_hi] = self.limbs();
        U256::from_parts(env, hi_hi, hi_lo, lo_hi, lo_lo)
    }

    pub fn from_host(value: &U256) -> Self {
        let mut buf = [0u8; 32];
        value.to_be_bytes().copy_into_slice(&mut buf);
        Self::from_be_bytes(&buf)
    }
}
