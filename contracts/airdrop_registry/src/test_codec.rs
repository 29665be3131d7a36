extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Bytes, Env, String, Vec, U256};

use crate::codec::{
    decode_address, encode_address, Reader, Selector, Writer, ACCOUNT_KIND, ADDRESS_LEN,
    CONTRACT_KIND, ENTRY_LEN,
};
use crate::dispatch::{
    CREATE_CAMPAIGN, CREATE_CAMPAIGN_SIGNATURE, GET_CAMPAIGN, GET_CAMPAIGN_COUNT,
    GET_CAMPAIGN_COUNT_SIGNATURE, GET_CAMPAIGN_SIGNATURE,
};
use crate::token::{TRANSFER, TRANSFER_FROM, TRANSFER_FROM_SIGNATURE, TRANSFER_SIGNATURE};
use crate::uint::Uint256;
use crate::{Distribution, Error};

const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const SEQ_ACCOUNT: &str = "GAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQTCQKRMFYYDENBWHA5DYPSABOV";
const SEQ_CONTRACT: &str = "CAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQTCQKRMFYYDENBWHA5DYPSBFLM";

fn strkey(env: &Env, s: &str) -> Address {
    Address::from_string(&String::from_str(env, s))
}

fn seq_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    for (i, b) in key.iter_mut().enumerate() {
        *b = i as u8 + 1;
    }
    key
}

// ─── Selectors ───────────────────────────────────────────

#[test]
fn test_selector_constants_match_signatures() {
    let env = Env::default();
    assert_eq!(Selector::of(&env, CREATE_CAMPAIGN_SIGNATURE), CREATE_CAMPAIGN);
    assert_eq!(Selector::of(&env, GET_CAMPAIGN_SIGNATURE), GET_CAMPAIGN);
    assert_eq!(Selector::of(&env, GET_CAMPAIGN_COUNT_SIGNATURE), GET_CAMPAIGN_COUNT);
    assert_eq!(Selector::of(&env, TRANSFER_SIGNATURE), TRANSFER);
    assert_eq!(Selector::of(&env, TRANSFER_FROM_SIGNATURE), TRANSFER_FROM);
}

#[test]
fn test_selectors_are_distinct() {
    let all = [CREATE_CAMPAIGN, GET_CAMPAIGN, GET_CAMPAIGN_COUNT, TRANSFER, TRANSFER_FROM];
    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            assert_ne!(all[i], all[j]);
        }
    }
}

#[test]
fn test_selector_depends_on_types_only() {
    let env = Env::default();
    assert_ne!(
        Selector::of(&env, "getCampaign(uint256)"),
        Selector::of(&env, "getCampaign(uint32)")
    );
    assert_eq!(GET_CAMPAIGN.to_u32(), 0x5b7f_af79);
}

// ─── Uint256 ─────────────────────────────────────────────

#[test]
fn test_uint256_byte_layout_is_big_endian() {
    let value = Uint256::from_limbs([0x0102, 0, 0, 0xff00_0000_0000_0000]);
    let bytes = value.to_be_bytes();
    assert_eq!(bytes[0], 0xff);
    assert_eq!(bytes[30], 0x01);
    assert_eq!(bytes[31], 0x02);
    assert_eq!(Uint256::from_be_bytes(&bytes), value);
}

#[test]
fn test_uint256_round_trips() {
    let env = Env::default();
    let samples = [
        Uint256::ZERO,
        Uint256::ONE,
        Uint256::MAX,
        Uint256::from_u64(u64::MAX),
        Uint256::from_u128(u128::MAX),
        Uint256::from_limbs([1, 2, 3, 4]),
        Uint256::from_limbs([0, 0, 0, 1]),
    ];
    for value in samples {
        assert_eq!(Uint256::from_be_bytes(&value.to_be_bytes()), value);
        assert_eq!(Uint256::from_host(&value.to_host(&env)), value);
    }
    assert_eq!(Uint256::from_u128(u128::MAX).to_host(&env), U256::from_u128(&env, u128::MAX));
}

#[test]
fn test_uint256_checked_add() {
    assert_eq!(
        Uint256::from_u64(u64::MAX).checked_add(Uint256::ONE),
        Some(Uint256::from_limbs([0, 1, 0, 0]))
    );
    assert_eq!(Uint256::MAX.checked_add(Uint256::ZERO), Some(Uint256::MAX));
    assert_eq!(Uint256::MAX.checked_add(Uint256::ONE), None);
    assert_eq!(
        Uint256::from_limbs([0, 0, 0, 1 << 63])
            .checked_add(Uint256::from_limbs([0, 0, 0, 1 << 63])),
        None
    );
}

#[test]
fn test_uint256_checked_sub() {
    assert_eq!(
        Uint256::from_limbs([0, 1, 0, 0]).checked_sub(Uint256::ONE),
        Some(Uint256::from_u64(u64::MAX))
    );
    assert_eq!(Uint256::ZERO.checked_sub(Uint256::ONE), None);
    assert_eq!(Uint256::MAX.checked_sub(Uint256::MAX), Some(Uint256::ZERO));
}

#[test]
fn test_uint256_ordering_and_narrowing() {
    assert!(
        Uint256::from_limbs([0, 0, 0, 1]) > Uint256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0])
    );
    assert!(Uint256::ZERO < Uint256::ONE);
    assert_eq!(Uint256::from_u32(7).to_u32(), Some(7));
    assert_eq!(Uint256::from_u64(u64::MAX).to_u32(), None);
    assert_eq!(Uint256::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(Uint256::from_limbs([0, 1, 0, 0]).to_u64(), None);
    assert!(Uint256::default().is_zero());
}

// ─── Addresses ───────────────────────────────────────────

#[test]
fn test_account_address_encoding() {
    let env = Env::default();
    let raw = encode_address(&env, &strkey(&env, SEQ_ACCOUNT)).unwrap();
    assert_eq!(raw[0], ACCOUNT_KIND);
    assert_eq!(&raw[1..], &seq_key());
    assert_eq!(decode_address(&env, &raw).unwrap(), strkey(&env, SEQ_ACCOUNT));

    let zero = encode_address(&env, &strkey(&env, ZERO_ACCOUNT)).unwrap();
    assert_eq!(zero, [0u8; 33]);
}

#[test]
fn test_contract_address_encoding() {
    let env = Env::default();
    let raw = encode_address(&env, &strkey(&env, SEQ_CONTRACT)).unwrap();
    assert_eq!(raw[0], CONTRACT_KIND);
    assert_eq!(&raw[1..], &seq_key());
    assert_eq!(decode_address(&env, &raw).unwrap(), strkey(&env, SEQ_CONTRACT));
}

#[test]
fn test_generated_addresses_round_trip() {
    let env = Env::default();
    for _ in 0..8 {
        let address = Address::generate(&env);
        let raw = encode_address(&env, &address).unwrap();
        assert_eq!(decode_address(&env, &raw).unwrap(), address);
    }
}

#[test]
fn test_unknown_address_kind_rejected() {
    let env = Env::default();
    let mut raw = [0u8; 33];
    raw[0] = 7;
    assert_eq!(decode_address(&env, &raw), Err(Error::MalformedCalldata));
}

// ─── Reader / Writer ─────────────────────────────────────

#[test]
fn test_writer_reader_round_trip() {
    let env = Env::default();
    let token = Address::generate(&env);
    let mut w = Writer::new(&env);
    w.write_selector(CREATE_CAMPAIGN);
    w.write_address(&token).unwrap();
    w.write_u32(0xdead_beef);
    w.write_u256(&Uint256::MAX);
    w.write_bool(true);
    w.write_bool(false);
    assert_eq!(w.len(), 4 + ADDRESS_LEN + 4 + 32 + 2);

    let mut r = Reader::new(&env, w.into_bytes());
    assert_eq!(r.read_selector().unwrap(), CREATE_CAMPAIGN);
    assert_eq!(r.read_address().unwrap(), token);
    assert_eq!(r.read_u32().unwrap(), 0xdead_beef);
    assert_eq!(r.read_u256().unwrap(), Uint256::MAX);
    assert!(r.read_bool().unwrap());
    assert!(!r.read_bool().unwrap());
    r.finish().unwrap();
}

#[test]
fn test_entries_round_trip() {
    let env = Env::default();
    let mut entries = Vec::new(&env);
    for amount in [1u128, 0, u128::MAX] {
        entries.push_back(Distribution {
            recipient: Address::generate(&env),
            amount: U256::from_u128(&env, amount),
        });
    }

    let mut w = Writer::new(&env);
    w.write_entries(&entries).unwrap();
    assert_eq!(w.len(), 4 + 3 * ENTRY_LEN);

    let mut r = Reader::new(&env, w.into_bytes());
    let count = r.read_u32().unwrap();
    assert_eq!(r.read_entries(count).unwrap(), entries);
    r.finish().unwrap();
}

#[test]
fn test_reads_past_end_fail() {
    let env = Env::default();
    let mut r = Reader::new(&env, Bytes::from_array(&env, &[1, 2, 3]));
    assert_eq!(r.read_u32(), Err(Error::MalformedCalldata));
    assert_eq!(r.remaining(), 3);

    let mut r = Reader::new(&env, Bytes::new(&env));
    assert_eq!(r.read_selector(), Err(Error::MalformedCalldata));
    assert_eq!(r.read_bool(), Err(Error::MalformedCalldata));
    assert_eq!(r.read_u256(), Err(Error::MalformedCalldata));
}

#[test]
fn test_declared_count_longer_than_payload_fails() {
    let env = Env::default();
    let mut w = Writer::new(&env);
    w.write_address(&Address::generate(&env)).unwrap();
    w.write_u256(&Uint256::ONE);

    let mut r = Reader::new(&env, w.into_bytes());
    assert_eq!(r.read_entries(2), Err(Error::MalformedCalldata));
    // Nothing was consumed.
    assert_eq!(r.remaining(), ENTRY_LEN);

    let mut r = Reader::new(&env, Bytes::new(&env));
    assert_eq!(r.read_entries(u32::MAX), Err(Error::MalformedCalldata));
}

#[test]
fn test_trailing_bytes_fail_finish() {
    let env = Env::default();
    let mut r = Reader::new(&env, Bytes::from_array(&env, &[0, 0, 0, 1, 9]));
    assert_eq!(r.read_u32().unwrap(), 1);
    assert_eq!(r.finish(), Err(Error::MalformedCalldata));
}

#[test]
fn test_invalid_bool_rejected() {
    let env = Env::default();
    let mut r = Reader::new(&env, Bytes::from_array(&env, &[2]));
    assert_eq!(r.read_bool(), Err(Error::MalformedCalldata));
}
