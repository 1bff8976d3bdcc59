//! Proptest strategies for registry inputs.

use proptest::collection::vec;
use proptest::prelude::*;

use veilgate_core::validation::{MAX_LOCATION_LEN, MAX_METADATA_LEN};
use veilgate_core::{AccessType, AccountId, Currency, IdType};

/// Non-empty preimages up to 64 bytes.
pub fn preimage() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 1..=64)
}

/// Metadata blobs within the registry bound.
pub fn metadata() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..=MAX_METADATA_LEN)
}

/// Metadata blobs just past the registry bound.
pub fn oversized_metadata() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), MAX_METADATA_LEN + 1..=MAX_METADATA_LEN + 32)
}

/// Non-burn account ids.
pub fn account_id() -> impl Strategy<Value = AccountId> {
    any::<[u8; 32]>().prop_filter_map("burn account is reserved", |bytes| {
        let account = AccountId::from_bytes(bytes);
        (!account.is_burn()).then_some(account)
    })
}

/// Any member of the identity-type set.
pub fn id_type() -> impl Strategy<Value = IdType> {
    prop_oneof![
        Just(IdType::Anon),
        Just(IdType::Pseudonym),
        Just(IdType::Verified),
    ]
}

/// Any member of the access-type set.
pub fn access_type() -> impl Strategy<Value = AccessType> {
    prop_oneof![
        Just(AccessType::Free),
        Just(AccessType::PayPerView),
        Just(AccessType::Subscription),
    ]
}

/// Any member of the currency set.
pub fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Usd),
        Just(Currency::Eur),
        Just(Currency::Btc),
    ]
}

/// Locations within the registry bound.
pub fn location() -> impl Strategy<Value = String> {
    "[a-z]{1,16}".prop_filter("location bound", |s| s.len() <= MAX_LOCATION_LEN)
}

/// Percentages valid as penalties.
pub fn penalty() -> impl Strategy<Value = u8> {
    0u8..=100
}

/// Percentages valid as voting thresholds.
pub fn voting_threshold() -> impl Strategy<Value = u8> {
    1u8..=100
}
