//! Common Test Utilities for the instrument map
//!
//! Sample SEDOL / ISIN / RIC generators and agent fixtures. Generated values
//! are unique within one test binary run.

#![allow(dead_code)]

use parking_lot::Mutex;
use rand::Rng;
use std::collections::HashSet;
use std::sync::OnceLock;
use types::{Agent, AgentRole, Code, CodeScheme};

const COUNTRY_CODES: &[&str] = &[
    "US", "AU", "CA", "CN", "DE", "FR", "GB", "HK", "IN", "JP", "KR", "NL", "SG", "TW",
];

const RIC_ROOTS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "JPM", "JNJ", "WMT", "INTC", "LOW", "CAT", "COST",
    "GS", "MS", "BLK", "AMD", "INTU", "MMM", "ADP", "ISRG", "CVS", "LMT",
];

const RIC_VENUES: &[&str] = &["O", "N", "L", "T", "HK", "DE"];

const MAX_ATTEMPTS: usize = 1000;

fn issued() -> &'static Mutex<HashSet<String>> {
    static ISSUED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    ISSUED.get_or_init(|| Mutex::new(HashSet::new()))
}

fn unique(kind: &str, mut gen: impl FnMut() -> String) -> String {
    for _ in 0..MAX_ATTEMPTS {
        let value = gen();
        if issued().lock().insert(value.clone()) {
            return value;
        }
    }
    panic!("Failed to generate unique {} code", kind);
}

fn digits(n: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

/// Two-letter country prefix followed by ten digits
pub fn gen_isin() -> String {
    unique("ISIN", || {
        let country = COUNTRY_CODES[rand::thread_rng().gen_range(0..COUNTRY_CODES.len())];
        format!("{}{}", country, digits(10))
    })
}

/// Seven digits
pub fn gen_sedol() -> String {
    unique("SEDOL", || digits(7))
}

/// Ticker root plus exchange suffix, e.g. `AAPL.O`
pub fn gen_ric() -> String {
    unique("RIC", || {
        let mut rng = rand::thread_rng();
        let root = RIC_ROOTS[rng.gen_range(0..RIC_ROOTS.len())];
        let venue = RIC_VENUES[rng.gen_range(0..RIC_VENUES.len())];
        format!("{}{}.{}", root, rng.gen_range(0..100u32), venue)
    })
}

/// One fresh ISIN, SEDOL and RIC code
pub fn alt_codes() -> Vec<Code> {
    vec![
        Code::new(CodeScheme::Isin, gen_isin()).unwrap(),
        Code::new(CodeScheme::Sedol, gen_sedol()).unwrap(),
        Code::new(CodeScheme::Ric, gen_ric()).unwrap(),
    ]
}

pub fn maintainer() -> Agent {
    Agent::with_generated_id(AgentRole::Maintainer, "TestAgent").unwrap()
}

pub fn reader() -> Agent {
    Agent::with_generated_id(AgentRole::Reader, "TestAgent").unwrap()
}

/// Same members, ignoring order; duplicates in `actual` fail the check
pub fn same_members(actual: &[Code], expected: &[Code]) -> bool {
    let actual_set: HashSet<&Code> = actual.iter().collect();
    let expected_set: HashSet<&Code> = expected.iter().collect();
    actual.len() == actual_set.len() && actual_set == expected_set
}
