//! Instrument Map Integration Tests
//!
//! Exercises the four map operations end to end through the public API.

mod common;

use common::{alt_codes, maintainer, reader, same_members};
use instrument_map::InstrumentMap;
use std::collections::HashSet;
use types::{Code, CodeScheme, ErrorKind, InstrumentMapError};

#[test]
fn test_create_instr() {
    let mut map = InstrumentMap::new();

    let code = map.create_instr(&maintainer()).unwrap();
    assert_eq!(code.scheme(), CodeScheme::Base);

    let err = map.create_instr(&reader()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncorrectPermissions);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_created_base_codes_are_distinct() {
    let mut map = InstrumentMap::new();
    let agent = maintainer();

    let codes: HashSet<Code> = (0..200).map(|_| map.create_instr(&agent).unwrap()).collect();
    assert_eq!(codes.len(), 200);
    assert_eq!(map.len(), 200);
}

#[test]
fn test_create_and_get_instr() {
    let mut map = InstrumentMap::new();
    let code = map.create_instr(&maintainer()).unwrap();

    for agent in [maintainer(), reader()] {
        let codes = map.get_instr_codes(&code, &agent).unwrap();
        assert_eq!(codes, vec![code.clone()]);
    }
}

#[test]
fn test_add_instr_codes_for_missing_code() {
    let mut map = InstrumentMap::new();
    let missing = Code::base(Code::gen_base_code_value()).unwrap();

    let err = map
        .add_instr_codes(&missing, &alt_codes(), &maintainer())
        .unwrap_err();
    assert_eq!(err, InstrumentMapError::CodeNotFound { code: missing });
}

#[test]
fn test_add_instr_codes() {
    let mut map = InstrumentMap::new();
    let base = map.create_instr(&maintainer()).unwrap();
    let alts = alt_codes();

    let err = map.add_instr_codes(&base, &alts, &reader()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncorrectPermissions);
    assert_eq!(map.get_instr_codes(&base, &reader()).unwrap().len(), 1);

    map.add_instr_codes(&base, &alts, &maintainer()).unwrap();

    // Any member of the group finds the whole group
    let mut expected = vec![base.clone()];
    expected.extend(alts.iter().cloned());
    for member in &expected {
        let codes = map.get_instr_codes(member, &reader()).unwrap();
        assert!(same_members(&codes, &expected), "group of {} was {:?}", member, codes);
    }
}

#[test]
fn test_add_instr_codes_through_alternate_code() {
    let mut map = InstrumentMap::new();
    let agent = maintainer();
    let base = map.create_instr(&agent).unwrap();
    let isin = Code::new(CodeScheme::Isin, common::gen_isin()).unwrap();
    map.add_instr_codes(&base, &[isin.clone()], &agent).unwrap();

    // Extending via the ISIN attaches to the ISIN's base code
    let ric = Code::new(CodeScheme::Ric, common::gen_ric()).unwrap();
    map.add_instr_codes(&isin, &[ric.clone()], &agent).unwrap();

    assert_eq!(
        map.get_instr_code_of_type(&ric, CodeScheme::Base, &agent).unwrap(),
        base
    );
    assert_eq!(map.get_instr_codes(&base, &agent).unwrap(), vec![base, isin, ric]);
}

#[test]
fn test_add_duplicate_insert_instr_codes() {
    let mut map = InstrumentMap::new();
    let agent = maintainer();
    let base = map.create_instr(&agent).unwrap();
    let alts = alt_codes();

    map.add_instr_codes(&base, &alts, &agent).unwrap();
    let before = map.get_instr_codes(&base, &agent).unwrap();
    map.add_instr_codes(&base, &alts, &agent).unwrap();
    let after = map.get_instr_codes(&base, &agent).unwrap();

    assert_eq!(before, after);
    assert_eq!(after.len(), alts.len() + 1);
}

#[test]
fn test_add_conflicting_instr_codes() {
    let mut map = InstrumentMap::new();
    let agent = maintainer();
    let base = map.create_instr(&agent).unwrap();
    let alts = alt_codes();
    map.add_instr_codes(&base, &alts, &agent).unwrap();

    let other = map.create_instr(&agent).unwrap();
    let err = map.add_instr_codes(&other, &alts, &agent).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConflictingAssociation);

    // Neither group moved
    let mut expected = vec![base.clone()];
    expected.extend(alts.iter().cloned());
    assert!(same_members(&map.get_instr_codes(&base, &agent).unwrap(), &expected));
    assert_eq!(map.get_instr_codes(&other, &agent).unwrap(), vec![other]);
}

#[test]
fn test_add_many_instr_codes() {
    let mut map = InstrumentMap::new();
    let agent = maintainer();

    let mut all_groups = Vec::new();
    for _ in 0..20 {
        let base = map.create_instr(&agent).unwrap();
        let alts = alt_codes();
        map.add_instr_codes(&base, &alts, &agent).unwrap();

        let mut group = vec![base];
        group.extend(alts);
        all_groups.push(group);
    }

    for group in &all_groups {
        for member in group {
            let codes = map.get_instr_codes(member, &reader()).unwrap();
            assert!(same_members(&codes, group));
        }
    }
    assert!(map.is_consistent());
    assert_eq!(map.stats().codes, 80);
}

#[test]
fn test_get_instr_code_of_type_for_bad_code() {
    let mut map = InstrumentMap::new();
    let base = map.create_instr(&maintainer()).unwrap();
    let not_added = Code::base(Code::gen_base_code_value()).unwrap();

    assert_eq!(
        map.get_instr_code_of_type(&not_added, CodeScheme::Ric, &reader())
            .unwrap_err()
            .kind(),
        ErrorKind::CodeNotFound
    );
    assert_eq!(
        map.get_instr_code_of_type(&base, CodeScheme::Isin, &reader())
            .unwrap_err(),
        InstrumentMapError::OnlyBaseCodeDefined {
            code: base.clone(),
            scheme: CodeScheme::Isin,
        }
    );
    assert_eq!(
        map.get_instr_code_of_type(&base, CodeScheme::Base, &reader())
            .unwrap(),
        base
    );
}

#[test]
fn test_get_instr_code_of_type() {
    let mut map = InstrumentMap::new();
    let agent = maintainer();

    let mut all_groups = Vec::new();
    for _ in 0..20 {
        let base = map.create_instr(&agent).unwrap();
        let alts = alt_codes();
        map.add_instr_codes(&base, &alts, &agent).unwrap();
        all_groups.push(base);
    }

    for base in &all_groups {
        for code in map.get_instr_codes(base, &reader()).unwrap() {
            let found_base = map
                .get_instr_code_of_type(&code, CodeScheme::Base, &reader())
                .unwrap();
            assert_eq!(&found_base, base);

            let same = map
                .get_instr_code_of_type(&found_base, code.scheme(), &reader())
                .unwrap();
            assert_eq!(same, code);
        }
    }
}

#[test]
fn test_reader_and_maintainer_permissions() {
    let mut map = InstrumentMap::new();
    let maintainer = maintainer();
    let reader = reader();

    let base = map.create_instr(&maintainer).unwrap();
    map.add_instr_codes(&base, &alt_codes(), &maintainer).unwrap();

    for agent in [&maintainer, &reader] {
        assert!(map.get_instr_codes(&base, agent).is_ok());
        assert!(map
            .get_instr_code_of_type(&base, CodeScheme::Isin, agent)
            .is_ok());
    }

    assert_eq!(
        map.create_instr(&reader).unwrap_err().kind(),
        ErrorKind::IncorrectPermissions
    );
    assert_eq!(
        map.add_instr_codes(&base, &alt_codes(), &reader)
            .unwrap_err()
            .kind(),
        ErrorKind::IncorrectPermissions
    );
}

#[test]
fn test_isin_sedol_scenario() {
    let mut map = InstrumentMap::new();
    let maintainer = maintainer();
    let reader = reader();

    let b1 = map.create_instr(&maintainer).unwrap();
    let isin = Code::new(CodeScheme::Isin, "US0378331005").unwrap();
    let sedol = Code::new(CodeScheme::Sedol, "2046251").unwrap();
    map.add_instr_codes(&b1, &[isin.clone(), sedol], &maintainer)
        .unwrap();

    assert_eq!(
        map.get_instr_code_of_type(&b1, CodeScheme::Isin, &reader)
            .unwrap(),
        isin
    );
    assert_eq!(
        map.get_instr_code_of_type(&b1, CodeScheme::Ric, &reader)
            .unwrap_err()
            .kind(),
        ErrorKind::OnlyBaseCodeDefined
    );
}
