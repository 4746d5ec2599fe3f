use ol_account::{AccountContext, AccountError};
use ol_genesis::{apply, GenesisError, GenesisFile};
use ol_store::Registry;
use ol_types::{AccountAddress, AuthKey};
use std::io::Write;

fn ordinary_key() -> String {
    format!("0x{}", "11".repeat(32))
}

fn legacy_key() -> String {
    "22".repeat(32)
}

fn sample_genesis() -> String {
    format!(
        r#"
        [[accounts]]
        auth_key = "{ordinary}"
        balance = 1000

        [[accounts]]
        address = "0xabc"
        auth_key = "{legacy}"
        balance = 5000
        slow_unlocked = 200

        [[transfers]]
        sender = "{ordinary}"
        recipient = "0xabc"
        amount = 100

        [[transfers]]
        sender = "0xabc"
        recipient = "{ordinary}"
        amount = 300

        [[transfers]]
        sender = "{ordinary}"
        recipient = "0x99"
        amount = 50

        [[transfers]]
        sender = "0xabc"
        recipient = "{ordinary}"
        amount = 200
        "#,
        ordinary = ordinary_key(),
        legacy = legacy_key()
    )
}

#[test]
fn builds_accounts_replays_transfers_and_reports_supply() {
    let genesis = GenesisFile::from_toml_str(&sample_genesis()).unwrap();
    let (engine, report) = apply(&genesis).unwrap();

    let ordinary = AccountAddress::from_hex_literal(&ordinary_key()).unwrap();
    let legacy = AccountAddress::from_u64(0xabc);
    let created = AccountAddress::from_u64(0x99);

    assert_eq!(engine.balance(&ordinary).unwrap(), (850, 850));
    assert_eq!(engine.balance(&legacy).unwrap(), (200, 5100));
    assert_eq!(engine.balance(&created).unwrap(), (50, 50));

    assert_eq!(report.accounts.len(), 3);
    assert_eq!(report.applied_transfers, 2);
    let rejected: Vec<(usize, u64)> = report
        .rejected_transfers
        .iter()
        .map(|r| (r.index, r.code))
        .collect();
    // The last transfer asks for exactly the unlocked amount and is still refused.
    assert_eq!(rejected, vec![(1, 6), (3, 6)]);

    assert_eq!(report.supply.total, 6000);
    assert_eq!(report.supply.normal, 900);
    assert_eq!(report.supply.slow_total, 5100);
    assert_eq!(report.supply.slow_unlocked, 200);
    assert_eq!(report.supply.slow_locked, 4900);
}

#[test]
fn roles_split_the_reported_supply() {
    let toml = format!(
        r#"
        [[accounts]]
        auth_key = "{ordinary}"
        balance = 700
        donor_directed = true

        [[accounts]]
        address = "0xabc"
        auth_key = "{legacy}"
        balance = 5000
        slow_unlocked = 200
        validator = true
        "#,
        ordinary = ordinary_key(),
        legacy = legacy_key()
    );
    let genesis = GenesisFile::from_toml_str(&toml).unwrap();
    let (_, report) = apply(&genesis).unwrap();

    assert_eq!(report.supply.total, 5700);
    assert_eq!(report.supply.normal, 0);
    assert_eq!(report.supply.donor_directed, 700);
    assert_eq!(report.supply.validator, 5000);
    assert_eq!(report.supply.validator_locked, 4800);
    let flags: Vec<(bool, bool)> = report
        .accounts
        .iter()
        .map(|a| (a.donor_directed, a.validator))
        .collect();
    assert_eq!(flags.iter().filter(|f| f.0).count(), 1);
    assert_eq!(flags.iter().filter(|f| f.1).count(), 1);
}

#[test]
fn legacy_accounts_resolve_by_their_key() {
    let genesis = GenesisFile::from_toml_str(&sample_genesis()).unwrap();
    let (engine, _) = apply(&genesis).unwrap();

    let key = AuthKey::from_hex(&legacy_key()).unwrap();
    assert_eq!(
        engine.context().registry().resolve_by_identity_key(&key),
        AccountAddress::from_u64(0xabc)
    );
}

#[test]
fn explicit_address_matching_the_key_is_an_ordinary_account() {
    let toml = format!(
        r#"
        [[accounts]]
        address = "{key}"
        auth_key = "{key}"
        balance = 5
        "#,
        key = ordinary_key()
    );
    let genesis = GenesisFile::from_toml_str(&toml).unwrap();
    let (engine, report) = apply(&genesis).unwrap();
    let address = AccountAddress::from_hex_literal(&ordinary_key()).unwrap();
    assert!(engine.context().receipts.is_initialized(&address));
    assert_eq!(report.supply.normal, 5);
}

#[test]
fn short_legacy_key_is_fatal() {
    let toml = r#"
        [[accounts]]
        address = "0xabc"
        auth_key = "0x1234"
        "#;
    let genesis = GenesisFile::from_toml_str(toml).unwrap();
    let err = apply(&genesis).unwrap_err();
    assert!(matches!(
        err,
        GenesisError::Account {
            index: 0,
            source: AccountError::InvalidAuthKey(_)
        }
    ));
}

#[test]
fn duplicate_accounts_are_fatal() {
    let toml = format!(
        r#"
        [[accounts]]
        auth_key = "{key}"

        [[accounts]]
        auth_key = "{key}"
        "#,
        key = ordinary_key()
    );
    let genesis = GenesisFile::from_toml_str(&toml).unwrap();
    let err = apply(&genesis).unwrap_err();
    match err {
        GenesisError::Account { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source.code(), 101);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_genesis_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample_genesis().as_bytes()).unwrap();
    let genesis = GenesisFile::from_toml_file(file.path()).unwrap();
    assert_eq!(genesis.accounts.len(), 2);
    assert_eq!(genesis.transfers.len(), 4);
}
