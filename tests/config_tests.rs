use ledger_core::config::{AccountProfile, ConfigStore, LedgerConfig};
use ledger_core::money::Money;
use uuid::Uuid;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    let config = store.load().unwrap();
    assert_eq!(config, LedgerConfig::default());
    assert_eq!(config.currency, "PHP");
    assert!(config.accounts.is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("nested").join("config.json"));

    let config = LedgerConfig {
        currency: "PHP".into(),
        accounts: vec![AccountProfile {
            id: Uuid::new_v4(),
            name: "Operations Fund".into(),
            opening_balance: Money::from_minor_units(250_000),
        }],
    };
    store.save(&config).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.opening_balance_for("Operations Fund"),
        Some(Money::from_minor_units(250_000))
    );
    assert_eq!(loaded.opening_balance_for("Unknown"), None);
}

#[test]
fn save_leaves_no_tmp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let store = ConfigStore::new(&path);
    store.save(&LedgerConfig::default()).unwrap();

    assert!(path.exists());
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["config.json".to_string()]);
}
