use std::fs;
use timeaftertime::config::{ConfigMap, ConfigStore, DataDir, GLOBAL_CONFIG_FILE};
use timeaftertime::errors::AppError;

mod common;
use common::setup_test_dir;

fn store_with(name: &str, contents: &str) -> ConfigStore {
    let dir = setup_test_dir(name);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ts_test.conf");
    fs::write(&path, contents).unwrap();
    ConfigStore::new(path)
}

#[test]
fn test_update_rewrites_only_the_matching_line() {
    let store = store_with("cfg_update", "name=Foo\nrate=10.00\n");

    store.update("rate", "15.00").unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "name=Foo\nrate=15.00\n"
    );
}

#[test]
fn test_update_appends_missing_key_and_keeps_unknown_ones() {
    let store = store_with("cfg_append", "name=Foo\ncolour=blue\nrate=10\n");

    store.update("currency", "€").unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "name=Foo\ncolour=blue\nrate=10\ncurrency=€\n"
    );
    let map = store.read().unwrap();
    assert_eq!(map.get("colour"), Some("blue"));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_update_creates_missing_file() {
    let dir = setup_test_dir("cfg_missing");
    let store = ConfigStore::new(dir.join("global.conf"));

    store.update("last", "None").unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "last=None\n");
}

#[test]
fn test_read_rejects_line_without_delimiter() {
    let store = store_with("cfg_bad_line", "name=Foo\njust some words\n");

    match store.read() {
        Err(AppError::ConfigFormat { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "just some words");
        }
        other => panic!("expected ConfigFormat, got {other:?}"),
    }
}

#[test]
fn test_values_may_contain_equals_sign() {
    let map = ConfigMap::parse("name=a=b\n\nrate=1\n").unwrap();
    assert_eq!(map.get("name"), Some("a=b"));
    assert_eq!(map.render(), "name=a=b\n\nrate=1\n");
}

#[test]
fn test_update_leaves_other_lines_verbatim() {
    let store = store_with("cfg_verbatim", "name = Foo\nrate=10.00\nrate=11\n");

    assert_eq!(store.read().unwrap().get("rate"), Some("10.00"));

    store.update("currency", "$").unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "name = Foo\nrate=10.00\nrate=11\ncurrency=$\n"
    );

    // only the first occurrence of a repeated key is rewritten
    store.update("rate", "12").unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "name = Foo\nrate=12\nrate=11\ncurrency=$\n"
    );

    let map = store.read().unwrap();
    assert_eq!(map.get("rate"), Some("12"));
    assert_eq!(map.get("name"), Some(" Foo"));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_update_rejects_multiline_value_without_writing() {
    let store = store_with("cfg_multiline", "name=Foo\n");

    let res = store.update("name", "Foo\nrate=0");

    assert!(matches!(res, Err(AppError::ConfigFormat { .. })));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "name=Foo\n");
}

#[test]
fn test_initialize_never_overwrites() {
    let dir = setup_test_dir("cfg_init");
    let store = ConfigStore::new(dir.join("ts_x.conf"));

    store
        .initialize(&[("name", "X"), ("rate", "20")])
        .unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "name=X\nrate=20\n");

    let again = store.initialize(&[("name", "Y")]);
    assert!(matches!(again, Err(AppError::AlreadyExists(_))));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "name=X\nrate=20\n");
}

#[test]
fn test_data_dir_bootstraps_global_config() {
    let root = setup_test_dir("cfg_bootstrap");
    let data = DataDir::new(&root);

    data.ensure().unwrap();

    assert_eq!(
        fs::read_to_string(root.join(GLOBAL_CONFIG_FILE)).unwrap(),
        "last=None\n"
    );
    assert_eq!(data.global_config().last().unwrap(), None);

    // a second run leaves the pointer alone
    data.global_config().set_last(Some("Client_A")).unwrap();
    data.ensure().unwrap();
    assert_eq!(
        data.global_config().last().unwrap().as_deref(),
        Some("Client_A")
    );
}

#[test]
fn test_timesheet_names_map_to_directories() {
    let data = DataDir::new("/tmp/unused");

    assert_eq!(DataDir::dir_name("Client A").unwrap(), "Client_A");
    assert!(DataDir::dir_name("None").is_err());
    assert!(DataDir::dir_name("   ").is_err());
    assert!(DataDir::dir_name("../evil").is_err());

    assert!(
        data.csv_path("Client_A")
            .ends_with("Client_A/ts_client_a.csv")
    );
    assert!(
        data.conf_path("Client_A")
            .ends_with("Client_A/ts_client_a.conf")
    );
}
