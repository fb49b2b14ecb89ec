//! Integration tests for building matchers from configuration

use macaddr_matcher::{
    build_group, DataManager, DataProvider, ErrorKind, MacAddr, MacMatcher, SourceEntry,
};

#[test]
fn test_entries_from_json_config() {
    let json = r#"["aa:bb:cc:dd:ee:ff", "0011.2233.4455", "provider:office"]"#;
    let entries: Vec<SourceEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(
        entries,
        vec![
            SourceEntry::Literal("aa:bb:cc:dd:ee:ff".into()),
            SourceEntry::Literal("0011.2233.4455".into()),
            SourceEntry::Provider("office".into()),
        ]
    );

    let dm = DataManager::new().with_provider(DataProvider::new(
        "office",
        "# printers\n66-77-88-99-AA-BB\n",
    ));
    let group = build_group(&entries, &dm).unwrap();

    for s in ["AA:BB:CC:DD:EE:FF", "00:11:22:33:44:55", "66:77:88:99:aa:bb"] {
        let mac: MacAddr = s.parse().unwrap();
        assert!(group.matches(mac.as_bytes()), "{} should match", s);
    }
    assert_eq!(group.len(), 3);
}

#[test]
fn test_empty_provider_tag_rejected_by_config() {
    let json = r#"["provider:   "]"#;
    let result: Result<Vec<SourceEntry>, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_file_provider_from_config() {
    let dir = std::env::temp_dir().join("macaddr_matcher_test_config_file");
    let _ = std::fs::create_dir_all(&dir);
    let file_path = dir.join("devices.txt");
    std::fs::write(&file_path, "# devices\n\n00:11:22:33:44:55\n").unwrap();

    let dm = DataManager::new().with_provider(DataProvider::from_file("devices", &file_path).unwrap());
    let entries: Vec<SourceEntry> = serde_json::from_str(r#"["provider:devices"]"#).unwrap();
    let group = build_group(&entries, &dm).unwrap();
    assert!(group.matches(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));

    // A broken file keeps the last good content
    std::fs::write(&file_path, "00:11:22:33:44\n").unwrap();
    let provider = dm.get_data_provider("devices").unwrap();
    assert_eq!(provider.reload().unwrap(), 1);
    assert!(group.matches(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));

    let _ = std::fs::remove_file(&file_path);
    let _ = std::fs::remove_dir(&dir);
}

#[test]
fn test_unknown_provider_in_config() {
    let entries: Vec<SourceEntry> = serde_json::from_str(r#"["provider:nope"]"#).unwrap();
    let err = build_group(&entries, &DataManager::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
}
