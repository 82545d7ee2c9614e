use sillyquest::config::Config;
use tempfile::tempdir;

#[test]
fn default_config_round_trips_through_disk() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    Config::create_default(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[game]"), "{}", text);
    assert!(text.contains("[logging]"), "{}", text);

    let loaded = Config::load(&path).unwrap();
    let default = Config::default();
    assert_eq!(loaded.game.seed, default.game.seed);
    assert_eq!(loaded.game.default_name, default.game.default_name);
    assert_eq!(loaded.display.emoji, default.display.emoji);
    assert_eq!(loaded.logging.file, default.logging.file);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let cfg = Config::load_or_default(tmp.path().join("nope.toml")).unwrap();
    assert!(cfg.game.seed.is_none());
    assert!(Config::load(tmp.path().join("nope.toml")).is_err());
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("bad.toml");
    std::fs::write(&path, "[game\nseed = ").unwrap();
    let err = Config::load(&path).unwrap_err().to_string();
    assert!(err.contains("Failed to parse"), "{}", err);
}

#[test]
fn seed_and_display_overrides_are_read() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "[game]\nseed = 99\ndefault_name = \"Bob\"\n\n[display]\nemoji = false\n",
    )
    .unwrap();
    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.game.seed, Some(99));
    assert_eq!(cfg.game.default_name, "Bob");
    assert!(!cfg.display.emoji);
    assert!(cfg.display.pause_between_turns);
}
