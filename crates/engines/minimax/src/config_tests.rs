use super::*;

#[test]
fn test_difficulty_depths() {
    let depths: Vec<u8> = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Expert,
    ]
    .into_iter()
    .map(Difficulty::depth)
    .collect();
    assert_eq!(depths, [1, 2, 3, 4]);
}

#[test]
fn test_empty_config_is_hard() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.difficulty, Difficulty::Hard);
    assert_eq!(config.search_depth(), 3);
    assert_eq!(config.seed, None);
}

#[test]
fn test_parse_full_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        difficulty = "easy"
        seed = 99
        "#,
    )
    .unwrap();
    assert_eq!(config.difficulty, Difficulty::Easy);
    assert_eq!(config.search_depth(), 1);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn test_depth_overrides_difficulty() {
    let config = EngineConfig::from_toml_str("difficulty = \"expert\"\ndepth = 2").unwrap();
    assert_eq!(config.search_depth(), 2);
}

#[test]
fn test_rejects_bad_input() {
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 0"),
        Err(ConfigError::InvalidDepth)
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("difficulty = \"grandmaster\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 300"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load("/nonexistent/minimax.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/minimax.toml"));
}

#[test]
fn test_load_from_disk() {
    let path = std::env::temp_dir().join(format!("minimax_config_{}.toml", std::process::id()));
    std::fs::write(&path, "difficulty = \"normal\"\n").unwrap();
    let config = EngineConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.search_depth(), 2);
}
