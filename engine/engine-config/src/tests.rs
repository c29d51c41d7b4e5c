//! Tests for the configuration module.

use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.mcts.iterations, 4000);
    assert!((config.mcts.exploration - 1.41).abs() < f64::EPSILON);
    assert_eq!(config.actor.games, 10);
    assert_eq!(config.actor.opponent, "random");
    assert_eq!(config.actor.ai_piece, "alternate");
    assert_eq!(config.actor.log_interval, 1);
    assert!(config.actor.seed.is_none());
    assert!(config.actor.stats_path.is_none());
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"

[mcts]
iterations = 8000
exploration = 2.0

[actor]
games = 3
opponent = "mcts"
ai_piece = "red"
seed = 42
stats_path = "/tmp/stats.json"
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.mcts.iterations, 8000);
    assert!((config.mcts.exploration - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.actor.games, 3);
    assert_eq!(config.actor.opponent, "mcts");
    assert_eq!(config.actor.ai_piece, "red");
    assert_eq!(config.actor.seed, Some(42));
    assert_eq!(config.actor.stats_path.as_deref(), Some("/tmp/stats.json"));
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[mcts]
iterations = 100
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.mcts.iterations, 100);
    assert!((config.mcts.exploration - 1.41).abs() < f64::EPSILON); // Default
    assert_eq!(config.common.log_level, "info"); // Default
    assert_eq!(config.actor.games, 10); // Default
}

#[test]
fn test_empty_config() {
    let config: CentralConfig = toml::from_str("").unwrap();
    assert_eq!(config.mcts.iterations, 4000);
    assert_eq!(config.actor.opponent, "random");
}

#[test]
fn test_env_overrides() {
    std::env::set_var("CONNECT4_MCTS_ITERATIONS", "123");
    std::env::set_var("CONNECT4_ACTOR_OPPONENT", "human");
    std::env::set_var("CONNECT4_ACTOR_SEED", "9");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.mcts.iterations, 123);
    assert_eq!(config.actor.opponent, "human");
    assert_eq!(config.actor.seed, Some(9));

    std::env::remove_var("CONNECT4_MCTS_ITERATIONS");
    std::env::remove_var("CONNECT4_ACTOR_OPPONENT");
    std::env::remove_var("CONNECT4_ACTOR_SEED");
}

#[test]
fn test_unparsable_env_override_is_ignored() {
    std::env::set_var("CONNECT4_MCTS_EXPLORATION", "lots");
    std::env::set_var("CONNECT4_ACTOR_LOG_INTERVAL", "-3");

    let config = apply_env_overrides(CentralConfig::default());
    assert!((config.mcts.exploration - 1.41).abs() < f64::EPSILON);
    assert_eq!(config.actor.log_interval, 1);

    std::env::remove_var("CONNECT4_MCTS_EXPLORATION");
    std::env::remove_var("CONNECT4_ACTOR_LOG_INTERVAL");
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[actor]\ngames = 77\nai_piece = \"yellow\"").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.actor.games, 77);
    assert_eq!(config.actor.ai_piece, "yellow");
    assert_eq!(config.actor.log_interval, 1);
}

#[test]
fn test_load_from_invalid_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[mcts\niterations = ").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.actor.games, 10);
}

#[test]
fn test_load_from_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from_path(&dir.path().join("missing.toml"));
    assert_eq!(config.common.log_level, "info");
}

#[test]
fn test_load_config_honours_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[actor]\nstats_path = \"out.json\"\n").unwrap();

    std::env::set_var("CONNECT4_CONFIG", &path);
    let config = load_config();
    std::env::remove_var("CONNECT4_CONFIG");

    assert_eq!(config.actor.stats_path.as_deref(), Some("out.json"));
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.common.log_level, cloned.common.log_level);
    assert_eq!(config.actor.games, cloned.actor.games);
}
