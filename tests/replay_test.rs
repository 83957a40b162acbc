//! End-to-end replay tests: config file + script in, snapshots out

use std::fs;

use imagepick::config::load_choice_config;
use imagepick::replay::{parse_script, replay};
use imagepick::SelectionSnapshot;
use tempfile::TempDir;

fn replay_files(config_toml: &str, script: &str) -> Vec<SelectionSnapshot> {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("picker.toml");
    fs::write(&path, config_toml).unwrap();

    let config = load_choice_config(&path).expect("Failed to load config");
    let events = parse_script(script).expect("Failed to parse script");
    replay(config, &events)
}

#[test]
fn test_replay_scenario_a() {
    let snapshots = replay_files(
        "options = [\"a.png\", \"b.png\"]\nsingle_select = true\n",
        "select a.png\nselect a.png\n",
    );
    let json: Vec<String> = snapshots
        .iter()
        .map(|s| serde_json::to_string(s).unwrap())
        .collect();
    assert_eq!(
        json,
        vec![
            r#"{"image":"a.png","reasons":[],"customReason":""}"#,
            r#"{"image":null,"reasons":[],"customReason":""}"#,
        ]
    );
}

#[test]
fn test_replay_scenario_b() {
    let snapshots = replay_files(
        "options = [\"x\", \"y\"]\nreasons = [\"Clear\", \"Vague\"]\n",
        "select x\nreason Clear\nreason Clear\n",
    );
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[1].reasons, vec!["Clear".to_string()]);
    assert!(snapshots[2].reasons.is_empty());
    assert!(snapshots.iter().all(|s| s.image.as_deref() == Some("x")));
}

#[test]
fn test_replay_scenario_d_free_text_with_spaces() {
    let snapshots = replay_files(
        "options = [\"a.png\"]\n",
        "# pick then explain\nselect a.png\ntext Because it's cleaner\n",
    );
    let last = snapshots.last().expect("Expected snapshots");
    assert_eq!(last.image.as_deref(), Some("a.png"));
    assert_eq!(last.custom_reason, "Because it's cleaner");
    assert!(last.reasons.is_empty());
}

#[test]
fn test_replay_empty_script() {
    let snapshots = replay_files("options = []\n", "\n# nothing\n");
    assert!(snapshots.is_empty());
}
