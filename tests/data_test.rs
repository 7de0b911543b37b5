//! Integration tests for dataset loading and data directory resolution

mod common;

use hoop_stats::{
    core::resolve_data_dir,
    data::{Dataset, CAREER_FILE, ON_OFF_FILE},
    Season, StatsError, DATA_DIR_ENV_VAR,
};
use std::fs;

#[test]
fn test_load_all_datasets() {
    let dir = common::data_dir();
    let dataset = Dataset::load(dir.path()).unwrap();

    assert_eq!(dataset.generated_at, common::GENERATED_AT);
    assert_eq!(dataset.overview.info.display_first_last, "Christian Braun");
    assert_eq!(dataset.game_log.games.len(), 4);
    assert_eq!(dataset.shot_chart.shots.len(), 2);
    assert_eq!(dataset.career.base.len(), 2);
    assert!(dataset.career.advanced.is_empty());
}

#[test]
fn test_season_lookups_distinguish_null_and_absent() {
    let dir = common::data_dir();
    let dataset = Dataset::load(dir.path()).unwrap();

    assert!(dataset.on_off.on_off.get(Season::S2024_25).is_some());
    // explicit null
    assert!(dataset.on_off.on_off.get(Season::S2023_24).is_none());
    // key absent
    assert!(dataset.on_off.on_off.get(Season::S2022_23).is_none());
    assert_eq!(dataset.general_splits.seasons(), vec![Season::S2024_25]);

    let shooting = dataset.shooting_splits.get(Season::S2024_25).unwrap();
    assert!(shooting.shot_type.is_empty());
    assert_eq!(shooting.shot_area.len(), 3);
}

#[test]
fn test_missing_dataset_names_file() {
    let dir = common::data_dir();
    fs::remove_file(dir.path().join(CAREER_FILE)).unwrap();

    match Dataset::load(dir.path()) {
        Err(StatsError::MissingDataset { file }) => assert_eq!(file, CAREER_FILE),
        other => panic!("Expected MissingDataset, got {:?}", other),
    }
}

#[test]
fn test_malformed_dataset_names_file() {
    let dir = common::data_dir();
    fs::write(dir.path().join(ON_OFF_FILE), r#"{"meta": {}, "data": {"on_off": 3}}"#).unwrap();

    let err = Dataset::load(dir.path()).unwrap_err();
    assert!(matches!(err, StatsError::Dataset { ref file, .. } if file == ON_OFF_FILE));
    assert!(err.to_string().contains(ON_OFF_FILE));
}

#[test]
fn test_resolve_data_dir_precedence() {
    let env_dir = common::data_dir();
    let flag_dir = common::data_dir();

    std::env::set_var(DATA_DIR_ENV_VAR, env_dir.path());
    assert_eq!(resolve_data_dir(None).unwrap(), env_dir.path());
    assert_eq!(
        resolve_data_dir(Some(flag_dir.path().to_path_buf())).unwrap(),
        flag_dir.path()
    );

    let missing = env_dir.path().join("missing");
    std::env::set_var(DATA_DIR_ENV_VAR, &missing);
    assert!(matches!(
        resolve_data_dir(None),
        Err(StatsError::DataDirNotFound { path }) if path == missing
    ));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}
