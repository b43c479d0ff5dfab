//! Configuration files on disk.

use std::io::Write;

use marga::config::{ConfigLoadError, MargaConfig};
use marga::core::Pose2D;

#[test]
fn load_sample_config() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../configs/config.yaml");
    let config = MargaConfig::load(&path).unwrap();

    assert_eq!(config.collision.inflation_margin, 0.3);
    assert_eq!(config.start_pose(), Pose2D::new(1.5, 0.5, 0.0));

    let set = config.obstacle_set().unwrap();
    assert_eq!(set.boundaries().len(), 4);
    assert_eq!(set.rectangles().len(), 1);
    assert_eq!(set.circles().len(), 1);
}

#[test]
fn load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "path:\n  downsample_threshold: 0.5\nexecutor:\n  start_pose: {{ x: 1.0, y: 2.0 }}"
    )
    .unwrap();

    let config = MargaConfig::load(file.path()).unwrap();
    assert_eq!(config.path.downsample_threshold, 0.5);
    assert_eq!(config.path.workspace_extent, 5.0);
    assert_eq!(config.start_pose(), Pose2D::new(1.0, 2.0, 0.0));
}

#[test]
fn empty_file_is_default() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = MargaConfig::load(file.path()).unwrap();
    assert_eq!(config, MargaConfig::default());
}

#[test]
fn invalid_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "path:\n  downsample_threshold: -0.5").unwrap();

    let err = MargaConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Invalid(_)));
    assert!(err.to_string().contains("downsample_threshold"));
}
