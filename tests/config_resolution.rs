//! Snapshot directory resolution tests.

mod test_helpers;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use taskboard::config::{STORE_DIR_ENV, StoreConfig};
use test_helpers::EnvVarGuard;

#[rstest]
fn explicit_directory_wins_over_environment() {
    let _env = EnvVarGuard::set(STORE_DIR_ENV, Some("/from/env"));

    let config = StoreConfig::resolve(Some(Utf8PathBuf::from("/from/flag"))).expect("resolves");

    assert_eq!(config.store_dir(), Utf8Path::new("/from/flag"));
}

#[rstest]
fn environment_directory_used_without_flag() {
    let _env = EnvVarGuard::set(STORE_DIR_ENV, Some("/from/env"));

    let config = StoreConfig::resolve(None).expect("resolves");

    assert_eq!(config.store_dir(), Utf8Path::new("/from/env"));
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn falls_back_to_platform_data_directory(#[case] env_value: Option<&str>) {
    let _env = EnvVarGuard::set(STORE_DIR_ENV, env_value);

    let Ok(config) = StoreConfig::resolve(None) else {
        // Platforms without a home directory have no data directory.
        return;
    };

    assert!(config.store_dir().as_str().contains("taskboard"));
    assert_ne!(config.store_dir(), Utf8Path::new(""));
}
