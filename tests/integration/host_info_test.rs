use gfetch::core::host_info::{collect_host_info, packages, portage};
use gfetch::{FetchError, FATAL_PREFIX};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_package_count_over_database_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Mimic the /var/db/pkg layout: <category>/<package-version>/contents
    fs::create_dir_all(root.join("app-shells/bash-5.2_p26")).unwrap();
    fs::create_dir_all(root.join("app-shells/zsh-5.9")).unwrap();
    fs::create_dir_all(root.join("sys-apps/portage-3.0.66")).unwrap();
    fs::create_dir_all(root.join("sys-apps/sandbox-2.38")).unwrap();
    fs::write(root.join("app-shells/bash-5.2_p26/CONTENTS"), "").unwrap();
    fs::write(root.join("world"), "app-shells/zsh").unwrap();

    let count = packages::count_package_dirs(root).unwrap();
    assert_eq!(count, 4);
}

#[test]
fn test_package_count_missing_database_degrades_to_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("var/db/pkg");

    let result = packages::count_package_dirs(&missing);
    assert!(result.is_err());
}

#[test]
fn test_spawn_failure_is_the_fatal_variant() {
    let err = portage::query_version("definitely-not-installed-anywhere").unwrap_err();

    match &err {
        FetchError::CommandSpawn { command, .. } => {
            assert_eq!(command, "definitely-not-installed-anywhere --version");
        }
        other => panic!("expected CommandSpawn, got {:?}", other),
    }

    // The report the binary prints for this error carries the fixed prefix.
    let report = format!("{}{}", FATAL_PREFIX, err);
    assert!(report.starts_with("critical-invalid: "));
    assert!(report.contains("failed to run: definitely-not-installed-anywhere --version"));
}

#[test]
fn test_lookup_failures_stay_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("db");
    fs::create_dir_all(good.join("dev-vcs/git-2.45.2")).unwrap();
    let bad = temp_dir.path().join("nowhere");

    // A failing lookup leaves an unrelated lookup in the same process untouched.
    assert!(packages::count_package_dirs(&bad).is_err());
    assert_eq!(packages::count_package_dirs(&good).unwrap(), 1);

    let _ = portage::query_version("definitely-not-installed-anywhere");
    assert_eq!(packages::count_package_dirs(&good).unwrap(), 1);
}

#[test]
fn test_collect_host_info_only_fatal_error_is_spawn() {
    // On hosts without portageq the collection aborts with the spawn
    // error; everywhere else it must produce a fully populated record.
    match collect_host_info() {
        Ok(info) => {
            let fields = info.labeled_fields();
            assert_eq!(fields.len(), 11);
        }
        Err(e) => {
            assert_eq!(e.to_string(), "failed to run: portageq --version");
        }
    }
}
