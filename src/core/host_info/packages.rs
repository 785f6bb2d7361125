use crate::error::Result;
use std::fs;
use std::path::Path;

const PKG_DB_ROOT: &str = "/var/db/pkg";

/// Count installed packages in the Portage package database.
pub fn collect() -> Result<String> {
    let count = count_package_dirs(Path::new(PKG_DB_ROOT))?;
    Ok(count.to_string())
}

/// The database is laid out as `<category>/<package-version>/`; every
/// second-level directory is one installed package version record.
pub fn count_package_dirs(root: &Path) -> Result<usize> {
    let mut count = 0;
    for category in fs::read_dir(root)? {
        let category = category?;
        if !category.file_type()?.is_dir() {
            continue;
        }
        for entry in fs::read_dir(category.path())? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                count += 1;
            }
        }
    }
    Ok(count)
}
