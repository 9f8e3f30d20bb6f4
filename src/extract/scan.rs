use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use walkdir::WalkDir;

/// Find benchmark log files under `root`, sorted lexicographically by path.
///
/// A file qualifies when its name contains `marker` and does not contain
/// `csv` (previously generated datasets live next to the logs). File
/// timestamps on build machines do not track build dates, so name order
/// stands in for build order.
///
/// # Errors
///
/// Returns an error if the directory walk fails or a matching path is not
/// valid UTF-8.
pub fn find_log_files(root: &Utf8Path, marker: &str) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.into_app_err_with(|| format!("scanning '{root}' for benchmark logs"))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.contains(marker) && !name.contains("csv") {
            let path = Utf8PathBuf::from_path_buf(entry.into_path()).map_err(|p| app_err!("non-UTF-8 log path '{}'", p.display()))?;
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
