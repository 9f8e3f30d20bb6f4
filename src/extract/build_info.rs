use log::warn;

/// Marker separating the file-name prefix from the build metadata.
const NAME_MARKER: &str = "_results_";

/// Build metadata carried by a log's file name, preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub build_machine: String,
    pub build_id: String,
    pub boot_source: String,
    pub build_date: String,
}

/// Parse build metadata from a log file name of the form
/// `<anything>_results_<date>_<machine>-<id>_<bootsource>`.
///
/// Fields are plain string splits with no normalization; a name that does
/// not follow the scheme degrades to empty fields instead of failing the
/// record, since the measurements in the log are still worth keeping.
pub fn parse_build_info(file_name: &str) -> BuildInfo {
    let tail = match file_name.rsplit_once(NAME_MARKER) {
        Some((_, tail)) => tail,
        None => {
            warn!("file name '{file_name}' does not follow the <prefix>_results_<date>_<machine>-<id>_<boot> scheme");
            file_name
        }
    };

    let mut segments = tail.split('_');
    let build_date = segments.next().unwrap_or_default();
    let build = segments.next().unwrap_or_default();
    let boot_source = tail.rsplit('_').next().unwrap_or_default();

    BuildInfo {
        build_machine: build.split('-').next().unwrap_or_default().to_string(),
        build_id: build.rsplit('-').next().unwrap_or_default().to_string(),
        boot_source: boot_source.to_string(),
        build_date: build_date.to_string(),
    }
}
