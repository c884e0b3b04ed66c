//! Deterministic derivation of the file-system names used per building: the
//! temporary simulation directory, the coupling-unit archive path and the
//! base name of an input file.

use std::path::{Path, PathBuf};

use crate::Error;

/// Longest supported derived temporary-directory path, in bytes.
pub const MAX_TEMP_DIR_LEN: usize = 100_000;

const TEMP_DIR_PREFIX: &str = "tmp-simulation-";
const ARCHIVE_EXTENSION: &str = "fmu";

/// Replace every `[` and `]` with `_`.
///
/// These characters arise when a model is array-indexed (e.g. `bldg[3]`) and
/// are invalid in the external engine's loader.
pub fn sanitize_model_name(name: &str) -> String {
    name.replace(['[', ']'], "_")
}

/// Absolute path of the coupling-unit archive for `building_id`, placed
/// inside `temp_dir`. The whole returned path is bracket-sanitized, so a
/// bracketed `temp_dir` cannot leak brackets to the external loader either.
pub fn simulation_archive_path(building_id: &str, temp_dir: &Path) -> PathBuf {
    let path = temp_dir.join(format!("{building_id}.{ARCHIVE_EXTENSION}"));
    PathBuf::from(sanitize_model_name(&path.to_string_lossy()))
}

/// Absolute path of the temporary directory used for the external engine, in
/// the form `<root>/tmp-simulation-<building_id>`. The whole returned path
/// is bracket-sanitized, including the `root` component.
pub fn simulation_temp_dir(root: &Path, building_id: &str) -> Result<PathBuf, Error> {
    let dir = root.join(format!("{TEMP_DIR_PREFIX}{building_id}"));
    let dir = PathBuf::from(sanitize_model_name(&dir.to_string_lossy()));
    if dir.as_os_str().len() > MAX_TEMP_DIR_LEN {
        return Err(Error::TempDirTooLong {
            path: dir.display().to_string(),
            max: MAX_TEMP_DIR_LEN,
        });
    }
    Ok(dir)
}

/// The segment of `path` between the last `/` and the last `.`.
///
/// Requires an absolute path with at least one separator and an extension in
/// the final segment; relative paths and extensionless files are rejected.
pub fn base_name(path: &str) -> Result<&str, Error> {
    let (_, file) = path
        .rsplit_once('/')
        .ok_or_else(|| Error::MissingPathSeparator { path: path.into() })?;
    let (stem, _) = file
        .rsplit_once('.')
        .ok_or_else(|| Error::MissingFileExtension { path: path.into() })?;
    Ok(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_brackets_only() {
        assert_eq!(sanitize_model_name("bldg[3]"), "bldg_3_");
        assert_eq!(sanitize_model_name("plain.name"), "plain.name");
    }

    #[test]
    fn archive_path_is_sanitized() {
        let path = simulation_archive_path("bldg[3]", Path::new("/work/tmp-simulation-bldg_3_"));
        assert_eq!(
            path,
            Path::new("/work/tmp-simulation-bldg_3_/bldg_3_.fmu")
        );
    }

    #[test]
    fn temp_dir_is_rooted_and_sanitized() {
        let dir = simulation_temp_dir(Path::new("/work"), "mod.nam.bui[2]").unwrap();
        assert_eq!(dir, Path::new("/work/tmp-simulation-mod.nam.bui_2_"));
    }

    #[test]
    fn temp_dir_sanitizes_bracketed_root() {
        let dir = simulation_temp_dir(Path::new("/work[1]"), "bldg").unwrap();
        assert_eq!(dir, Path::new("/work_1_/tmp-simulation-bldg"));
    }

    #[test]
    fn archive_path_sanitizes_bracketed_temp_dir() {
        let path = simulation_archive_path("bldg", Path::new("/work[1]/tmp-simulation-bldg"));
        assert_eq!(path, Path::new("/work_1_/tmp-simulation-bldg/bldg.fmu"));
    }

    #[test]
    fn temp_dir_length_ceiling() {
        let long_id = "b".repeat(MAX_TEMP_DIR_LEN);
        let err = simulation_temp_dir(Path::new("/work"), &long_id).unwrap_err();
        assert!(matches!(err, Error::TempDirTooLong { .. }));
    }

    #[test]
    fn base_name_of_absolute_path() {
        assert_eq!(base_name("/a/b/model.idf").unwrap(), "model");
    }

    #[test]
    fn base_name_uses_last_separator_and_dot() {
        assert_eq!(base_name("/a/b.c/model.tar.gz").unwrap(), "model.tar");
    }

    #[test]
    fn base_name_rejects_relative_path() {
        let err = base_name("noslash.idf").unwrap_err();
        assert!(matches!(err, Error::MissingPathSeparator { .. }));
    }

    #[test]
    fn base_name_rejects_missing_extension() {
        let err = base_name("/a/b/noext").unwrap_err();
        assert!(matches!(err, Error::MissingFileExtension { .. }));
    }
}
