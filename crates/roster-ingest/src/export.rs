//! Serializing profiles back into the roster table format.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use roster_model::Profile;

use crate::columns::EXPORT_HEADERS;
use crate::error::ExportError;

/// Separator used when joining multi-valued fields.
const LIST_SEPARATOR: &str = ", ";

/// Render profiles as CSV with the fixed export header order.
///
/// Ids are not exported; they are reassigned whenever the table is loaded.
pub fn profiles_to_csv(profiles: &[Profile]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;
    for profile in profiles {
        let levels: Vec<String> = profile
            .languages
            .iter()
            .map(|(_, level)| level.to_string())
            .collect();
        let mut row: Vec<String> = Vec::with_capacity(EXPORT_HEADERS.len());
        row.push(profile.image.clone());
        row.push(profile.name.clone());
        row.extend(levels);
        row.push(profile.skills.join(LIST_SEPARATOR));
        row.push(profile.hobbies.join(LIST_SEPARATOR));
        row.push(profile.interests.join(LIST_SEPARATOR));
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}

/// Export profiles to `path`.
///
/// Writes to a temp file first, then renames it over the target.
pub fn write_profiles(profiles: &[Profile], path: &Path) -> Result<(), ExportError> {
    let contents = profiles_to_csv(profiles)?;
    let temp_path = path.with_extension("csv.tmp");

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if let Err(err) = write_and_replace(&temp_path, path, contents.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    tracing::info!(path = %path.display(), profile_count = profiles.len(), "exported roster");
    Ok(())
}

fn write_and_replace(temp_path: &Path, path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut file = File::create(temp_path).map_err(io_err("create", temp_path))?;
    file.write_all(bytes).map_err(io_err("write", temp_path))?;
    file.sync_all().map_err(io_err("sync", temp_path))?;
    fs::rename(temp_path, path).map_err(io_err("replace", path))
}

fn io_err(
    operation: &'static str,
    path: &Path,
) -> impl FnOnce(std::io::Error) -> ExportError + use<> {
    let path = path.to_path_buf();
    move |source| ExportError::Io {
        operation,
        path,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Language, ProfileDraft, ProfileId};

    #[test]
    fn fields_with_commas_are_quoted() {
        let profile = ProfileDraft::new("Amina")
            .with_level(Language::English, 5)
            .with_skill("Math")
            .with_skill("Physics")
            .into_profile(ProfileId::for_row(0));
        let csv = profiles_to_csv(&[profile]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Image,NAME,ENGLISH,ARABIC,URDU,MALAYALAM,HINDI,MY SKILLS,MY HOBBIES,INTRESTED AREA")
        );
        assert_eq!(lines.next(), Some(",Amina,5,0,0,0,0,\"Math, Physics\",,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn failed_replace_leaves_no_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("roster");
        fs::create_dir(&target).unwrap();
        let err = write_profiles(&[], &target).unwrap_err();
        assert!(matches!(err, ExportError::Io { operation: "replace", .. }));
        assert!(!dir.path().join("roster.csv.tmp").exists());
    }

    #[test]
    fn empty_collection_exports_header_only() {
        let csv = profiles_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
