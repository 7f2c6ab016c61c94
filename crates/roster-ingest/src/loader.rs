use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use roster_model::Profile;
use tracing::{debug, info};

use crate::csv_table::read_records;
use crate::error::LoadError;
use crate::normalize::normalize_record;

/// Load profiles from CSV text held in memory.
pub fn load_profiles(text: &str) -> Result<Vec<Profile>, LoadError> {
    load_profiles_from_reader(text.as_bytes())
}

/// Load profiles from any CSV source, normalizing rows in order.
pub fn load_profiles_from_reader<R: Read>(source: R) -> Result<Vec<Profile>, LoadError> {
    let start = Instant::now();
    let records = read_records(source)?;
    let profiles: Vec<Profile> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let profile = normalize_record(record, index);
            debug!(
                row = index,
                skills = profile.skills.len(),
                hobbies = profile.hobbies.len(),
                interests = profile.interests.len(),
                "normalized row"
            );
            profile
        })
        .collect();
    info!(
        profile_count = profiles.len(),
        duration_ms = start.elapsed().as_millis(),
        "roster loaded"
    );
    Ok(profiles)
}

/// Load profiles from a CSV file on disk.
pub fn load_profiles_from_path(path: &Path) -> Result<Vec<Profile>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading roster file");
    load_profiles_from_reader(BufReader::new(file))
}
