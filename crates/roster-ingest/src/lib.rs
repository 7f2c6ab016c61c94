//! Loading and exporting the staff roster table.
//!
//! The source is a header-bearing CSV file with one row per staff member.
//! Each row is cleaned by [`normalize_record`] into a [`roster_model::Profile`];
//! [`profiles_to_csv`] performs the inverse transform for export.

pub mod columns;
pub mod csv_table;
pub mod error;
pub mod export;
pub mod loader;
pub mod normalize;

pub use columns::{EXPORT_HEADERS, HOBBIES, IMAGE, INTERESTS, NAME, SKILLS};
pub use csv_table::{RawRecord, read_records};
pub use error::{ExportError, LoadError};
pub use export::{profiles_to_csv, write_profiles};
pub use loader::{load_profiles, load_profiles_from_path, load_profiles_from_reader};
pub use normalize::{UNKNOWN_NAME, clean_list, normalize_record, parse_level};
