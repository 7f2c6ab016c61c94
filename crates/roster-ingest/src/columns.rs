//! Column labels of the roster table, spelled exactly as in the source files.

pub const NAME: &str = "NAME";
pub const IMAGE: &str = "Image";
pub const SKILLS: &str = "MY SKILLS";
pub const HOBBIES: &str = "MY HOBBIES";
pub const INTERESTS: &str = "INTRESTED AREA";

/// Header row written by the exporter.
pub const EXPORT_HEADERS: [&str; 10] = [
    IMAGE,
    NAME,
    "ENGLISH",
    "ARABIC",
    "URDU",
    "MALAYALAM",
    "HINDI",
    SKILLS,
    HOBBIES,
    INTERESTS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::Language;

    #[test]
    fn export_headers_use_language_columns_in_order() {
        let language_headers: Vec<&str> = Language::ALL.into_iter().map(Language::column).collect();
        assert_eq!(&EXPORT_HEADERS[2..7], language_headers.as_slice());
    }
}
