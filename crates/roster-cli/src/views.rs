//! Terminal rendering of profiles with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use roster_model::{Languages, Profile, proficiency_label};

/// Shown instead of an empty table.
pub const NO_RESULTS: &str = "No profiles found";

/// Summary table, one row per profile.
pub fn profile_table(profiles: &[Profile], styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Languages"),
        header_cell("Skills"),
        header_cell("Hobbies"),
        header_cell("Interests"),
    ]);
    apply_table_style(&mut table, styled);
    for profile in profiles {
        table.add_row(vec![
            dim_cell(profile.id.as_str()),
            Cell::new(&profile.name).add_attribute(Attribute::Bold),
            Cell::new(language_summary(&profile.languages, false)),
            list_cell(&profile.skills),
            list_cell(&profile.hobbies),
            list_cell(&profile.interests),
        ]);
    }
    table
}

/// Detail card for a single profile.
pub fn profile_card(profile: &Profile, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(&profile.name)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(profile.id.as_str()),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    if !styled {
        table.force_no_tty();
    }
    if profile.has_image() {
        table.add_row(vec![label_cell("Photo"), Cell::new(&profile.image)]);
    }
    table.add_row(vec![
        label_cell("Languages"),
        Cell::new(language_summary(&profile.languages, true)),
    ]);
    table.add_row(vec![label_cell("Skills"), list_cell(&profile.skills)]);
    table.add_row(vec![label_cell("Hobbies"), list_cell(&profile.hobbies)]);
    table.add_row(vec![label_cell("Interests"), list_cell(&profile.interests)]);
    table
}

/// Single-column listing of skills.
pub fn skills_table(skills: &[String], styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Skill")]);
    apply_table_style(&mut table, styled);
    for skill in skills {
        table.add_row(vec![skill]);
    }
    table
}

/// Known languages with their proficiency label; level 0 is omitted.
///
/// `multiline` puts one language per line, as on the detail card.
pub fn language_summary(languages: &Languages, multiline: bool) -> String {
    let entries: Vec<String> = languages
        .displayed()
        .map(|(language, level)| {
            format!(
                "{}: {} ({level})",
                language.label(),
                proficiency_label(level)
            )
        })
        .collect();
    if entries.is_empty() {
        return "-".to_string();
    }
    entries.join(if multiline { "\n" } else { ", " })
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if !styled {
        table.force_no_tty();
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Yellow)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn list_cell(items: &[String]) -> Cell {
    if items.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Language, ProfileDraft, ProfileId};

    #[test]
    fn language_summary_hides_unknown_levels() {
        let mut languages = Languages::default();
        languages.set(Language::English, 5);
        languages.set(Language::Hindi, 2);
        assert_eq!(
            language_summary(&languages, false),
            "English: Native (5), Hindi: Intermediate (2)"
        );
        assert_eq!(language_summary(&Languages::default(), true), "-");
    }

    #[test]
    fn card_omits_photo_row_without_image() {
        let profile = ProfileDraft::new("Sara")
            .with_level(Language::Urdu, 3)
            .into_profile(ProfileId::for_row(0));
        let rendered = profile_card(&profile, false).to_string();
        assert!(rendered.contains("Sara"));
        assert!(rendered.contains("Urdu: Advanced (3)"));
        assert!(!rendered.contains("Photo"));
    }

    #[test]
    fn table_lists_every_profile() {
        let profiles = vec![
            ProfileDraft::new("Amina").into_profile(ProfileId::for_row(0)),
            ProfileDraft::new("Omar")
                .with_skill("Art")
                .into_profile(ProfileId::for_row(1)),
        ];
        let rendered = profile_table(&profiles, false).to_string();
        assert!(rendered.contains("teacher-0"));
        assert!(rendered.contains("Omar"));
        assert!(rendered.contains("Art"));
    }
}
