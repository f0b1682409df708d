//! Field suggestions offered on the setup page, keyed by analysis category.

use crate::models::{FieldDraft, FieldType};

/// How many suggestions are repeated as quick picks
pub const QUICK_PICKS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub name: &'static str,
    pub field_type: FieldType,
    pub unit: Option<&'static str>,
}

const fn s(name: &'static str, field_type: FieldType, unit: Option<&'static str>) -> Suggestion {
    Suggestion { name, field_type, unit }
}

const ELECTRONICS: [Suggestion; 8] = [
    s("Brand", FieldType::Text, None),
    s("Model", FieldType::Text, None),
    s("Price", FieldType::Price, Some("$")),
    s("Screen Size", FieldType::Decimal, Some("inches")),
    s("Resolution", FieldType::Text, None),
    s("Refresh Rate", FieldType::Number, Some("Hz")),
    s("Connectivity", FieldType::Text, None),
    s("Warranty", FieldType::Text, None),
];

const FASHION: [Suggestion; 8] = [
    s("Brand", FieldType::Text, None),
    s("Material", FieldType::Text, None),
    s("Color", FieldType::Text, None),
    s("Size", FieldType::Text, None),
    s("Price", FieldType::Price, Some("$")),
    s("Waterproof", FieldType::Boolean, None),
    s("Weight", FieldType::Decimal, Some("oz")),
    s("Rating", FieldType::Rating, None),
];

const BOOKS: [Suggestion; 8] = [
    s("Author", FieldType::Text, None),
    s("Publisher", FieldType::Text, None),
    s("Publication Date", FieldType::Date, None),
    s("Pages", FieldType::Number, None),
    s("Price", FieldType::Price, Some("$")),
    s("Rating", FieldType::Rating, None),
    s("Genre", FieldType::Text, None),
    s("Language", FieldType::Text, None),
];

/// Categories offered when creating an analysis; the first is preselected
pub const CATEGORIES: [&str; 4] = ["Electronics", "Fashion", "Books", "Other"];

/// Category select options with the current choice marked
pub fn category_options(current: &str) -> impl Iterator<Item = (&'static str, bool)> + '_ {
    CATEGORIES.into_iter().map(move |c| (c, c == current))
}

/// Suggestions for a category; anything unknown gets the electronics set
pub fn for_category(category: Option<&str>) -> &'static [Suggestion] {
    match category.map(str::trim) {
        Some("Fashion") => &FASHION,
        Some("Books") => &BOOKS,
        _ => &ELECTRONICS,
    }
}

pub fn quick_picks(category: Option<&str>) -> &'static [Suggestion] {
    let all = for_category(category);
    &all[..QUICK_PICKS.min(all.len())]
}

impl Suggestion {
    /// Pre-filled add-field form
    pub fn to_draft(&self) -> FieldDraft {
        FieldDraft {
            field_name: self.name.to_string(),
            field_type: self.field_type,
            field_unit: self.unit.unwrap_or_default().to_string(),
            is_required: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_follow_the_kept_choice() {
        let picked: Vec<_> = category_options("Books").filter(|(_, sel)| *sel).collect();
        assert_eq!(picked, vec![("Books", true)]);
        assert_eq!(category_options(CATEGORIES[0]).next(), Some(("Electronics", true)));
        assert_eq!(category_options("Toys").filter(|(_, sel)| *sel).count(), 0);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(for_category(Some("Garden")), for_category(Some("Electronics")));
        assert_eq!(for_category(None)[0].name, "Brand");
        assert_eq!(for_category(Some("Books"))[0].name, "Author");
    }

    #[test]
    fn test_quick_picks_are_first_four() {
        let picks = quick_picks(Some("Fashion"));
        let names: Vec<_> = picks.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Brand", "Material", "Color", "Size"]);
    }

    #[test]
    fn test_suggestion_fills_draft() {
        let draft = for_category(Some("Electronics"))[3].to_draft();
        assert_eq!(draft.field_name, "Screen Size");
        assert_eq!(draft.field_type, FieldType::Decimal);
        assert_eq!(draft.field_unit, "inches");
        assert!(!draft.is_required);
    }
}
