//! Frontend Models
//!
//! Data structures matching what the server renders into the page.

use std::collections::HashMap;

use leptos_dragdrop::Keyed;
use serde::{Deserialize, Serialize};

/// Field type determines the input widget, the unit input, and how values sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Decimal,
    Boolean,
    Select,
    Rating,
    Price,
    Date,
    /// Fallback for unknown tags, so it has to stay last
    #[default]
    #[serde(other)]
    Text,
}

impl FieldType {
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Decimal,
        FieldType::Boolean,
        FieldType::Select,
        FieldType::Rating,
        FieldType::Price,
        FieldType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Decimal => "decimal",
            FieldType::Boolean => "boolean",
            FieldType::Select => "select",
            FieldType::Rating => "rating",
            FieldType::Price => "price",
            FieldType::Date => "date",
        }
    }

    /// Unknown tags are treated as text
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Decimal => "Decimal",
            FieldType::Boolean => "Yes/No",
            FieldType::Select => "Dropdown",
            FieldType::Rating => "Rating (1-5)",
            FieldType::Price => "Price",
            FieldType::Date => "Date",
        }
    }

    /// Only measurable types carry a unit
    pub fn has_unit(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Decimal | FieldType::Price)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Decimal | FieldType::Price | FieldType::Rating)
    }
}

/// Comparison group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub object_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Keyed for Analysis {
    fn key(&self) -> u32 {
        self.id
    }
}

/// Custom field of an analysis (the reorderable item on the setup page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: u32,
    pub field_name: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub field_unit: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl Field {
    /// Build the local copy of a field the server just accepted
    pub fn from_draft(id: u32, draft: &FieldDraft, display_order: i32) -> Self {
        Self {
            id,
            field_name: draft.field_name.trim().to_string(),
            field_type: draft.field_type,
            field_unit: Some(draft.field_unit.trim().to_string()).filter(|u| !u.is_empty()),
            is_required: draft.is_required,
            display_order,
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.field_unit.as_deref().filter(|u| !u.is_empty())
    }
}

impl Keyed for Field {
    fn key(&self) -> u32 {
        self.id
    }
}

/// Item being compared, with its raw value per field id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedObject {
    pub id: u32,
    pub object_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub values: HashMap<u32, String>,
}

impl ComparedObject {
    /// Raw value for a field, empty strings count as missing
    pub fn value(&self, field_id: u32) -> Option<&str> {
        self.values
            .get(&field_id)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

impl Keyed for ComparedObject {
    fn key(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// New field as posted to the server
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FieldDraft {
    pub field_name: String,
    pub field_type: FieldType,
    pub field_unit: String,
    pub is_required: bool,
}

/// New analysis as posted to the server (form encoded)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisDraft {
    pub name: String,
    pub description: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_round_trip_and_fallback() {
        assert_eq!(FieldType::parse("price"), FieldType::Price);
        assert_eq!(FieldType::parse("weird"), FieldType::Text);
        let parsed: FieldType = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(parsed, FieldType::Rating);
        let unknown: FieldType = serde_json::from_str("\"color\"").unwrap();
        assert_eq!(unknown, FieldType::Text);
        assert_eq!(serde_json::to_string(&FieldType::Boolean).unwrap(), "\"boolean\"");
    }

    #[test]
    fn test_field_with_unknown_type_reads_as_text() {
        let field: Field = serde_json::from_str(
            r#"{"id": 2, "field_name": "Color", "field_type": "color", "is_required": true}"#,
        )
        .unwrap();
        assert_eq!(field.field_type, FieldType::Text);
        let draft = FieldDraft { field_name: "Color".to_string(), ..Default::default() };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["field_type"], "text");
    }

    #[test]
    fn test_field_type_labels_and_units() {
        assert_eq!(FieldType::Boolean.label(), "Yes/No");
        assert_eq!(FieldType::Rating.label(), "Rating (1-5)");
        let with_unit: Vec<_> = FieldType::ALL.iter().filter(|t| t.has_unit()).collect();
        assert_eq!(with_unit, vec![&FieldType::Number, &FieldType::Decimal, &FieldType::Price]);
    }

    #[test]
    fn test_field_from_draft_trims() {
        let draft = FieldDraft {
            field_name: "  Weight ".to_string(),
            field_type: FieldType::Decimal,
            field_unit: " ".to_string(),
            is_required: true,
        };
        let field = Field::from_draft(7, &draft, 3);
        assert_eq!(field.field_name, "Weight");
        assert_eq!(field.unit(), None);
        assert_eq!(field.display_order, 3);
    }

    #[test]
    fn test_object_values_deserialize() {
        let obj: ComparedObject = serde_json::from_str(
            r#"{"id": 4, "object_name": "Phone", "values": {"1": "$499", "2": "  "}}"#,
        )
        .unwrap();
        assert_eq!(obj.value(1), Some("$499"));
        assert_eq!(obj.value(2), None);
        assert_eq!(obj.value(3), None);
        assert_eq!(obj.brand, None);
    }
}
