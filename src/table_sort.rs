//! Comparison Table Sorting
//!
//! Typed value extraction from rendered cells and a stable, direction-aware
//! ordering over rows. Missing values always end up at the bottom.

use std::cmp::Ordering;

use leptos_dragdrop::{Keyed, OrderedList};

use crate::models::FieldType;

/// Placeholder rendered for a missing value
pub const ABSENT_MARKER: &str = "-";

pub const MAX_STARS: usize = 5;

/// A rendered table cell: visible text plus the sub-elements sorting looks at
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub text: String,
    /// Filled star markers (rating cells)
    pub filled_stars: usize,
    /// Status badge text (boolean cells)
    pub badge: Option<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    /// How the server-side template renders one raw value of a field type
    pub fn render(field_type: FieldType, raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).filter(|r| !r.is_empty() && *r != ABSENT_MARKER);
        match field_type {
            FieldType::Price => match raw {
                Some(r) if r.starts_with(|c: char| CURRENCY_SYMBOLS.contains(&c)) => Cell::text(r),
                Some(r) => Cell::text(format!("${}", r)),
                None => Cell::text(ABSENT_MARKER),
            },
            FieldType::Rating => {
                let stars = raw
                    .and_then(parse_float_prefix)
                    .map(|v| v.clamp(0.0, MAX_STARS as f64) as usize)
                    .unwrap_or(0);
                Cell { filled_stars: stars, ..Default::default() }
            }
            FieldType::Boolean => match raw {
                Some(r) => Cell {
                    badge: Some(boolean_label(r).to_string()),
                    ..Default::default()
                },
                None => Cell::text(ABSENT_MARKER),
            },
            FieldType::Text
            | FieldType::Number
            | FieldType::Decimal
            | FieldType::Select
            | FieldType::Date => Cell::text(raw.unwrap_or(ABSENT_MARKER)),
        }
    }
}

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

fn boolean_label(raw: &str) -> &str {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "y" => "Yes",
        "0" | "false" | "no" | "off" | "n" => "No",
        _ => raw,
    }
}

/// Value a cell sorts by
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Absent,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn as_text(&self) -> String {
        match self {
            SortValue::Absent => String::new(),
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(t) => t.clone(),
        }
    }

    /// Numeric view for charts: missing and non-numeric count as zero
    pub fn as_number(&self) -> f64 {
        match self {
            SortValue::Number(n) if n.is_finite() => *n,
            _ => 0.0,
        }
    }
}

/// Leading-prefix float parse: `"12 GB"` is 12, `"abc"` is nothing
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    // exponent only counts when digits follow
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Only finite numbers sort numerically; `1e999` stays text so mixed
/// number/text comparisons remain a total order.
fn numeric_or_text(text: &str) -> SortValue {
    match parse_float_prefix(text) {
        Some(n) if n.is_finite() => SortValue::Number(n),
        _ => SortValue::Text(text.to_string()),
    }
}

/// Pull the sortable value out of a rendered cell
pub fn extract(cell: &Cell, field_type: FieldType) -> SortValue {
    let text = cell.text.trim();
    match field_type {
        FieldType::Number | FieldType::Decimal => {
            if text == ABSENT_MARKER {
                SortValue::Absent
            } else {
                numeric_or_text(text)
            }
        }
        FieldType::Price => {
            if text == ABSENT_MARKER {
                return SortValue::Absent;
            }
            let stripped: String = text
                .chars()
                .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
                .collect();
            numeric_or_text(stripped.trim())
        }
        FieldType::Rating => SortValue::Number(cell.filled_stars as f64),
        FieldType::Boolean => match &cell.badge {
            Some(badge) => SortValue::Text(badge.trim().to_string()),
            None => SortValue::Absent,
        },
        FieldType::Text | FieldType::Select | FieldType::Date => {
            if text == ABSENT_MARKER {
                SortValue::Absent
            } else {
                SortValue::Text(text.to_string())
            }
        }
    }
}

/// Case-insensitive first so `apple` and `Apple` sit together; lowercase wins ties
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

/// Pairwise ordering. Absent values go last in both directions.
pub fn compare_values(a: &SortValue, b: &SortValue, ascending: bool) -> Ordering {
    let ordering = match (a, b) {
        (SortValue::Absent, SortValue::Absent) => return Ordering::Equal,
        (SortValue::Absent, _) => return Ordering::Greater,
        (_, SortValue::Absent) => return Ordering::Less,
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => locale_compare(&a.as_text(), &b.as_text()),
    };
    if ascending { ordering } else { ordering.reverse() }
}

/// Which column, if any, is sorted and in which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(usize),
    Descending(usize),
}

impl SortState {
    /// Same column flips, any other column starts ascending
    pub fn next(self, column: usize) -> Self {
        match self {
            SortState::Ascending(c) if c == column => SortState::Descending(c),
            _ => SortState::Ascending(column),
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(c) | SortState::Descending(c) => Some(*c),
        }
    }

    pub fn is_ascending(&self) -> bool {
        !matches!(self, SortState::Descending(_))
    }

    /// Header class for `column`; only the active column has one
    pub fn indicator(&self, column: usize) -> Option<&'static str> {
        match self {
            SortState::Ascending(c) if *c == column => Some("sort-asc"),
            SortState::Descending(c) if *c == column => Some("sort-desc"),
            _ => None,
        }
    }
}

/// Stable in-place sort of rows by one typed column
pub fn sort_rows<R, F>(rows: &mut OrderedList<R>, field_type: FieldType, ascending: bool, cell_of: F)
where
    R: Keyed,
    F: Fn(&R) -> Cell,
{
    rows.sort_by(|a, b| {
        compare_values(
            &extract(&cell_of(a), field_type),
            &extract(&cell_of(b), field_type),
            ascending,
        )
    });
}

/// Header-click driven sorter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSorter {
    state: SortState,
}

impl TableSorter {
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Sort by `column`, toggling direction if it is already the active one
    pub fn sort<R, F>(&mut self, rows: &mut OrderedList<R>, column: usize, field_type: FieldType, cell_of: F) -> SortState
    where
        R: Keyed,
        F: Fn(&R) -> Cell,
    {
        self.state = self.state.next(column);
        log::debug!("[SORT] column {} as {} -> {:?}", column, field_type.as_str(), self.state);
        sort_rows(rows, field_type, self.state.is_ascending(), cell_of);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        id: u32,
        cells: Vec<Cell>,
    }

    impl Keyed for Row {
        fn key(&self) -> u32 {
            self.id
        }
    }

    fn rows(texts: &[&str]) -> OrderedList<Row> {
        OrderedList::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| Row { id: i as u32, cells: vec![Cell::text(*t)] })
                .collect(),
        )
    }

    fn texts(rows: &OrderedList<Row>) -> Vec<String> {
        rows.iter().map(|r| r.cells[0].text.clone()).collect()
    }

    fn first_cell(r: &Row) -> Cell {
        r.cells[0].clone()
    }

    #[test]
    fn test_number_sort_absent_last() {
        let mut r = rows(&["-", "3", "1"]);
        sort_rows(&mut r, FieldType::Number, true, first_cell);
        assert_eq!(texts(&r), vec!["1", "3", "-"]);

        let mut r = rows(&["-", "3", "1"]);
        sort_rows(&mut r, FieldType::Number, false, first_cell);
        assert_eq!(texts(&r), vec!["3", "1", "-"]);
    }

    #[test]
    fn test_price_sort() {
        let mut r = rows(&["$10.50", "-", "$3"]);
        sort_rows(&mut r, FieldType::Price, true, first_cell);
        assert_eq!(texts(&r), vec!["$3", "$10.50", "-"]);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let mut r = rows(&["10", "9", "100", "9.5"]);
        sort_rows(&mut r, FieldType::Decimal, true, first_cell);
        assert_eq!(texts(&r), vec!["9", "9.5", "10", "100"]);
    }

    #[test]
    fn test_stable_ties_and_absent_pairs() {
        let mut r = rows(&["-", "b", "-", "a", "b"]);
        sort_rows(&mut r, FieldType::Text, true, first_cell);
        assert_eq!(r.ids(), vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_text_case_insensitive() {
        let mut r = rows(&["banana", "Apple", "cherry", "apple"]);
        sort_rows(&mut r, FieldType::Text, true, first_cell);
        assert_eq!(texts(&r), vec!["apple", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_rating_and_boolean_extraction() {
        let five = Cell::render(FieldType::Rating, Some("5"));
        let none = Cell::render(FieldType::Rating, None);
        assert_eq!(extract(&five, FieldType::Rating), SortValue::Number(5.0));
        assert_eq!(extract(&none, FieldType::Rating), SortValue::Number(0.0));

        let yes = Cell::render(FieldType::Boolean, Some("true"));
        let missing = Cell::render(FieldType::Boolean, Some(""));
        assert_eq!(extract(&yes, FieldType::Boolean), SortValue::Text("Yes".to_string()));
        assert_eq!(extract(&missing, FieldType::Boolean), SortValue::Absent);
    }

    #[test]
    fn test_render_price_and_placeholder() {
        assert_eq!(Cell::render(FieldType::Price, Some("12.99")).text, "$12.99");
        assert_eq!(Cell::render(FieldType::Price, Some("€5")).text, "€5");
        assert_eq!(Cell::render(FieldType::Number, Some(" ")).text, "-");
        assert_eq!(Cell::render(FieldType::Rating, Some("9")).filled_stars, 5);
    }

    #[test]
    fn test_mixed_number_and_text_compare_as_strings() {
        let n = SortValue::Number(3.0);
        let t = SortValue::Text("n/a".to_string());
        assert_eq!(compare_values(&n, &t, true), Ordering::Less);
        assert_eq!(compare_values(&n, &t, false), Ordering::Greater);
    }

    #[test]
    fn test_dash_price_is_absent() {
        let cell = Cell::render(FieldType::Price, Some("-"));
        assert_eq!(cell.text, "-");
        assert_eq!(extract(&cell, FieldType::Price), SortValue::Absent);

        let mut r = OrderedList::new(
            [Some("-"), Some("12"), Some("abc"), Some("3")]
                .iter()
                .enumerate()
                .map(|(i, raw)| Row { id: i as u32, cells: vec![Cell::render(FieldType::Price, *raw)] })
                .collect(),
        );
        sort_rows(&mut r, FieldType::Price, true, first_cell);
        assert_eq!(texts(&r), vec!["$3", "$12", "$abc", "-"]);
    }

    #[test]
    fn test_huge_exponents_do_not_break_ordering() {
        let values: Vec<SortValue> = ["-1e999", "-3", "-a"]
            .iter()
            .map(|t| extract(&Cell::text(*t), FieldType::Number))
            .collect();
        assert_eq!(values[0], SortValue::Text("-1e999".to_string()));

        // transitive in both directions
        for ascending in [true, false] {
            let ab = compare_values(&values[0], &values[1], ascending);
            let bc = compare_values(&values[1], &values[2], ascending);
            let ac = compare_values(&values[0], &values[2], ascending);
            if ab == bc {
                assert_eq!(ac, ab);
            }
        }

        let mut r = rows(&["-a", "-1e999", "-3", "1e999", "7"]);
        sort_rows(&mut r, FieldType::Number, true, first_cell);
        assert_eq!(texts(&r), vec!["-1e999", "-3", "-a", "1e999", "7"]);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12 GB"), Some(12.0));
        assert_eq!(parse_float_prefix("  -1.5e2x"), Some(-150.0));
        assert_eq!(parse_float_prefix("3e"), Some(3.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_sorter_toggles_direction() {
        let mut sorter = TableSorter::default();
        let mut r = rows(&["2", "1", "3"]);
        assert_eq!(sorter.sort(&mut r, 0, FieldType::Number, first_cell), SortState::Ascending(0));
        assert_eq!(texts(&r), vec!["1", "2", "3"]);
        assert_eq!(sorter.sort(&mut r, 0, FieldType::Number, first_cell), SortState::Descending(0));
        assert_eq!(texts(&r), vec!["3", "2", "1"]);
        assert_eq!(sorter.sort(&mut r, 0, FieldType::Number, first_cell), SortState::Ascending(0));
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let state = SortState::Unsorted.next(1).next(1);
        assert_eq!(state, SortState::Descending(1));
        assert_eq!(state.next(2), SortState::Ascending(2));
        assert_eq!(state.indicator(1), Some("sort-desc"));
        assert_eq!(state.next(2).indicator(1), None);
        assert_eq!(state.next(2).indicator(2), Some("sort-asc"));
    }
}
