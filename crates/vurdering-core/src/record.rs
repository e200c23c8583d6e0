use serde::Serialize;

/// One property-valuation row from the registry's result table.
///
/// Numeric columns that cannot be read are `None` rather than an error; the
/// source occasionally renders placeholders in place of amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Option<i64>,
    pub house_number: String,
    pub floor: String,
    #[serde(rename = "type")]
    pub property_type: String,
    /// Land value in DKK.
    pub land_value: Option<i64>,
    /// Property value in DKK.
    pub house_value: Option<i64>,
}

impl Record {
    /// Maps trimmed cell texts in column order: id, house number, floor,
    /// type, land value, house value. Missing trailing cells read as empty.
    #[must_use]
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cell = |i: usize| cells.get(i).map_or("", |c| c.as_ref().trim());

        Self {
            id: parse_leading_int(cell(0)),
            house_number: cell(1).to_owned(),
            floor: cell(2).to_owned(),
            property_type: cell(3).to_owned(),
            land_value: parse_valuation(cell(4)),
            house_value: parse_valuation(cell(5)),
        }
    }
}

/// Parses an amount written with `.` as the thousands separator
/// (`"1.250.000"` → `1250000`).
#[must_use]
pub fn parse_valuation(text: &str) -> Option<i64> {
    let stripped: String = text.chars().filter(|&c| c != '.').collect();
    parse_leading_int(&stripped)
}

/// Lenient integer parse: skips leading whitespace, accepts one sign, then
/// reads the leading run of ASCII digits and ignores whatever follows.
///
/// Returns `None` when there are no digits or the value overflows `i64`.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
