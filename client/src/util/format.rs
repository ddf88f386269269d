//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for missing values.
pub const EMPTY_CELL: &str = "—";

/// Optional text, or the placeholder when absent or blank.
pub fn text(value: Option<&str>) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(EMPTY_CELL).to_owned()
}

pub fn number<N: ToString>(value: Option<N>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_owned(), |n| n.to_string())
}

pub fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_owned()
}

/// Date part of an ISO-8601 date or datetime.
pub fn date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw.split(['T', ' ']).next().unwrap_or(raw).to_owned(),
        None => EMPTY_CELL.to_owned(),
    }
}

/// Human-readable byte count.
pub fn bytes(size: Option<i64>) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let Some(size) = size.filter(|s| *s >= 0) else {
        return EMPTY_CELL.to_owned();
    };
    #[allow(clippy::cast_precision_loss)]
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 { format!("{size} B") } else { format!("{value:.1} {}", UNITS[unit]) }
}

/// `"full_time"` → `"Full time"`.
pub fn humanize(value: Option<&str>) -> String {
    let raw = text(value);
    if raw == EMPTY_CELL {
        return raw;
    }
    crate::state::action::capitalize(&raw.replace('_', " "))
}
