use tabled::{Table, settings::Style};

use crate::types::{ArtistSummary, RangeQuery, Theme};

pub const RANGE_ORDER_MESSAGE: &str = "Maximum must be greater than or equal to minimum.";

/// Checks the two bounds of a range form against each other.
///
/// Only an inverted range is invalid. A range with no bounds passes here;
/// the deletion workflow refuses it separately.
pub fn validate_range(range: &RangeQuery) -> Result<(), String> {
    match (range.min, range.max) {
        (Some(min), Some(max)) if max < min => Err(RANGE_ORDER_MESSAGE.to_string()),
        _ => Ok(()),
    }
}

/// Human-readable scope of a range, or `None` when neither bound is set.
pub fn describe_range(range: &RangeQuery) -> Option<String> {
    match (range.min, range.max) {
        (Some(min), Some(max)) => Some(format!("{} to {} tracks", min, max)),
        (Some(min), None) => Some(format!("at least {} tracks", min)),
        (None, Some(max)) => Some(format!("at most {} tracks", max)),
        (None, None) => None,
    }
}

/// Renders a horizontal bar chart, one row per artist, scaled so the largest
/// count fills `width` cells.
pub fn render_bar_chart(items: &[ArtistSummary], width: usize) -> String {
    let Some(max) = items.iter().map(|a| a.count).max() else {
        return String::new();
    };

    let label_width = items
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(0);

    items
        .iter()
        .map(|a| {
            let cells = if max == 0 {
                0
            } else {
                ((a.count as f64 / max as f64) * width as f64).round() as usize
            };
            format!(
                "{name:<label_width$} │{bar} {count}",
                name = a.name,
                label_width = label_width,
                bar = "█".repeat(cells),
                count = a.count
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Applies the table style that goes with the stored theme preference.
pub fn styled_table(table: &mut Table, theme: Theme) -> &mut Table {
    match theme {
        Theme::Dark => table.with(Style::rounded()),
        Theme::Light => table.with(Style::ascii()),
    }
}

/// Resolves a command argument to an artist, by exact id first and then by
/// case-insensitive name.
pub fn find_artist<'a>(list: &'a [ArtistSummary], id_or_name: &str) -> Option<&'a ArtistSummary> {
    list.iter().find(|a| a.id == id_or_name).or_else(|| {
        let needle = id_or_name.trim().to_lowercase();
        list.iter().find(|a| a.name.to_lowercase() == needle)
    })
}
