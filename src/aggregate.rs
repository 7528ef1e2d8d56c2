use std::cmp::Ordering;

use crate::types::{ArtistSummary, Page, SortColumn, SortDirection, Totals};

pub fn compute_totals(list: &[ArtistSummary]) -> Totals {
    Totals {
        total_artists: list.len(),
        total_tracks: list.iter().map(|a| a.count).sum(),
    }
}

/// Returns the `n` artists with the most tracks.
///
/// `sort_by` is stable, so artists with equal counts keep their input order.
pub fn top_n(list: &[ArtistSummary], n: usize) -> Vec<ArtistSummary> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted.truncate(n);
    sorted
}

/// Filters by a case-insensitive substring of the artist name and sorts the
/// result. An empty or blank query keeps every artist.
pub fn filter_and_sort(
    list: &[ArtistSummary],
    query: &str,
    column: SortColumn,
    direction: SortDirection,
) -> Vec<ArtistSummary> {
    let needle = query.trim().to_lowercase();
    let mut result: Vec<ArtistSummary> = list
        .iter()
        .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Name => compare_names(&a.name, &b.name),
            SortColumn::Count => a.count.cmp(&b.count),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    result
}

/// Orders names the way a reader expects: case-folded first, then the raw
/// string so "abba" and "ABBA" still have a fixed order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Returns the 1-indexed `page` of `list`. Page 0, a page past the end and a
/// zero page size all yield an empty slice.
pub fn paginate(list: &[ArtistSummary], page: usize, page_size: usize) -> &[ArtistSummary] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Filter, sort and paginate in one step, the way the dashboard table reads it.
pub fn build_page(
    list: &[ArtistSummary],
    query: &str,
    column: SortColumn,
    direction: SortDirection,
    page: usize,
    page_size: usize,
) -> Page {
    let filtered = filter_and_sort(list, query, column, direction);
    Page {
        items: paginate(&filtered, page, page_size).to_vec(),
        page,
        page_size,
        total_pages: page_count(filtered.len(), page_size),
        total_items: filtered.len(),
    }
}
