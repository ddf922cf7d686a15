//! View pipeline: filter → sort → paginate.
//!
//! Pure derivation from a row store snapshot. Nothing here mutates rows;
//! the output borrows from the input slice.

use crate::types::{CellValue, Row, SortDirection, SortKey};
use std::cmp::Ordering;

/// Parameters for one derivation of the visible page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewQuery {
    pub search: String,
    pub sort: Option<SortKey>,
    /// 0-indexed page
    pub page: usize,
    pub page_size: usize,
}

/// The visible page plus the size of the filtered sequence
#[derive(Clone, Debug, PartialEq)]
pub struct ViewPage<'a> {
    pub rows: Vec<&'a Row>,
    /// Filtered count before pagination
    pub total: usize,
}

/// Run the full pipeline.
pub fn compute_view<'a>(rows: &'a [Row], query: &ViewQuery) -> ViewPage<'a> {
    let sorted = sorted_view(rows, &query.search, query.sort.as_ref());
    let total = sorted.len();
    let page = paginate(&sorted, query.page, query.page_size);

    tracing::debug!(
        total,
        page = query.page,
        shown = page.len(),
        "computed view"
    );
    ViewPage { rows: page, total }
}

/// Filter and sort without paginating; this is what exports see.
pub fn sorted_view<'a>(rows: &'a [Row], search: &str, sort: Option<&SortKey>) -> Vec<&'a Row> {
    let mut filtered = filter_rows(rows, search);
    sort_rows(&mut filtered, sort);
    filtered
}

/// Keep rows where any value contains the search term, case-insensitively.
pub fn filter_rows<'a>(rows: &'a [Row], search: &str) -> Vec<&'a Row> {
    if search.is_empty() {
        return rows.iter().collect();
    }
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| {
            row.record
                .values()
                .any(|value| value.to_string().to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by the key's column; no key leaves the order untouched.
pub fn sort_rows(rows: &mut [&Row], sort: Option<&SortKey>) {
    let Some(key) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.record.get(&key.column), b.record.get(&key.column));
        match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Slice `[page * page_size, page * page_size + page_size)`, clamped.
pub fn paginate<'a>(rows: &[&'a Row], page: usize, page_size: usize) -> Vec<&'a Row> {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Ascending comparison of two cells.
///
/// Cells that read as numbers come first, ordered numerically. The rest
/// follow as text, ordered case-insensitively with case-sensitive ties.
/// Absent cells compare as empty text.
pub fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    let a_num = a.and_then(CellValue::as_number);
    let b_num = b.and_then(CellValue::as_number);
    match (a_num, b_num) {
        // as_number never yields NaN
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let a_text = a.map(|v| v.to_string()).unwrap_or_default();
            let b_text = b.map(|v| v.to_string()).unwrap_or_default();
            a_text
                .to_lowercase()
                .cmp(&b_text.to_lowercase())
                .then_with(|| a_text.cmp(&b_text))
        }
    }
}
