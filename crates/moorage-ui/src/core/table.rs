//! Generic table presentation model: per-column filtering, single-column
//! stable sorting, and clamped pagination over an in-memory row set.
//!
//! # Design
//! - The source rows are never mutated; filtering and sorting derive a view.
//! - Cell values are typed ([`CellValue`]) so numeric and date columns sort
//!   by value, not by their formatted strings.
//! - Changing a filter or the sort keeps the current page index and clamps
//!   it against the new view instead of resetting to the first page.

use crate::core::format::{bytes_to_size, format_datetime};
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Fixed page-size choices offered by the pagination controls.
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// Typed derived value of one cell, with a total order across variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    /// Free-form text, ordered lexicographically.
    Text(String),
    /// Plain number.
    Number(u64),
    /// Byte count, displayed via [`bytes_to_size`].
    Bytes(u64),
    /// Timestamp; `None` renders the unknown-date fallback and sorts first.
    Date(Option<DateTime<FixedOffset>>),
}

impl CellValue {
    /// Parse an optional RFC 3339 string into a date cell.
    #[must_use]
    pub fn date(raw: Option<&str>) -> Self {
        Self::Date(raw.and_then(|r| DateTime::parse_from_rfc3339(r).ok()))
    }

    /// String rendering used for display and substring filtering.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
            Self::Bytes(value) => bytes_to_size(*value, 0),
            Self::Date(Some(value)) => format_datetime(value),
            Self::Date(None) => "Unknown date".to_string(),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Bytes(_) => 2,
            Self::Date(_) => 3,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) | (Self::Bytes(a), Self::Bytes(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort direction for the active sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The single active sort, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    /// Column id being sorted.
    pub column: &'static str,
    /// Current direction.
    pub direction: SortDirection,
}

/// Column configuration: how to derive a cell from a row and which table
/// features the column participates in.
#[derive(Clone, Copy, Debug)]
pub struct Column<R> {
    /// Stable column identifier.
    pub id: &'static str,
    /// Header label.
    pub header: &'static str,
    /// Derives the typed cell value from a row.
    pub accessor: fn(&R) -> CellValue,
    /// Whether the column offers a substring filter input.
    pub filterable: bool,
    /// Whether clicking the header toggles sorting.
    pub sortable: bool,
}

/// Presentation state for one table instance.
#[derive(Clone, Debug)]
pub struct TableModel<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    filters: BTreeMap<&'static str, String>,
    sort: Option<SortSpec>,
    page_index: usize,
    page_size: usize,
}

impl<R> TableModel<R> {
    /// Build a model over the given columns and rows, starting unfiltered,
    /// unsorted, on the first page with the smallest page size.
    #[must_use]
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            filters: BTreeMap::new(),
            sort: None,
            page_index: 0,
            page_size: PAGE_SIZES[0],
        }
    }

    /// The configured columns.
    #[must_use]
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// The unfiltered source rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace the source rows wholesale; presentation state is kept.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Current filter text for a column; empty means no constraint.
    #[must_use]
    pub fn filter_value(&self, column: &'static str) -> &str {
        self.filters.get(column).map_or("", String::as_str)
    }

    /// Set or clear (empty value) the substring filter for a column.
    pub fn set_filter(&mut self, column: &'static str, value: &str) {
        if value.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column, value.to_string());
        }
    }

    /// The active sort, if any.
    #[must_use]
    pub const fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Cycle the sort for a column: unsorted, ascending, descending,
    /// unsorted. Switching columns starts ascending on the new column.
    pub fn toggle_sort(&mut self, column: &'static str) {
        if !self
            .columns
            .iter()
            .any(|col| col.id == column && col.sortable)
        {
            return;
        }
        self.sort = match self.sort {
            Some(spec) if spec.column == column => match spec.direction {
                SortDirection::Ascending => Some(SortSpec {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortSpec {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    fn column(&self, id: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|col| col.id == id)
    }

    fn matches_filters(&self, row: &R) -> bool {
        self.filters.iter().all(|(column, needle)| {
            self.column(column).is_none_or(|col| {
                (col.accessor)(row)
                    .display()
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            })
        })
    }

    /// The filtered, sorted view over the source rows. Ties keep their
    /// insertion order (stable sort).
    #[must_use]
    pub fn view(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| self.matches_filters(row))
            .collect();
        if let Some(spec) = self.sort
            && let Some(col) = self.column(spec.column)
        {
            let accessor = col.accessor;
            rows.sort_by(|a, b| {
                let ordering = accessor(a).cmp(&accessor(b));
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// Number of rows in the current view.
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view().len()
    }

    /// Number of pages in the current view; never zero.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.view_len().div_ceil(self.page_size).max(1)
    }

    /// The effective page index, clamped against the current view.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page_index.min(self.page_count() - 1)
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Select a page size from [`PAGE_SIZES`]; other values are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
        }
    }

    /// Jump to a page, clamping negative and past-the-end requests into
    /// the valid range.
    pub fn goto_page(&mut self, index: i64) {
        let last = self.page_count() - 1;
        let clamped = usize::try_from(index.max(0)).unwrap_or(0).min(last);
        self.page_index = clamped;
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Jump to the last page of the current view.
    pub fn last_page(&mut self) {
        self.page_index = self.page_count() - 1;
    }

    /// Advance one page, saturating at the last page.
    pub fn next_page(&mut self) {
        let next = self.current_page() + 1;
        self.goto_page(i64::try_from(next).unwrap_or(i64::MAX));
    }

    /// Go back one page, saturating at the first page.
    pub fn prev_page(&mut self) {
        self.page_index = self.current_page().saturating_sub(1);
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.current_page() > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.current_page() + 1 < self.page_count()
    }

    /// Rows of the current page, in view order.
    #[must_use]
    pub fn page_rows(&self) -> Vec<&R> {
        let view = self.view();
        let start = (self.current_page() * self.page_size).min(view.len());
        let end = (start + self.page_size).min(view.len());
        view[start..end].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct FileRow {
        name: &'static str,
        size: u64,
        created: &'static str,
    }

    fn name_cell(row: &FileRow) -> CellValue {
        CellValue::Text(row.name.to_string())
    }

    fn size_cell(row: &FileRow) -> CellValue {
        CellValue::Bytes(row.size)
    }

    fn created_cell(row: &FileRow) -> CellValue {
        CellValue::date(Some(row.created))
    }

    fn columns() -> Vec<Column<FileRow>> {
        vec![
            Column {
                id: "name",
                header: "Name",
                accessor: name_cell,
                filterable: true,
                sortable: true,
            },
            Column {
                id: "size",
                header: "Size",
                accessor: size_cell,
                filterable: true,
                sortable: true,
            },
            Column {
                id: "created",
                header: "Created At",
                accessor: created_cell,
                filterable: false,
                sortable: true,
            },
        ]
    }

    fn rows() -> Vec<FileRow> {
        vec![
            FileRow {
                name: "beta.car",
                size: 4096,
                created: "2023-03-01T00:00:00Z",
            },
            FileRow {
                name: "alpha.car",
                size: 1024,
                created: "2023-01-01T00:00:00Z",
            },
            FileRow {
                name: "delta.car",
                size: 4096,
                created: "2023-02-01T00:00:00Z",
            },
            FileRow {
                name: "gamma.car",
                size: 2048,
                created: "2023-04-01T00:00:00Z",
            },
        ]
    }

    fn names(model: &TableModel<FileRow>) -> Vec<&'static str> {
        model.view().iter().map(|row| row.name).collect()
    }

    #[test]
    fn sorting_is_stable_and_reversible() {
        let mut model = TableModel::new(columns(), rows());
        model.toggle_sort("size");
        // Equal sizes keep insertion order.
        assert_eq!(names(&model), vec!["alpha.car", "gamma.car", "beta.car", "delta.car"]);
        model.toggle_sort("size");
        // Descending reverses distinct keys; ties still keep insertion order.
        assert_eq!(names(&model), vec!["beta.car", "delta.car", "gamma.car", "alpha.car"]);
        model.toggle_sort("size");
        assert_eq!(model.sort_spec(), None);
        assert_eq!(names(&model), vec!["beta.car", "alpha.car", "delta.car", "gamma.car"]);
    }

    #[test]
    fn date_columns_sort_by_timestamp() {
        let mut model = TableModel::new(columns(), rows());
        model.toggle_sort("created");
        assert_eq!(names(&model), vec!["alpha.car", "delta.car", "beta.car", "gamma.car"]);
    }

    #[test]
    fn filters_and_unfilters_without_mutating_source() {
        let mut model = TableModel::new(columns(), rows());
        let before = model.rows().to_vec();
        model.set_filter("name", "ta.car");
        assert_eq!(names(&model), vec!["beta.car", "delta.car"]);
        model.set_filter("size", "2 KB");
        assert_eq!(names(&model), Vec::<&str>::new());
        model.set_filter("name", "");
        assert_eq!(names(&model), vec!["gamma.car"]);
        model.set_filter("name", "");
        model.set_filter("size", "");
        assert_eq!(names(&model), vec!["beta.car", "alpha.car", "delta.car", "gamma.car"]);
        assert_eq!(model.rows(), before.as_slice());
    }

    #[test]
    fn filter_matching_is_case_insensitive() {
        let mut model = TableModel::new(columns(), rows());
        model.set_filter("name", "ALPHA");
        assert_eq!(names(&model), vec!["alpha.car"]);
    }

    #[test]
    fn page_jumps_clamp_at_both_ends() {
        let mut model = TableModel::new(columns(), rows());
        model.goto_page(500);
        assert_eq!(model.current_page(), 0);
        let many: Vec<FileRow> = (0..45)
            .map(|_| FileRow {
                name: "bulk.car",
                size: 1,
                created: "2023-01-01T00:00:00Z",
            })
            .collect();
        model.set_rows(many);
        assert_eq!(model.page_count(), 5);
        model.goto_page(500);
        assert_eq!(model.current_page(), 4);
        model.goto_page(-3);
        assert_eq!(model.current_page(), 0);
    }

    #[test]
    fn pagination_navigation_saturates() {
        let many: Vec<FileRow> = (0..25)
            .map(|_| FileRow {
                name: "bulk.car",
                size: 1,
                created: "2023-01-01T00:00:00Z",
            })
            .collect();
        let mut model = TableModel::new(columns(), many);
        assert!(!model.can_prev());
        model.prev_page();
        assert_eq!(model.current_page(), 0);
        model.next_page();
        model.next_page();
        assert_eq!(model.current_page(), 2);
        assert!(!model.can_next());
        model.next_page();
        assert_eq!(model.current_page(), 2);
        model.first_page();
        assert_eq!(model.current_page(), 0);
        model.last_page();
        assert_eq!(model.current_page(), 2);
        assert_eq!(model.page_rows().len(), 5);
    }

    #[test]
    fn filtering_keeps_the_page_index_clamped() {
        let mut rows: Vec<FileRow> = (0..30)
            .map(|_| FileRow {
                name: "bulk.car",
                size: 1,
                created: "2023-01-01T00:00:00Z",
            })
            .collect();
        rows.push(FileRow {
            name: "needle.car",
            size: 1,
            created: "2023-01-01T00:00:00Z",
        });
        let mut model = TableModel::new(columns(), rows);
        model.last_page();
        assert_eq!(model.current_page(), 3);
        model.set_filter("name", "needle");
        assert_eq!(model.current_page(), 0);
        assert_eq!(model.page_rows().len(), 1);
    }

    #[test]
    fn page_size_only_accepts_known_options() {
        let mut model = TableModel::new(columns(), rows());
        model.set_page_size(20);
        assert_eq!(model.page_size(), 20);
        model.set_page_size(7);
        assert_eq!(model.page_size(), 20);
    }

    #[test]
    fn unsortable_columns_are_ignored() {
        let mut cols = columns();
        cols[0].sortable = false;
        let mut model = TableModel::new(cols, rows());
        model.toggle_sort("name");
        assert_eq!(model.sort_spec(), None);
    }

    #[test]
    fn cell_values_display_and_order() {
        assert_eq!(CellValue::Bytes(1536).display(), "2 KB");
        assert_eq!(CellValue::Number(7).display(), "7");
        assert_eq!(CellValue::date(None).display(), "Unknown date");
        assert_eq!(CellValue::date(Some("not a date")).display(), "Unknown date");
        assert!(CellValue::Number(2) < CellValue::Number(10));
        assert!(CellValue::date(None) < CellValue::date(Some("2023-01-01T00:00:00Z")));
    }
}
