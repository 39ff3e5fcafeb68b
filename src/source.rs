//! Table data sources.
//!
//! A [`TableSource`] hands the printer an optional header sequence and an
//! optional sequence of rows. Both are pulled lazily and exactly once per
//! print call; because the accessors take `&self`, a source can be printed
//! any number of times.

use std::cell::RefCell;

/// One row of optional cell values.
pub type RowValues = Vec<Option<String>>;

/// Iterator over header values.
pub type HeaderIter<'a> = Box<dyn Iterator<Item = Option<String>> + 'a>;

/// Iterator over rows.
pub type RowIter<'a> = Box<dyn Iterator<Item = RowValues> + 'a>;

/// Supplies the headers and rows of a table.
///
/// Returning `None` from either accessor is the same as returning an empty
/// sequence.
pub trait TableSource {
    /// Header values, in column order.
    fn headers(&self) -> Option<HeaderIter<'_>>;

    /// Body rows, in their original order.
    fn rows(&self) -> Option<RowIter<'_>>;
}

/// Conversion into an optional cell value.
///
/// `None` marks an absent value, rendered as the printer's null value.
pub trait IntoCellValue {
    fn into_cell_value(self) -> Option<String>;
}

impl IntoCellValue for String {
    fn into_cell_value(self) -> Option<String> {
        Some(self)
    }
}

impl IntoCellValue for &str {
    fn into_cell_value(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoCellValue for &String {
    fn into_cell_value(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoCellValue> IntoCellValue for Option<T> {
    fn into_cell_value(self) -> Option<String> {
        self.and_then(IntoCellValue::into_cell_value)
    }
}

/// Collect any iterable of cell-like values into a row.
pub fn row_values<I>(values: I) -> RowValues
where
    I: IntoIterator,
    I::Item: IntoCellValue,
{
    values
        .into_iter()
        .map(IntoCellValue::into_cell_value)
        .collect()
}

/// A fully materialized table source.
///
/// # Examples
///
/// ```
/// use table_printer::source::TableData;
///
/// let data = TableData::new()
///     .with_headers(["firstName", "lastName"])
///     .with_row(["john", "doe"])
///     .with_row([Some("joe"), None]);
/// assert_eq!(data.row_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    headers: Option<RowValues>,
    rows: Option<Vec<RowValues>>,
}

impl TableData {
    /// Create a source with no headers and no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from headers and rows.
    pub fn from_parts<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: IntoCellValue,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: IntoCellValue,
    {
        Self {
            headers: Some(row_values(headers)),
            rows: Some(rows.into_iter().map(row_values).collect()),
        }
    }

    /// Set the headers (builder pattern).
    #[must_use]
    pub fn with_headers<H>(mut self, headers: H) -> Self
    where
        H: IntoIterator,
        H::Item: IntoCellValue,
    {
        self.headers = Some(row_values(headers));
        self
    }

    /// Append a row (builder pattern).
    #[must_use]
    pub fn with_row<I>(mut self, row: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCellValue,
    {
        self.add_row(row);
        self
    }

    /// Append a row.
    pub fn add_row<I>(&mut self, row: I)
    where
        I: IntoIterator,
        I::Item: IntoCellValue,
    {
        self.rows.get_or_insert_with(Vec::new).push(row_values(row));
    }

    /// Number of rows held, before any row window is applied.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.as_ref().map_or(0, Vec::len)
    }
}

impl TableSource for TableData {
    fn headers(&self) -> Option<HeaderIter<'_>> {
        self.headers
            .as_ref()
            .map(|headers| Box::new(headers.iter().cloned()) as HeaderIter<'_>)
    }

    fn rows(&self) -> Option<RowIter<'_>> {
        self.rows
            .as_ref()
            .map(|rows| Box::new(rows.iter().cloned()) as RowIter<'_>)
    }
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn headers(&self) -> Option<HeaderIter<'_>> {
        (**self).headers()
    }

    fn rows(&self) -> Option<RowIter<'_>> {
        (**self).rows()
    }
}

/// A single-use source over caller-supplied iterators.
///
/// Headers and rows are pulled lazily while the grid is built, so a row
/// iterator is only advanced as far as the row window needs. Each accessor
/// hands out its iterator once; later calls return `None`.
pub struct IterSource<H, R> {
    headers: RefCell<Option<H>>,
    rows: RefCell<Option<R>>,
}

impl<H, R> IterSource<H, R>
where
    H: Iterator,
    R: Iterator,
{
    /// Wrap a header sequence and a row sequence.
    #[must_use]
    pub fn new<HI, RI>(headers: HI, rows: RI) -> Self
    where
        HI: IntoIterator<IntoIter = H>,
        RI: IntoIterator<IntoIter = R>,
    {
        Self {
            headers: RefCell::new(Some(headers.into_iter())),
            rows: RefCell::new(Some(rows.into_iter())),
        }
    }
}

impl<H, R> TableSource for IterSource<H, R>
where
    H: Iterator,
    H::Item: IntoCellValue,
    R: Iterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: IntoCellValue,
{
    fn headers(&self) -> Option<HeaderIter<'_>> {
        let headers = self.headers.borrow_mut().take()?;
        Some(Box::new(headers.map(IntoCellValue::into_cell_value)))
    }

    fn rows(&self) -> Option<RowIter<'_>> {
        let rows = self.rows.borrow_mut().take()?;
        Some(Box::new(rows.map(row_values)))
    }
}
