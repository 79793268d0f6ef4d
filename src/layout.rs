//! Weekly timesheet layout: which cell holds what, with which style.
//!
//! Nothing in here touches a workbook. `generate` produces a `SheetSpec` that
//! `render` hands to umya-spreadsheet.

use tracing::debug;

use crate::cell_ref::{cell_ref, range_ref};
use crate::styles::StyleId;

pub const SHEET_NAME: &str = "Timesheet";
pub const TITLE_TEXT: &str = "Weekly Timesheet";

/// Number of blank, formula-bearing data rows.
pub const DATA_ROWS: usize = 10;
/// 0-based index of the first data row (title and header sit above it).
pub const FIRST_DATA_ROW: usize = 2;

const FIRST_DAY_COLUMN: usize = 2;
const LAST_DAY_COLUMN: usize = 8;
const TOTAL_COLUMN: usize = 9;
const OVERTIME_COLUMN: usize = 10;
const REGULAR_COLUMN: usize = 11;

pub const TITLES: [&str; 12] = [
    "Person",
    "ID",
    "Mon",
    "Tue",
    "Wed",
    "Thu",
    "Fri",
    "Sat",
    "Sun",
    "Total\nHrs",
    "Overtime\nHrs",
    "Regular\nHrs",
];

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Empty, Into::into)
    }
}

/// The two bundled sample rows.
pub fn sample_data() -> Vec<Vec<CellValue>> {
    let hours = |h: [Option<f64>; 7]| h.into_iter().map(CellValue::from);
    vec![
        ["Yegor Kozlov", "YK"]
            .into_iter()
            .map(CellValue::from)
            .chain(hours([
                Some(5.0),
                Some(8.0),
                Some(10.0),
                Some(5.0),
                Some(5.0),
                Some(7.0),
                Some(6.0),
            ]))
            .collect(),
        ["Gisella Bronzetti", "GB"]
            .into_iter()
            .map(CellValue::from)
            .chain(hours([
                Some(4.0),
                Some(3.0),
                Some(1.0),
                Some(3.5),
                None,
                None,
                Some(4.0),
            ]))
            .collect(),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Value(CellValue),
    /// Formula text without the leading `=`.
    Formula(String),
}

impl CellContent {
    pub fn empty() -> Self {
        CellContent::Value(CellValue::Empty)
    }

    pub fn formula(&self) -> Option<&str> {
        match self {
            CellContent::Formula(f) => Some(f),
            CellContent::Value(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    pub column: usize,
    pub content: CellContent,
    pub style: StyleId,
}

impl CellSpec {
    fn new(column: usize, content: CellContent, style: StyleId) -> Self {
        Self {
            column,
            content,
            style,
        }
    }
}

/// Rectangular merge, all bounds 0-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRegion {
    pub first_row: usize,
    pub last_row: usize,
    pub first_column: usize,
    pub last_column: usize,
}

impl MergeRegion {
    pub fn to_a1(&self) -> String {
        range_ref(
            (self.first_column, self.first_row + 1),
            (self.last_column, self.last_row + 1),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowSpec {
    /// 0-based row index.
    pub index: usize,
    pub height_points: Option<f64>,
    pub cells: Vec<CellSpec>,
    pub merge: Option<MergeRegion>,
}

impl RowSpec {
    fn new(index: usize, height_points: Option<f64>) -> Self {
        Self {
            index,
            height_points,
            cells: Vec::new(),
            merge: None,
        }
    }

    /// 1-based row number as spreadsheet software shows it.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn cell(&self, column: usize) -> Option<&CellSpec> {
        self.cells.iter().find(|c| c.column == column)
    }

    pub fn cell_mut(&mut self, column: usize) -> Option<&mut CellSpec> {
        self.cells.iter_mut().find(|c| c.column == column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetSpec {
    pub name: String,
    pub rows: Vec<RowSpec>,
    /// `(column, width in characters)`.
    pub column_widths: Vec<(usize, f64)>,
    pub landscape: bool,
}

impl SheetSpec {
    pub fn row(&self, index: usize) -> Option<&RowSpec> {
        self.rows.iter().find(|r| r.index == index)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellSpec> {
        self.row(row).and_then(|r| r.cell(column))
    }

    pub fn merges(&self) -> impl Iterator<Item = &MergeRegion> {
        self.rows.iter().filter_map(|r| r.merge.as_ref())
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }
}

pub fn build_title_row(column_count: usize) -> RowSpec {
    assert!(column_count > 0, "title row needs at least one column");
    let mut row = RowSpec::new(0, Some(45.0));
    row.cells.push(CellSpec::new(
        0,
        CellContent::Value(TITLE_TEXT.into()),
        StyleId::Title,
    ));
    row.merge = Some(MergeRegion {
        first_row: 0,
        last_row: 0,
        first_column: 0,
        last_column: column_count - 1,
    });
    row
}

pub fn build_header_row(titles: &[&str]) -> RowSpec {
    let mut row = RowSpec::new(1, Some(40.0));
    row.cells = titles
        .iter()
        .enumerate()
        .map(|(j, title)| CellSpec::new(j, CellContent::Value((*title).into()), StyleId::Header))
        .collect();
    row
}

pub fn build_data_rows(titles: &[&str], row_count: usize) -> Vec<RowSpec> {
    assert!(
        titles.len() > REGULAR_COLUMN,
        "timesheet needs at least {} columns, got {}",
        REGULAR_COLUMN + 1,
        titles.len()
    );

    (0..row_count)
        .map(|i| {
            let mut row = RowSpec::new(FIRST_DATA_ROW + i, None);
            let n = row.number();
            row.cells = (0..titles.len())
                .map(|j| match j {
                    TOTAL_COLUMN => {
                        let days = range_ref((FIRST_DAY_COLUMN, n), (LAST_DAY_COLUMN, n));
                        CellSpec::new(j, CellContent::Formula(format!("SUM({days})")), StyleId::Formula)
                    }
                    REGULAR_COLUMN => CellSpec::new(
                        j,
                        CellContent::Formula(format!(
                            "{}-{}",
                            cell_ref(TOTAL_COLUMN, n),
                            cell_ref(OVERTIME_COLUMN, n)
                        )),
                        StyleId::Formula,
                    ),
                    _ => CellSpec::new(j, CellContent::empty(), StyleId::Cell),
                })
                .collect();
            debug!(row = n, cells = row.cells.len(), "built data row");
            row
        })
        .collect()
}

/// Writes sample values into the leading data rows. Absent entries are skipped;
/// styles and formulas stay as they were.
pub fn apply_sample_data(rows: &mut [RowSpec], sample: &[Vec<CellValue>]) {
    assert!(
        sample.len() <= rows.len(),
        "{} sample rows but only {} data rows",
        sample.len(),
        rows.len()
    );

    for (row, values) in rows.iter_mut().zip(sample) {
        assert!(
            values.len() <= row.cells.len(),
            "sample row has {} columns, sheet has {}",
            values.len(),
            row.cells.len()
        );
        let number = row.number();
        for (j, value) in values.iter().enumerate() {
            if *value == CellValue::Empty {
                continue;
            }
            let cell = row
                .cell_mut(j)
                .unwrap_or_else(|| panic!("row {number} has no cell in column {j}"));
            assert!(
                cell.content.formula().is_none(),
                "sample value would overwrite the formula in row {number}, column {j}"
            );
            cell.content = CellContent::Value(value.clone());
        }
    }
}

/// Weekly totals, then the regular and overtime grand totals one row further down.
pub fn build_summary_rows(column_count: usize) -> Vec<RowSpec> {
    let first = FIRST_DATA_ROW + 1;
    let last = FIRST_DATA_ROW + DATA_ROWS;

    let mut totals = RowSpec::new(FIRST_DATA_ROW + DATA_ROWS, Some(35.0));
    totals
        .cells
        .push(CellSpec::new(0, CellContent::empty(), StyleId::Formula));
    totals.cells.push(CellSpec::new(
        1,
        CellContent::Value("Total Hrs:".into()),
        StyleId::Formula,
    ));
    for j in FIRST_DAY_COLUMN..column_count {
        let style = if j >= TOTAL_COLUMN {
            StyleId::Formula2
        } else {
            StyleId::Formula
        };
        totals.cells.push(CellSpec::new(
            j,
            CellContent::Formula(format!("SUM({})", range_ref((j, first), (j, last)))),
            style,
        ));
    }

    let grand_total = |index: usize, label: &str, column: usize| {
        let mut row = RowSpec::new(index, Some(25.0));
        row.cells.push(CellSpec::new(
            0,
            CellContent::Value(label.into()),
            StyleId::Formula,
        ));
        row.cells.push(CellSpec::new(
            1,
            CellContent::Formula(cell_ref(column, totals.number())),
            StyleId::Formula2,
        ));
        row
    };
    let regular = grand_total(totals.index + 2, "Total Regular Hours", REGULAR_COLUMN);
    let overtime = grand_total(totals.index + 3, "Total Overtime Hours", OVERTIME_COLUMN);

    vec![totals, regular, overtime]
}

pub fn column_widths() -> Vec<(usize, f64)> {
    let mut widths = vec![(0, 30.0)];
    widths.extend((FIRST_DAY_COLUMN..=LAST_DAY_COLUMN).map(|j| (j, 6.0)));
    widths.push((OVERTIME_COLUMN, 10.0));
    widths
}

pub fn generate(titles: &[&str], sample: &[Vec<CellValue>]) -> SheetSpec {
    let mut data = build_data_rows(titles, DATA_ROWS);
    apply_sample_data(&mut data, sample);

    let mut rows = vec![build_title_row(titles.len()), build_header_row(titles)];
    rows.extend(data);
    rows.extend(build_summary_rows(titles.len()));

    let sheet = SheetSpec {
        name: SHEET_NAME.to_string(),
        rows,
        column_widths: column_widths(),
        landscape: true,
    };
    debug!(
        rows = sheet.rows.len(),
        cells = sheet.cell_count(),
        "timesheet layout ready"
    );
    sheet
}
