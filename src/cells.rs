//! Single-cell write and read-back demos.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use clap::Parser;
use tracing::{debug, info};

pub const ROUNDTRIP_FILE: &str = "./test.xlsx";
pub const SINGLE_CELL_FILE: &str = "./test_file.xlsx";

fn datatype_to_string(cell: Option<&Data>) -> Option<String> {
    let text = match cell? {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 {
                format!("{:.1}", n)
            } else {
                n.to_string()
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{e:?}"),
        Data::DateTime(f) => f.to_string(),
        other => format!("{other:?}"),
    };
    Some(text)
}

/// New workbook, `text` at 0-based (`row`, `column`) of its default sheet.
pub fn write_cell(path: &Path, row: u32, column: u32, text: &str) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    book.get_active_sheet_mut()
        .get_cell_mut((column + 1, row + 1))
        .set_value(text);

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .with_context(|| format!("无法保存文件: {}", path.display()))?;
    info!(path = %path.display(), row, column, "wrote cell");
    Ok(())
}

/// Display text of the cell at 0-based (`row`, `column`) of the first sheet.
pub fn read_cell(path: &Path, row: u32, column: u32) -> Result<Option<String>> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("无法打开文件: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("工作簿中没有工作表"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("无法读取工作表: {sheet_name}"))?;

    // absolute position; the range itself starts at the first used cell
    let value = datatype_to_string(range.get_value((row, column)));
    debug!(sheet = %sheet_name, row, column, ?value, "read cell");
    Ok(value)
}

/// Writes a cell, reads it back and prints it.
#[derive(Parser, Debug)]
#[command(name = "xlroundtrip")]
struct RoundtripCli {
    /// Workbook to write and read back
    #[arg(default_value = ROUNDTRIP_FILE)]
    path: PathBuf,
}

/// Writes a single text cell.
#[derive(Parser, Debug)]
#[command(name = "xlcell")]
struct SingleCellCli {
    /// Workbook to write
    #[arg(default_value = SINGLE_CELL_FILE)]
    path: PathBuf,
}

/// Writes `TEST` to K11, reads it back and prints it.
pub fn run_roundtrip(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let path = RoundtripCli::parse_from(args).path;
    write_cell(&path, 10, 10, "TEST")?;
    let value = read_cell(&path, 10, 10)?.unwrap_or_default();
    println!("{value}");
    Ok(())
}

/// Writes `Chercher Tech` to A1.
pub fn run_single_cell(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let path = SingleCellCli::parse_from(args).path;
    write_cell(&path, 0, 0, "Chercher Tech")?;
    println!("文件已保存为: {}", path.display());
    Ok(())
}
