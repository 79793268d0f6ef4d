use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::layout::{CellValue, TITLES, generate, sample_data};
use crate::render::{self, OutputFormat};
use crate::styles::build_styles;

/// A weekly timesheet workbook with totals formulas.
#[derive(Parser, Debug)]
#[command(name = "timesheet")]
struct Cli {
    /// Write the legacy .xls container instead of .xlsx
    #[arg(long)]
    xls: bool,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.xls {
            OutputFormat::Xls
        } else {
            OutputFormat::Xlsx
        }
    }
}

/// Lays out the timesheet for `titles`/`sample` and saves it at `path`.
pub fn write_timesheet(
    path: &Path,
    format: OutputFormat,
    titles: &[&str],
    sample: &[Vec<CellValue>],
) -> Result<()> {
    let styles = build_styles();
    let sheet = generate(titles, sample);
    let book = render::render(&sheet, &styles)?;
    render::write(&book, path, format)
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let format = Cli::parse_from(args).format();

    let output_path = PathBuf::from(format.default_file_name());
    info!(?format, path = %output_path.display(), "generating timesheet");
    write_timesheet(&output_path, format, &TITLES, &sample_data())?;
    println!("文件已保存为: {}", output_path.display());
    Ok(())
}
