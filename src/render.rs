//! Maps a `SheetSpec` onto an umya-spreadsheet workbook and writes it out.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info};
use umya_spreadsheet::structs::{
    Border, HorizontalAlignmentValues, OrientationValues, PatternValues, VerticalAlignmentValues,
};
use umya_spreadsheet::{Spreadsheet, Style};

use crate::cell_ref::column_letter;
use crate::layout::{CellContent, CellValue, SheetSpec};
use crate::styles::{HAlign, StyleBook, StyleSpec, VAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    /// Legacy BIFF8 container.
    Xls,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Xls => "xls",
        }
    }

    pub fn default_file_name(self) -> String {
        format!("timesheet.{}", self.extension())
    }
}

fn solid_fill(style: &mut Style, argb: &str) {
    let pattern = style.get_fill_mut().get_pattern_fill_mut();
    pattern.set_pattern_type(PatternValues::Solid);
    pattern.get_foreground_color_mut().set_argb(argb);
    pattern.get_background_color_mut().set_argb(argb);
}

fn thin(side: &mut Border, argb: &str) {
    side.set_border_style(Border::BORDER_THIN);
    side.get_color_mut().set_argb(argb);
}

fn thin_border(style: &mut Style, argb: &str) {
    let borders = style.get_borders_mut();
    thin(borders.get_left_mut(), argb);
    thin(borders.get_right_mut(), argb);
    thin(borders.get_top_mut(), argb);
    thin(borders.get_bottom_mut(), argb);
}

/// Builds the umya style object for one bucket.
pub fn to_umya_style(spec: &StyleSpec) -> Style {
    let mut style = Style::default();

    let font = style.get_font_mut();
    if let Some(size) = spec.font.size {
        font.set_size(size);
    }
    if spec.font.bold {
        font.set_bold(true);
    }
    if let Some(color) = spec.font.color {
        font.get_color_mut().set_argb(color);
    }

    if let Some(fill) = spec.fill {
        solid_fill(&mut style, fill);
    }
    if let Some(color) = spec.border {
        thin_border(&mut style, color);
    }
    if let Some(code) = spec.number_format {
        style.get_number_format_mut().set_format_code(code);
    }

    let alignment = style.get_alignment_mut();
    if spec.horizontal == HAlign::Center {
        alignment.set_horizontal(HorizontalAlignmentValues::Center);
    }
    if spec.vertical == VAlign::Center {
        alignment.set_vertical(VerticalAlignmentValues::Center);
    }
    if spec.wrap_text {
        alignment.set_wrap_text(true);
    }

    style
}

/// Builds a workbook holding exactly one sheet laid out as `sheet` describes.
pub fn render(sheet: &SheetSpec, styles: &StyleBook) -> Result<Spreadsheet> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let ws = book
        .new_sheet(sheet.name.as_str())
        .map_err(|e| anyhow!("无法创建工作表 {}: {e}", sheet.name))?;

    let umya_styles = styles.map(to_umya_style);

    for row in &sheet.rows {
        // umya coordinates are 1-based
        let row_no = row.number() as u32;
        if let Some(height) = row.height_points {
            ws.get_row_dimension_mut(&row_no).set_height(height);
        }

        for cell in &row.cells {
            let target = ws.get_cell_mut((cell.column as u32 + 1, row_no));
            match &cell.content {
                CellContent::Value(CellValue::Text(s)) => {
                    target.set_value(s.as_str());
                }
                CellContent::Value(CellValue::Number(n)) => {
                    target.set_value_number(*n);
                }
                CellContent::Value(CellValue::Empty) => {}
                CellContent::Formula(f) => {
                    target.set_formula(f.as_str());
                }
            }
            target.set_style(umya_styles.get(cell.style).clone());
        }

        if let Some(merge) = &row.merge {
            ws.add_merge_cells(merge.to_a1());
        }
        debug!(row = row_no, cells = row.cells.len(), "rendered row");
    }

    for &(column, width) in &sheet.column_widths {
        ws.get_column_dimension_mut(&column_letter(column).to_string())
            .set_width(width);
    }

    if sheet.landscape {
        ws.get_page_setup_mut()
            .set_orientation(OrientationValues::Landscape);
    }

    Ok(book)
}

/// Serializes `book` to `path`. Only the OOXML container has a writer.
pub fn write(book: &Spreadsheet, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Xlsx => {
            umya_spreadsheet::writer::xlsx::write(book, path)
                .with_context(|| format!("无法保存文件: {}", path.display()))?;
            info!(path = %path.display(), "wrote workbook");
            Ok(())
        }
        OutputFormat::Xls => bail!(
            "无法保存文件 {}: umya-spreadsheet 只能写入 .xlsx, 没有旧版 .xls (BIFF8) 写入器, 请改用 .xlsx",
            path.display()
        ),
    }
}
