use calamine::{Data, Reader, open_workbook_auto};
use xltools::layout::{TITLES, generate, sample_data};
use xltools::render::OutputFormat;
use xltools::timesheet::write_timesheet;

fn generated() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timesheet.xlsx");
    write_timesheet(&path, OutputFormat::Xlsx, &TITLES, &sample_data()).unwrap();
    (dir, path)
}

#[test]
fn values_survive_reopening() {
    let (_dir, path) = generated();
    let mut wb = open_workbook_auto(&path).unwrap();
    assert_eq!(wb.sheet_names(), vec!["Timesheet".to_string()]);

    let range = wb.worksheet_range("Timesheet").unwrap();
    assert_eq!(
        range.get_value((0, 0)),
        Some(&Data::String("Weekly Timesheet".into()))
    );
    assert_eq!(
        range.get_value((1, 0)),
        Some(&Data::String("Person".into()))
    );
    assert_eq!(
        range.get_value((2, 0)),
        Some(&Data::String("Yegor Kozlov".into()))
    );
    assert_eq!(range.get_value((2, 2)), Some(&Data::Float(5.0)));
    assert_eq!(range.get_value((3, 5)), Some(&Data::Float(3.5)));
    assert!(matches!(range.get_value((3, 6)), None | Some(Data::Empty)));
    assert_eq!(
        range.get_value((14, 0)),
        Some(&Data::String("Total Regular Hours".into()))
    );
}

#[test]
fn formulas_survive_reopening() {
    let (_dir, path) = generated();
    let mut wb = open_workbook_auto(&path).unwrap();
    let formulas = wb.worksheet_formula("Timesheet").unwrap();

    let formula = |row: u32, col: u32| formulas.get_value((row, col)).cloned().unwrap_or_default();
    for r in 0..10u32 {
        let n = r + 3;
        assert_eq!(formula(r + 2, 9), format!("SUM(C{n}:I{n})"));
        assert_eq!(formula(r + 2, 11), format!("J{n}-K{n}"));
    }
    assert_eq!(formula(12, 2), "SUM(C3:C12)");
    assert_eq!(formula(12, 11), "SUM(L3:L12)");
    assert_eq!(formula(14, 1), "L13");
    assert_eq!(formula(15, 1), "K13");

    let count = formulas.used_cells().filter(|(_, _, f)| !f.is_empty()).count();
    assert_eq!(count, 10 * 2 + 10 + 2);
}

#[test]
fn merge_and_styles_survive_reopening() {
    let (_dir, path) = generated();
    let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    let ws = book.get_sheet_by_name("Timesheet").expect("sheet");

    let merges: Vec<String> = ws.get_merge_cells().iter().map(|m| m.get_range()).collect();
    assert_eq!(merges, vec!["A1:L1".to_string()]);

    let format_of = |coord: &str| {
        ws.get_cell(coord)
            .and_then(|c| c.get_style().get_number_format())
            .map(|nf| nf.get_format_code().to_string())
    };
    assert_eq!(format_of("J3").as_deref(), Some("0.00"));
    assert_eq!(format_of("L13").as_deref(), Some("0.00"));
}

#[test]
fn every_laid_out_cell_is_written() {
    let (_dir, path) = generated();
    let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    let ws = book.get_sheet_by_name("Timesheet").expect("sheet");

    let expected = generate(&TITLES, &sample_data()).cell_count();
    assert_eq!(ws.get_cell_collection().len(), expected);

    // blank Saturday entry of the second sample row keeps its bordered cell
    let blank = ws.get_cell("G4").expect("G4 written");
    assert_eq!(blank.get_value(), "");
    let borders = blank.get_style().get_borders().expect("borders");
    assert_eq!(borders.get_left().get_border_style(), "thin");
}

#[test]
fn legacy_container_is_a_reported_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timesheet.xls");
    let err = write_timesheet(&path, OutputFormat::Xls, &TITLES, &sample_data()).unwrap_err();
    assert!(format!("{err:#}").contains("timesheet.xls"));
    assert!(!path.exists());
}

#[test]
fn unwritable_path_is_a_reported_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("timesheet.xlsx");
    let err = write_timesheet(&path, OutputFormat::Xlsx, &TITLES, &sample_data()).unwrap_err();
    assert!(format!("{err:#}").contains("timesheet.xlsx"));
}
