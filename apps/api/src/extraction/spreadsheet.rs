use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, DataType, ExcelDateTime, Range, Reader, Xlsx};

use super::{DocumentFormat, ExtractError};

/// Cell separator within one emitted row.
const CELL_SEPARATOR: &str = " | ";

/// Extracts every sheet of an XLSX workbook in workbook order.
///
/// Each sheet opens with a `--- Sheet: name ---` line, followed by one line per
/// row holding its non-empty cells. Rows without any value are dropped.
pub fn extract_xlsx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).map_err(xlsx_error)?;

    let mut text = String::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name).map_err(xlsx_error)?;
        push_sheet(&mut text, &sheet_name, &range);
    }

    Ok(text)
}

fn push_sheet(text: &mut String, sheet_name: &str, range: &Range<Data>) {
    text.push_str(&format!("\n--- Sheet: {sheet_name} ---\n"));

    for row in range.rows() {
        let cells: Vec<String> = row.iter().filter_map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        text.push_str(&cells.join(CELL_SEPARATOR));
        text.push('\n');
    }
}

/// Renders a cell value, or `None` when the cell holds nothing.
fn cell_text(cell: &Data) -> Option<String> {
    let value = match cell {
        Data::Empty => return None,
        Data::String(s) if s.is_empty() => return None,
        Data::String(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => excel_date_text(dt),
        Data::DateTimeIso(s) => cell
            .as_datetime()
            .map(|dt| dt.to_string())
            .unwrap_or_else(|| s.clone()),
        Data::DurationIso(s) => s.clone(),
        other => other.to_string(),
    };
    Some(value)
}

/// Formats a serial date as `YYYY-MM-DD HH:MM:SS` and a duration as `[D day(s), ]H:MM:SS`.
fn excel_date_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        if let Some(duration) = dt.as_duration() {
            return duration_text(duration.num_seconds());
        }
    } else if let Some(datetime) = dt.as_datetime() {
        return datetime.to_string();
    }
    dt.as_f64().to_string()
}

fn duration_text(total_seconds: i64) -> String {
    let days = total_seconds.div_euclid(86_400);
    let rest = total_seconds.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);
    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}

fn xlsx_error(err: impl std::fmt::Display) -> ExtractError {
    ExtractError::extraction(DocumentFormat::Xlsx, err)
}
