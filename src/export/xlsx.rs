// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::{Report, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: bold title row, styled header, banded rows, auto column width.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(report.sheet).map_err(to_app_error)?;

    let title_format = Format::new().set_bold().set_font_size(13);
    worksheet
        .write_with_format(0, 0, report.title.as_str(), &title_format)
        .map_err(to_app_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in report.headers.iter().enumerate() {
        worksheet
            .write_with_format(1, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(2, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = report
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in report.rows.iter().enumerate() {
        let row = (row_index + 2) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band_color)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Dates become Excel dates, numbers become numbers, the rest stays text.
fn write_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        ws.write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_app_error)?;
    } else if let Ok(num) = s.parse::<f64>() {
        ws.write_with_format(row, col, num, &base.set_align(FormatAlign::Right))
            .map_err(to_app_error)?;
    } else {
        ws.write_with_format(row, col, s, &base)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
