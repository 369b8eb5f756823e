//! Excel export of yearly service costs

use carcare_domain::service::definition_for;
use carcare_types::{Error, Result, ServiceRecord};
use chrono::Datelike;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::app::YearlyReport;

/// Export a yearly report, plus the records it was built from, to an Excel file
pub fn export_yearly_costs(report: &YearlyReport, records: &[ServiceRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let records_sheet = workbook.add_worksheet();
    write_records_sheet(records_sheet, report, records)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &YearlyReport) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("#,##0");

    sheet
        .write_string_with_format(0, 0, format!("Service costs {}", report.year), &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string_with_format(2, 0, "Car", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string_with_format(2, 1, "Total cost", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 3;
    for entry in &report.rows {
        sheet
            .write_string(row, 0, &entry.car_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 1, entry.total_cost, &money_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    sheet
        .write_string_with_format(row, 0, "Total", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number_with_format(row, 1, report.total, &money_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_records_sheet(sheet: &mut Worksheet, report: &YearlyReport, records: &[ServiceRecord]) -> Result<()> {
    sheet
        .set_name("Records")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = ["Date", "Car", "Service", "Odometer (km)", "Cost", "Note"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let mut in_year: Vec<_> = records
        .iter()
        .filter(|r| r.performed_on.year() == report.year)
        .collect();
    in_year.sort_by(|a, b| a.performed_on.cmp(&b.performed_on));

    for (row_idx, record) in in_year.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let car_name = report
            .rows
            .iter()
            .find(|r| r.car_id == record.car_id)
            .map(|r| r.car_name.as_str())
            .unwrap_or(record.car_id.as_str());
        let service = definition_for(record.kind)
            .map(|d| d.label)
            .unwrap_or_else(|| record.kind.as_str());

        sheet
            .write_string(row, 0, record.performed_on.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, car_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, service)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, f64::from(record.odometer_at_service))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, record.cost)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 5, &record.note)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(1, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(5, 40)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
