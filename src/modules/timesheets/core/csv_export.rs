use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::timesheets::core::timesheet::TimesheetListing;
use crate::shared::core::dates::format_date;

pub const CSV_HEADER: [&str; 8] = [
    "id",
    "employee_id",
    "employee_name",
    "week_start",
    "status",
    "hr_note",
    "submitted_at",
    "decided_at",
];

/// Renders listings as CSV. Fields holding commas, quotes or line breaks are
/// quoted and inner quotes doubled.
pub fn render_csv(rows: &[TimesheetListing]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        let timesheet = &row.timesheet;
        writer.write_record([
            timesheet.id.to_string(),
            timesheet.employee_id.to_string(),
            row.employee_name.clone(),
            format_date(timesheet.week_start),
            timesheet.status.as_str().to_string(),
            timesheet.hr_note.clone().unwrap_or_default(),
            format_instant(timesheet.submitted_at),
            format_instant(timesheet.decided_at),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn format_instant(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}
