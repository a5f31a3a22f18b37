use std::sync::Arc;

use crate::modules::timesheets::core::csv_export::render_csv;
use crate::modules::timesheets::core::ports::TimesheetRepository;
use crate::modules::timesheets::core::timesheet::TimesheetFilter;
use crate::modules::timesheets::use_cases::list_timesheets::handler::LIST_LIMIT;
use crate::shared::auth::identity::Identity;
use crate::shared::core::dates::format_date;
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

pub struct ExportTimesheetsHandler {
    timesheets: Arc<dyn TimesheetRepository>,
}

impl ExportTimesheetsHandler {
    pub fn new(timesheets: Arc<dyn TimesheetRepository>) -> Self {
        Self { timesheets }
    }

    pub async fn handle(
        &self,
        actor: &Identity,
        filter: TimesheetFilter,
    ) -> ApplicationResult<CsvExport> {
        actor.ensure_hr()?;

        let listings = self.timesheets.list_timesheets(filter, LIST_LIMIT).await?;
        let body = render_csv(&listings)
            .map_err(|error| ApplicationError::Internal(format!("csv rendering failed: {error}")))?;

        tracing::info!(rows = listings.len(), "timesheets exported");
        Ok(CsvExport {
            filename: export_filename(&filter),
            body,
        })
    }
}

fn export_filename(filter: &TimesheetFilter) -> String {
    let week = filter
        .week_start
        .map_or_else(|| "all".to_string(), format_date);
    let status = filter.status.map_or("all", |status| status.as_str());
    format!("timesheets_{week}_{status}.csv")
}
