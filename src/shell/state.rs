use std::sync::Arc;

use crate::modules::audit::core::ports::AuditTrail;
use crate::modules::audit::use_cases::list_audit_records::handler::ListAuditRecordsHandler;
use crate::modules::employees::core::ports::{EmployeeDirectory, HrAccounts};
use crate::modules::employees::use_cases::login::handler::LoginHandler;
use crate::modules::employees::use_cases::manage_employees::handler::ManageEmployeesHandler;
use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::modules::time_tracking::use_cases::start_shift::handler::StartShiftHandler;
use crate::modules::time_tracking::use_cases::stop_shift::handler::StopShiftHandler;
use crate::modules::time_tracking::use_cases::time_summary::handler::TimeSummaryHandler;
use crate::modules::timesheets::core::ports::{TimesheetNoteRepository, TimesheetRepository};
use crate::modules::timesheets::use_cases::decide_timesheet::handler::DecideTimesheetHandler;
use crate::modules::timesheets::use_cases::export_timesheets::handler::ExportTimesheetsHandler;
use crate::modules::timesheets::use_cases::list_timesheets::handler::ListTimesheetsHandler;
use crate::modules::timesheets::use_cases::set_note::handler::SetNoteHandler;
use crate::modules::timesheets::use_cases::submit_timesheet::handler::SubmitTimesheetHandler;
use crate::modules::timesheets::use_cases::week_view::handler::WeekViewHandler;
use crate::shared::auth::token::TokenSigner;
use crate::shared::core::clock::{Clock, WorkCalendar};

/// Every outbound port, each usually backed by the same database.
#[derive(Clone)]
pub struct Ports {
    pub employees: Arc<dyn EmployeeDirectory>,
    pub hr_accounts: Arc<dyn HrAccounts>,
    pub entries: Arc<dyn TimeEntryRepository>,
    pub timesheets: Arc<dyn TimesheetRepository>,
    pub notes: Arc<dyn TimesheetNoteRepository>,
    pub audit: Arc<dyn AuditTrail>,
}

impl Ports {
    pub fn backed_by<TDatabase>(database: Arc<TDatabase>) -> Self
    where
        TDatabase: EmployeeDirectory
            + HrAccounts
            + TimeEntryRepository
            + TimesheetRepository
            + TimesheetNoteRepository
            + AuditTrail
            + 'static,
    {
        Self {
            employees: database.clone(),
            hr_accounts: database.clone(),
            entries: database.clone(),
            timesheets: database.clone(),
            notes: database.clone(),
            audit: database,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub signer: TokenSigner,
    pub clock: Arc<dyn Clock>,
    pub start_shift: Arc<StartShiftHandler>,
    pub stop_shift: Arc<StopShiftHandler>,
    pub time_summary: Arc<TimeSummaryHandler>,
    pub week_view: Arc<WeekViewHandler>,
    pub set_note: Arc<SetNoteHandler>,
    pub submit_timesheet: Arc<SubmitTimesheetHandler>,
    pub list_timesheets: Arc<ListTimesheetsHandler>,
    pub decide_timesheet: Arc<DecideTimesheetHandler>,
    pub export_timesheets: Arc<ExportTimesheetsHandler>,
    pub login: Arc<LoginHandler>,
    pub manage_employees: Arc<ManageEmployeesHandler>,
    pub list_audit_records: Arc<ListAuditRecordsHandler>,
}

impl AppState {
    pub fn new(
        ports: Ports,
        clock: Arc<dyn Clock>,
        calendar: WorkCalendar,
        signer: TokenSigner,
    ) -> Self {
        let Ports {
            employees,
            hr_accounts,
            entries,
            timesheets,
            notes,
            audit,
        } = ports;

        Self {
            start_shift: Arc::new(StartShiftHandler::new(
                employees.clone(),
                entries.clone(),
                audit.clone(),
                clock.clone(),
                calendar,
            )),
            stop_shift: Arc::new(StopShiftHandler::new(
                employees.clone(),
                entries.clone(),
                audit.clone(),
                clock.clone(),
                calendar,
            )),
            time_summary: Arc::new(TimeSummaryHandler::new(
                employees.clone(),
                entries.clone(),
                clock.clone(),
                calendar,
            )),
            week_view: Arc::new(WeekViewHandler::new(
                employees.clone(),
                entries.clone(),
                timesheets.clone(),
                notes.clone(),
                clock.clone(),
                calendar,
            )),
            set_note: Arc::new(SetNoteHandler::new(
                employees.clone(),
                notes,
                audit.clone(),
                clock.clone(),
            )),
            submit_timesheet: Arc::new(SubmitTimesheetHandler::new(
                employees.clone(),
                timesheets.clone(),
                audit.clone(),
                clock.clone(),
            )),
            list_timesheets: Arc::new(ListTimesheetsHandler::new(
                timesheets.clone(),
                entries,
                clock.clone(),
            )),
            decide_timesheet: Arc::new(DecideTimesheetHandler::new(
                timesheets.clone(),
                audit.clone(),
                clock.clone(),
            )),
            export_timesheets: Arc::new(ExportTimesheetsHandler::new(timesheets)),
            login: Arc::new(LoginHandler::new(
                employees.clone(),
                hr_accounts,
                signer.clone(),
                clock.clone(),
            )),
            manage_employees: Arc::new(ManageEmployeesHandler::new(
                employees,
                audit.clone(),
                clock.clone(),
            )),
            list_audit_records: Arc::new(ListAuditRecordsHandler::new(audit)),
            signer,
            clock,
        }
    }
}
