// A fully wired application over the in-memory database and a pinned clock.
//
// The clock starts on Tuesday 2024-01-02 at 09:00 UTC, inside the week of
// Monday 2024-01-01.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rstest::fixture;
use std::sync::Arc;

use crate::modules::audit::core::audit_record::{AuditRecord, NewAuditRecord};
use crate::modules::audit::core::ports::AuditTrail;
use crate::modules::audit::use_cases::list_audit_records::handler::ListAuditRecordsHandler;
use crate::modules::employees::use_cases::login::handler::LoginHandler;
use crate::modules::employees::use_cases::manage_employees::handler::ManageEmployeesHandler;
use crate::modules::time_tracking::use_cases::start_shift::handler::StartShiftHandler;
use crate::modules::time_tracking::use_cases::stop_shift::handler::StopShiftHandler;
use crate::modules::time_tracking::use_cases::time_summary::handler::TimeSummaryHandler;
use crate::modules::timesheets::core::ports::TimesheetRepository;
use crate::modules::timesheets::use_cases::decide_timesheet::handler::DecideTimesheetHandler;
use crate::modules::timesheets::use_cases::export_timesheets::handler::ExportTimesheetsHandler;
use crate::modules::timesheets::use_cases::list_timesheets::handler::ListTimesheetsHandler;
use crate::modules::timesheets::use_cases::set_note::handler::SetNoteHandler;
use crate::modules::timesheets::use_cases::submit_timesheet::handler::SubmitTimesheetHandler;
use crate::modules::timesheets::use_cases::week_view::handler::WeekViewHandler;
use crate::shared::auth::identity::Identity;
use crate::shared::auth::token::TokenSigner;
use crate::shared::core::clock::{Clock, FixedClock, WorkCalendar};
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::InMemoryDatabase;
use crate::shell::state::{AppState, Ports};
use crate::tests::fixtures::seed::{seed_employee, seed_hr_account};

pub const TEST_SECRET: &str = "test-secret-of-at-least-16-bytes";

pub fn tuesday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap()
}

/// An audit trail whose backend is always down.
pub struct FailingAuditTrail;

#[async_trait]
impl AuditTrail for FailingAuditTrail {
    async fn record(&self, _record: NewAuditRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Backend("audit log unavailable".into()))
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<AuditRecord>, RepositoryError> {
        Err(RepositoryError::Backend("audit log unavailable".into()))
    }
}

pub struct TestContext {
    pub database: Arc<InMemoryDatabase>,
    pub clock: Arc<FixedClock>,
    pub calendar: WorkCalendar,
    pub signer: TokenSigner,
    pub state: AppState,
}

#[fixture]
pub fn before_each() -> TestContext {
    TestContext::new(InMemoryDatabase::new())
}

impl TestContext {
    pub fn new(database: InMemoryDatabase) -> Self {
        let database = Arc::new(database);
        let clock = Arc::new(FixedClock::new(tuesday_morning()));
        let calendar = WorkCalendar::utc();
        let signer = TokenSigner::new(TEST_SECRET, Duration::hours(12));
        let state = AppState::new(
            Ports::backed_by(database.clone()),
            clock.clone(),
            calendar,
            signer.clone(),
        );
        Self {
            database,
            clock,
            calendar,
            signer,
            state,
        }
    }

    /// Rewires the application over other ports, keeping clock and signer.
    pub fn with_ports(self, ports: Ports) -> Self {
        let state = AppState::new(ports, self.clock.clone(), self.calendar, self.signer.clone());
        Self { state, ..self }
    }

    pub fn with_failing_audit(self) -> Self {
        let ports = Ports {
            audit: Arc::new(FailingAuditTrail),
            ..Ports::backed_by(self.database.clone())
        };
        self.with_ports(ports)
    }

    pub fn today(&self) -> NaiveDate {
        self.calendar.today(&*self.clock)
    }

    pub async fn employee(&self, name: &str) -> i64 {
        seed_employee(&*self.database, name).await
    }

    pub async fn hr_account(&self, name: &str) -> i64 {
        seed_hr_account(&*self.database, name).await
    }

    /// Stores `count` submitted weeks for the employee, going back from 2024-01-01.
    pub async fn submitted_weeks(&self, employee_id: i64, count: i64) {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for week in 0..count {
            self.database
                .save_submission(employee_id, monday - Duration::weeks(week), self.clock.now())
                .await
                .unwrap()
                .unwrap();
        }
    }

    /// A bearer token for the identity, valid at the current test time.
    pub fn bearer(&self, identity: &Identity) -> String {
        let token = self.signer.issue(identity, self.clock.now()).unwrap();
        format!("Bearer {token}")
    }

    pub fn start_shift(&self) -> Arc<StartShiftHandler> {
        self.state.start_shift.clone()
    }

    pub fn stop_shift(&self) -> Arc<StopShiftHandler> {
        self.state.stop_shift.clone()
    }

    pub fn time_summary(&self) -> Arc<TimeSummaryHandler> {
        self.state.time_summary.clone()
    }

    pub fn week_view(&self) -> Arc<WeekViewHandler> {
        self.state.week_view.clone()
    }

    pub fn set_note(&self) -> Arc<SetNoteHandler> {
        self.state.set_note.clone()
    }

    pub fn submit_timesheet(&self) -> Arc<SubmitTimesheetHandler> {
        self.state.submit_timesheet.clone()
    }

    pub fn list_timesheets(&self) -> Arc<ListTimesheetsHandler> {
        self.state.list_timesheets.clone()
    }

    pub fn decide_timesheet(&self) -> Arc<DecideTimesheetHandler> {
        self.state.decide_timesheet.clone()
    }

    pub fn export_timesheets(&self) -> Arc<ExportTimesheetsHandler> {
        self.state.export_timesheets.clone()
    }

    pub fn login(&self) -> Arc<LoginHandler> {
        self.state.login.clone()
    }

    pub fn manage_employees(&self) -> Arc<ManageEmployeesHandler> {
        self.state.manage_employees.clone()
    }

    pub fn list_audit_records(&self) -> Arc<ListAuditRecordsHandler> {
        self.state.list_audit_records.clone()
    }
}
