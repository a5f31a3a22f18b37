// Seed rows for tests, usable against any backend.

use chrono::{TimeZone, Utc};

use crate::modules::employees::core::employee::NewEmployee;
use crate::modules::employees::core::ports::{EmployeeDirectory, HrAccounts};
use crate::shared::auth::pin::hash_pin;

pub const SEED_PIN: &str = "1234";

pub async fn seed_employee(directory: &dyn EmployeeDirectory, name: &str) -> i64 {
    directory
        .create_employee(NewEmployee {
            name: name.to_string(),
            department: Some("Operations".to_string()),
            pin_hash: hash_pin(SEED_PIN).unwrap(),
            created_at: Utc.with_ymd_and_hms(2023, 12, 1, 8, 0, 0).unwrap(),
        })
        .await
        .unwrap()
        .id
}

pub async fn seed_hr_account(accounts: &dyn HrAccounts, name: &str) -> i64 {
    accounts
        .save_hr_account(name, &hash_pin(SEED_PIN).unwrap())
        .await
        .unwrap()
        .id
}
