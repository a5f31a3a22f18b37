// GraphQL schema assembled from the per-module roots.
//
// The caller's Identity is attached as request data by the /gql handler.
// Resolvers use the same handlers and access rules as the JSON API.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, MergedObject, Result as GqlResult, Schema,
};

use crate::modules::audit::adapters::inbound::graphql::AuditQuery;
use crate::modules::employees::adapters::inbound::graphql::{EmployeesMutation, EmployeesQuery};
use crate::modules::time_tracking::adapters::inbound::graphql::{
    TimeTrackingMutation, TimeTrackingQuery,
};
use crate::modules::timesheets::adapters::inbound::graphql::{
    TimesheetsMutation, TimesheetsQuery,
};
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeTrackingQuery, TimesheetsQuery, EmployeesQuery, AuditQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TimeTrackingMutation, TimesheetsMutation, EmployeesMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn state<'a>(context: &Context<'a>) -> &'a AppState {
    context.data_unchecked::<AppState>()
}

/// The application state and the authenticated caller, or UNAUTHORIZED.
pub fn caller<'a>(context: &Context<'a>) -> GqlResult<(&'a AppState, &'a Identity)> {
    let identity = context
        .data_opt::<Identity>()
        .ok_or_else(|| ApplicationError::Unauthorized.extend())?;
    Ok((state(context), identity))
}

pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    error.extend()
}
