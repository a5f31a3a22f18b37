// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Pick the storage backend and wire it into the use case handlers.
// - Expose the handlers over HTTP and GraphQL, with errors mapped at the edge.

pub mod auth;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
