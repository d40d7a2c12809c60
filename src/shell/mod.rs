// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory session store, the spreadsheet exporter and the product catalog.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
