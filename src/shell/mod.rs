// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Build the GraphQL schema around the shared data source.
// - Expose the schema over HTTP and WebSocket on one path.
// - Tie the subscription server's shutdown to the HTTP server's.

pub mod config;
pub mod graphql;
pub mod http;
pub mod server;
pub mod state;
pub mod subscriptions;
pub mod telemetry;
