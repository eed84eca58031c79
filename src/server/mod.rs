// Rollcall server implementations
// Network-facing layer sitting on top of the engine

//! # Server Module
//!
//! HTTP server implementations that expose the Rollcall engine to external
//! clients. The server layer owns routing, CORS, and the GraphiQL explorer;
//! everything GraphQL-semantic lives in the engine layer.

/// GraphQL HTTP server built on axum
pub mod graphql;

// Re-export main server types for easy access
pub use graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};
