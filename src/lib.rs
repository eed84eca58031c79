// Rollcall - GraphQL demo server
// A dice roller and an in-memory message board behind a single GraphQL endpoint

//! # Rollcall Library
//!
//! This is the library root for Rollcall, a small GraphQL server exposing two
//! toy domains: uniformly distributed dice rolls and a create/read/update
//! message board held entirely in process memory.
//!
//! ## Core Components
//!
//! ### Domain Models
//! - [`RandomDie`]: ephemeral die value producing rolls in `[1, num_sides]`
//! - [`Message`]: a stored record with an opaque, store-assigned id
//! - [`MessageDraft`]: the id-less content/author pair used for create/update
//!
//! ### Engine Layer
//! - [`MessageStorage`]: async storage trait behind the resolvers, so the
//!   in-memory map can be swapped for a persistent backend without touching
//!   the GraphQL layer
//! - [`InMemoryStorage`]: the default `RwLock<HashMap>` implementation
//! - `Query` / `Mutation`: the resolver roots bound into the schema
//!
//! ### Server Layer
//! - [`GraphQLServerBuilder`]: axum HTTP server serving the schema at
//!   `/graphql` with a GraphiQL explorer on the same path

// Core domain models
pub mod models;

// Engine implementations (GraphQL resolvers, storage)
pub mod engine;

// Server implementations
// This contains the HTTP server and GraphQL endpoint setup
pub mod server;

// Re-export core domain types for easy access
pub use models::{Message, MessageDraft, RandomDie};

// Re-export engine types for convenience
pub use engine::{
    graphql::{
        create_schema,
        create_schema_with_storage,
        MessageGQL,
        MessageInput,
        Mutation,
        Query,
        RandomDieGQL,
        // Complete schema type
        RollcallSchema,
    },
    storage::{InMemoryStorage, MessageStorage},
};

// Re-export server types for convenience
pub use server::graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};

// Core error types
use thiserror::Error;

/// Error type for Rollcall operations
///
/// Absence of a message is the only domain failure; the remaining variants
/// exist for substituted storage backends and server plumbing.
#[derive(Error, Debug)]
pub enum RollcallError {
    /// Error when a message cannot be found
    /// The message text is part of the API contract surfaced to clients
    #[error("no message exists with id {id}")]
    MessageNotFound { id: String },

    /// Storage-related errors
    /// Opaque errors from storage backends other than the in-memory map
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for RollcallError {
    fn from(err: std::io::Error) -> Self {
        RollcallError::Internal(err.to_string())
    }
}

/// Type alias for Results that use our custom error type
pub type Result<T> = std::result::Result<T, RollcallError>;
