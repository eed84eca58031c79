// Rollcall engine
// The layer between the domain models and the external world

//! # Engine Module
//!
//! Two concerns live here:
//!
//! - **GraphQL engine** (`graphql`): the schema surface, the `Query` and
//!   `Mutation` resolver roots, and the mapping between domain models and
//!   their GraphQL representations
//! - **Storage engine** (`storage`): the [`MessageStorage`] abstraction the
//!   resolvers run against, with an in-memory default implementation

/// GraphQL schema, resolvers, and API type mappings
pub mod graphql;

/// Storage trait definition and in-memory implementation
pub mod storage;

// Re-export main engine types for clean API access
pub use graphql::{
    create_schema, create_schema_with_storage, MessageGQL, MessageInput, Mutation, Query,
    RandomDieGQL, RollcallSchema,
};
pub use storage::{InMemoryStorage, MessageStorage};
