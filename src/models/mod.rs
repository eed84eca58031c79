// Core domain models for Rollcall
// Plain data structures with no knowledge of GraphQL or HTTP

//! # Domain Models Module
//!
//! The two domains the server exposes:
//!
//! - `message`: the stored [`Message`] record and the id-less
//!   [`MessageDraft`] used as create/update input
//! - `die`: the ephemeral [`RandomDie`] value object

// Declares the `message` submodule from `message.rs`
pub mod message;

// Declares the `die` submodule from `die.rs`
pub mod die;

/// Re-export message types
/// Message is the stored record; MessageDraft is what callers supply
pub use message::{Message, MessageDraft};

/// Re-export the die value object
pub use die::RandomDie;
