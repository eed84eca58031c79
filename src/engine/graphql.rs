// GraphQL API for the dice roller and message board
// This provides the schema surface clients query over HTTP

use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema, SimpleObject, ID};
use rand::Rng;

use crate::engine::storage::{InMemoryStorage, MessageStorage};
use crate::models::{Message, MessageDraft, RandomDie};
use crate::RollcallError;

// GraphQL types - these are the API representations of our domain models

/// GraphQL representation of a stored message
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Message")]
pub struct MessageGQL {
    pub id: ID,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// GraphQL representation of a die
///
/// Rolls are computed at field resolution time, so `rollOnce` and `roll`
/// produce fresh values on every request.
pub struct RandomDieGQL {
    die: RandomDie,
}

#[Object(name = "RandomDie")]
impl RandomDieGQL {
    /// Number of sides on this die
    async fn num_sides(&self) -> i32 {
        self.die.num_sides()
    }

    /// One uniform roll in [1, numSides]
    async fn roll_once(&self) -> i32 {
        self.die.roll_once()
    }

    /// numRolls independent rolls; zero or negative yields an empty list
    async fn roll(&self, num_rolls: i32) -> Vec<i32> {
        self.die.roll(num_rolls)
    }
}

// Input types for mutations

/// Input for creating or updating a message
///
/// Both fields are optional and accepted without validation.
#[derive(InputObject, Debug, Default)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}

// Conversion functions between domain models and GraphQL types

impl From<MessageInput> for MessageDraft {
    fn from(input: MessageInput) -> Self {
        MessageDraft {
            content: input.content,
            author: input.author,
        }
    }
}

impl From<&Message> for MessageGQL {
    fn from(message: &Message) -> Self {
        MessageGQL {
            id: ID(message.id.clone()),
            content: message.content.clone(),
            author: message.author.clone(),
        }
    }
}

/// Field-level error for a missing message, naming the id the caller asked for
fn message_not_found(id: &str) -> async_graphql::Error {
    async_graphql::Error::new(
        RollcallError::MessageNotFound { id: id.to_string() }.to_string(),
    )
}

// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// One of two fixed quotes, chosen uniformly at random
    async fn quote_of_the_day(&self) -> String {
        if rand::thread_rng().gen_bool(0.5) {
            "Take it easy".to_string()
        } else {
            "Salvation lies within".to_string()
        }
    }

    /// A uniform random float in [0, 1)
    async fn random(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    /// Construct a die with the given number of sides, defaulting to 6
    async fn get_die(&self, num_sides: Option<i32>) -> RandomDieGQL {
        RandomDieGQL {
            die: num_sides.map(RandomDie::new).unwrap_or_default(),
        }
    }

    /// Get a message by id
    ///
    /// The return type is nullable so a missing id errors this field alone;
    /// sibling fields in the same request still resolve.
    async fn get_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<MessageGQL>> {
        let storage = ctx.data::<Box<dyn MessageStorage>>()?;
        match storage.get_message(id.as_str()).await {
            Ok(Some(message)) => Ok(Some(MessageGQL::from(&message))),
            Ok(None) => Err(message_not_found(id.as_str())),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to get message: {}",
                e
            ))),
        }
    }
}

// GraphQL Mutation root
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a message; a fresh opaque id is assigned by the store
    ///
    /// An absent input behaves as an empty draft - both fields may be
    /// omitted.
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<MessageGQL> {
        let storage = ctx.data::<Box<dyn MessageStorage>>()?;
        let draft = input.map(MessageDraft::from).unwrap_or_default();
        match storage.create_message(draft).await {
            Ok(message) => Ok(MessageGQL::from(&message)),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to create message: {}",
                e
            ))),
        }
    }

    /// Replace an existing message's content and author
    ///
    /// Full replace, not a merge: fields absent from the input become absent
    /// on the stored message. Fails with a field-level error when the id is
    /// unknown.
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<Option<MessageGQL>> {
        let storage = ctx.data::<Box<dyn MessageStorage>>()?;
        let draft = input.map(MessageDraft::from).unwrap_or_default();
        match storage.update_message(id.as_str(), draft).await {
            Ok(Some(message)) => Ok(Some(MessageGQL::from(&message))),
            Ok(None) => Err(message_not_found(id.as_str())),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to update message: {}",
                e
            ))),
        }
    }
}

/// Complete schema type for the Rollcall API
pub type RollcallSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a schema backed by a fresh in-memory store
pub fn create_schema() -> RollcallSchema {
    create_schema_with_storage(Box::new(InMemoryStorage::default()))
}

/// Create a schema backed by the given storage implementation
pub fn create_schema_with_storage(storage: Box<dyn MessageStorage>) -> RollcallSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(storage)
        .finish()
}
