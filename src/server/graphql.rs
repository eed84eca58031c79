// GraphQL server implementation for Rollcall
// Binds the schema to an HTTP endpoint with a GraphiQL explorer

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router, Server,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::engine::{
    graphql::{create_schema_with_storage, RollcallSchema},
    storage::{InMemoryStorage, MessageStorage},
};

/// GraphQL server configuration
#[derive(Clone)]
pub struct GraphQLServerConfig {
    pub port: u16,
    pub cors_enabled: bool,
}

impl Default for GraphQLServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            cors_enabled: true,
        }
    }
}

/// GraphQL server
pub struct GraphQLServer {
    config: GraphQLServerConfig,
    storage: Box<dyn MessageStorage>,
}

impl GraphQLServer {
    pub fn new() -> Self {
        Self {
            config: GraphQLServerConfig::default(),
            storage: Box::new(InMemoryStorage::default()),
        }
    }

    pub fn with_config(mut self, config: GraphQLServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_storage(mut self, storage: Box<dyn MessageStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let schema = create_schema_with_storage(self.storage);

        // GET serves the GraphiQL explorer, POST executes documents -
        // both on the same path
        let mut app = Router::new()
            .route("/graphql", get(graphiql).post(graphql_handler))
            .route("/health", get(health_check))
            .with_state(schema);

        if self.config.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }

        let addr = format!("0.0.0.0:{}", self.config.port);

        info!(
            "🚀 GraphQL server running on http://localhost:{}/graphql",
            self.config.port
        );
        info!(
            "📊 GraphiQL interface: http://localhost:{}/graphql",
            self.config.port
        );

        Server::bind(&addr.parse()?)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }
}

impl Default for GraphQLServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring and running a [`GraphQLServer`]
pub struct GraphQLServerBuilder {
    server: GraphQLServer,
}

impl GraphQLServerBuilder {
    pub fn new() -> Self {
        Self {
            server: GraphQLServer::new(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        let mut config = self.server.config.clone();
        config.port = port;
        self.server = self.server.with_config(config);
        self
    }

    pub fn with_storage(mut self, storage: Box<dyn MessageStorage>) -> Self {
        self.server = self.server.with_storage(storage);
        self
    }

    pub async fn build_and_run(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server.run().await
    }
}

impl Default for GraphQLServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// GraphQL handler
async fn graphql_handler(
    State(schema): State<RollcallSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

// GraphiQL interface served on the endpoint path
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Rollcall GraphQL server is running!")
}
