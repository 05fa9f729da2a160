use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::post,
};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::{Result, ShelfError};

use super::schema::AppSchema;

#[derive(Clone)]
struct ServerState {
    schema: AppSchema,
    graphiql_page: Option<Arc<str>>,
}

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == "*" || o == origin)
    }

    fn apply(&self, headers: &mut HeaderMap, origin: HeaderValue, preflight: Option<&HeaderMap>) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.append(header::VARY, HeaderValue::from_static("origin"));

        if let Some(request_headers) = preflight {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, OPTIONS"),
            );
            let allow_headers = request_headers
                .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .cloned()
                .unwrap_or_else(|| HeaderValue::from_static("content-type"));
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
        }
    }
}

async fn cors(State(policy): State<Arc<CorsPolicy>>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .filter(|value| value.to_str().map(|o| policy.allows(o)).unwrap_or(false))
        .cloned();

    let is_preflight = request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if is_preflight {
        let mut response = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = origin {
            policy.apply(response.headers_mut(), origin, Some(request.headers()));
        } else {
            tracing::debug!("Rejected preflight from disallowed origin");
        }
        return response;
    }

    let mut response = next.run(request).await;
    if let Some(origin) = origin {
        policy.apply(response.headers_mut(), origin, None);
    }
    response
}

async fn graphql_handler(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn has_query_param(request: &Request) -> bool {
    request
        .uri()
        .query()
        .is_some_and(|q| q.split('&').any(|pair| pair.starts_with("query=")))
}

/// GraphiQL for browsers asking for HTML without a query; otherwise the
/// query string is executed as a GraphQL request.
async fn graphql_get(State(state): State<ServerState>, request: Request) -> Response {
    if let Some(page) = &state.graphiql_page {
        if accepts_html(request.headers()) && !has_query_param(&request) {
            return Html(page.to_string()).into_response();
        }
    }

    match <GraphQLRequest as FromRequest<ServerState>>::from_request(request, &state).await {
        Ok(req) => GraphQLResponse::from(state.schema.execute(req.into_inner()).await)
            .into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

/// Build the HTTP router: GraphQL on POST and GET, GraphiQL on GET for
/// browsers, all at `settings.path`, wrapped in the CORS policy.
pub fn router(schema: AppSchema, settings: &ServerSettings) -> Router {
    let graphiql_page = settings
        .graphiql
        .then(|| Arc::from(GraphiQLSource::build().endpoint(&settings.path).finish()));
    let state = ServerState {
        schema,
        graphiql_page,
    };
    let policy = Arc::new(CorsPolicy::new(settings.cors_origins.clone()));

    Router::new()
        .route(&settings.path, post(graphql_handler).get(graphql_get))
        .layer(middleware::from_fn_with_state(policy, cors))
        .with_state(state)
}

/// Serve `schema` until Ctrl-C.
pub async fn run_server(schema: AppSchema, settings: &ServerSettings) -> Result<()> {
    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ShelfError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(
        edition = %schema.edition(),
        "Server running on http://{}{}",
        addr,
        settings.path
    );

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
