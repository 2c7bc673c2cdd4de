use crate::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const GRAPHQL_PATH: &str = "/graphql";

pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// Serves the interactive explorer on GET when it is enabled.
pub async fn graphiql_handler(State(state): State<AppState>) -> Response {
    if !state.graphiql {
        return (StatusCode::NOT_FOUND, "GraphiQL is disabled").into_response();
    }

    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}
