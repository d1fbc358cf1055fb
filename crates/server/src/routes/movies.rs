use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// List all movies in creation order.
pub async fn list_movies(State(state): State<ServerState>) -> Json<Vec<Movie>> {
    Json(state.movies.get_all().await)
}

/// Fetch one movie; 404 with a deterministic message when the id is unknown.
pub async fn get_movie(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> Result<Json<Movie>, JsonApiError> {
    let movie = state.movies.get_one(id).await?;
    Ok(Json(movie))
}

/// Create a movie from a strict payload; unknown fields are a 400.
pub async fn create_movie(
    State(state): State<ServerState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> Result<(StatusCode, Json<bool>), JsonApiError> {
    let Json(input) = payload?;
    state.movies.create(input).await?;
    Ok((StatusCode::CREATED, Json(true)))
}

/// Merge a partial update into an existing movie.
pub async fn update_movie(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    payload: Result<Json<UpdateMovie>, JsonRejection>,
) -> Result<Json<bool>, JsonApiError> {
    let Json(patch) = payload?;
    state.movies.update(id, patch).await?;
    Ok(Json(true))
}

/// Delete a movie by id.
pub async fn delete_movie(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> Result<Json<bool>, JsonApiError> {
    state.movies.delete_one(id).await?;
    Ok(Json(true))
}
