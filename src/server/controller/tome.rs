use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::tome::AddTomeDto,
    server::{error::AppError, service::tome::TomeService, state::AppState},
};

pub async fn get_tomes(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tome_service = TomeService::new(&state.registry);

    let tomes = tome_service.get_all(&guild_id).await?;

    Ok((StatusCode::OK, Json(tomes)))
}

pub async fn add_tome(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    Json(payload): Json<AddTomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let tome_service = TomeService::new(&state.registry);

    let tome = tome_service.add(&guild_id, &payload.username).await?;

    Ok((StatusCode::CREATED, Json(tome)))
}

pub async fn get_tome_position(
    State(state): State<AppState>,
    Path((guild_id, username)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let tome_service = TomeService::new(&state.registry);

    let position = tome_service.get_position(&guild_id, &username).await?;

    Ok((StatusCode::OK, Json(position)))
}

pub async fn remove_tome(
    State(state): State<AppState>,
    Path((guild_id, username)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let tome_service = TomeService::new(&state.registry);

    tome_service.remove(&guild_id, &username).await?;

    Ok(StatusCode::NO_CONTENT)
}
