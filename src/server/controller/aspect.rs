use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::aspect::{AdjustAspectsDto, GiveAspectsDto},
    server::{error::AppError, service::aspect::AspectService, state::AppState},
};

pub async fn get_aspect_leaderboard(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let aspect_service = AspectService::new(&state.registry);

    let leaderboard = aspect_service.get_leaderboard(&guild_id).await?;

    Ok((StatusCode::OK, Json(leaderboard)))
}

pub async fn get_member_aspects(
    State(state): State<AppState>,
    Path((guild_id, uuid)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let aspect_service = AspectService::new(&state.registry);

    let record = aspect_service.get(&guild_id, &uuid).await?;

    Ok((StatusCode::OK, Json(record)))
}

pub async fn adjust_member_aspects(
    State(state): State<AppState>,
    Path((guild_id, uuid)): Path<(String, String)>,
    Json(payload): Json<AdjustAspectsDto>,
) -> Result<impl IntoResponse, AppError> {
    let aspect_service = AspectService::new(&state.registry);

    let record = aspect_service.adjust(&guild_id, &uuid, payload.delta).await?;

    Ok((StatusCode::OK, Json(record)))
}

pub async fn give_aspects(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    Json(payload): Json<GiveAspectsDto>,
) -> Result<impl IntoResponse, AppError> {
    let aspect_service = AspectService::new(&state.registry);

    let records = aspect_service.give(&guild_id, &payload.users).await?;

    Ok((StatusCode::OK, Json(records)))
}
