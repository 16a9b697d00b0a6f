use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::guild::RegisterGuildDto,
    server::{error::AppError, service::guild::GuildService, state::AppState},
};

pub async fn get_all_guilds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let guild_service = GuildService::new(&state.provisioner);

    let guilds = guild_service.get_all().await?;

    Ok((StatusCode::OK, Json(guilds)))
}

pub async fn register_guild(
    State(state): State<AppState>,
    Json(payload): Json<RegisterGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    let guild_service = GuildService::new(&state.provisioner);

    let guild = guild_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(guild)))
}
