use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::{
        aspect::{
            adjust_member_aspects, get_aspect_leaderboard, get_member_aspects, give_aspects,
        },
        guild::{get_all_guilds, register_guild},
        tome::{add_tome, get_tome_position, get_tomes, remove_tome},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/guilds", get(get_all_guilds).post(register_guild))
        .route(
            "/api/guilds/{guild_id}/tomes",
            get(get_tomes).post(add_tome),
        )
        .route(
            "/api/guilds/{guild_id}/tomes/{username}",
            get(get_tome_position).delete(remove_tome),
        )
        .route(
            "/api/guilds/{guild_id}/aspects",
            get(get_aspect_leaderboard).post(give_aspects),
        )
        .route(
            "/api/guilds/{guild_id}/aspects/{uuid}",
            get(get_member_aspects).post(adjust_member_aspects),
        )
        .layer(CorsLayer::permissive())
}
