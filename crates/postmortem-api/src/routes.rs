use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auction::generate_auction;
use crate::error::ApiError;
use crate::gateway::acbl::AcblClient;
use crate::gateway::ffbridge::FfbridgeClient;
use bridge_tabular::SessionKeys;

#[derive(Clone)]
pub struct AppState {
    pub ffbridge: FfbridgeClient,
    pub acbl: AcblClient,
}

#[derive(Debug, Deserialize)]
pub struct DealRequest {
    pub pbn: String,
}

#[derive(Debug, Serialize)]
pub struct AuctionResponse {
    pub auction: Vec<String>,
    pub explanation: String,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/get_auction", post(get_auction))
        .route(
            "/ffbridge.fr/competitions/results/groups/:group_id/sessions/:session_id/pairs/:pair_id",
            get(get_ffbridge_data),
        )
        .route("/acbl/club/player_id/:player_id", get(get_acbl_club_player))
        .route("/acbl/club/results/:acbl_number", get(get_acbl_club_results))
        .route(
            "/acbl/tournament/player_id/:player_id",
            get(get_acbl_tournament_player),
        )
        .route(
            "/acbl/tournament/session/:session_id",
            get(get_acbl_tournament_session),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to Bridge Postmortem API"}))
}

async fn get_auction(
    Json(request): Json<DealRequest>,
) -> Result<Json<AuctionResponse>, ApiError> {
    let (auction, explanation) = generate_auction(&request.pbn)?;
    Ok(Json(AuctionResponse {
        auction,
        explanation,
    }))
}

async fn get_ffbridge_data(
    State(state): State<AppState>,
    Path((group_id, session_id, pair_id)): Path<(u32, u32, u32)>,
) -> Result<Json<Value>, ApiError> {
    let keys = SessionKeys {
        group_id,
        session_id,
        team_id: pair_id,
    };
    let table = state.ffbridge.team_session_table(&keys).await?;
    Ok(Json(json!({"success": true, "data": table})))
}

async fn get_acbl_club_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let data = state
        .acbl
        .club_player_history(&player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club player not found".to_string()))?;
    Ok(Json(json!({"success": true, "data": data})))
}

async fn get_acbl_club_results(
    State(state): State<AppState>,
    Path(acbl_number): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let results = state
        .acbl
        .club_results(&acbl_number)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club results not found".to_string()))?;
    Ok(Json(json!({
        "success": true,
        "data": {"acbl_number": acbl_number, "club_results": results},
    })))
}

async fn get_acbl_tournament_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let data = state
        .acbl
        .tournament_player_history(&player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tournament player not found".to_string()))?;
    Ok(Json(json!({"success": true, "data": data})))
}

async fn get_acbl_tournament_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let data = state
        .acbl
        .tournament_session_results(&session_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tournament session not found".to_string()))?;
    Ok(Json(json!({"success": true, "data": data})))
}
