//! Game resource HTTP routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::adapters::games_sea::{self, GameCreate, GameUpdate};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::http::body::{decode_encoded_json, decode_json};
use crate::routes::pagination::{Page, PageQuery};
use crate::routes::parse_id;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct GameCreatePayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "level_count must not be negative"))]
    pub level_count: Option<i32>,
}

/// Partial update payload. Absent fields are left untouched; for the
/// nullable `description`, a present `null` clears the column.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GameUpdatePayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0, message = "level_count must not be negative"))]
    pub level_count: Option<i32>,
}

/// GET /games?limit=&offset=
async fn list_games(
    app_state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = Page::from_query(&query)?;

    let games = with_txn(&app_state, |txn| {
        Box::pin(async move {
            games_sea::list(txn, page.limit, page.offset)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(games))
}

/// GET /games/{id}
async fn get_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let game = with_txn(&app_state, |txn| {
        Box::pin(async move { games_sea::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await?
    .ok_or_else(|| AppError::not_found(format!("game {id} not found")))?;

    Ok(HttpResponse::Ok().json(game))
}

/// POST /games
///
/// The body is base64(gzip(JSON)); this framing applies to the game
/// create endpoint only.
async fn create_game(
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload: GameCreatePayload = decode_encoded_json(&body)?;
    payload
        .validate()
        .map_err(|e| AppError::validation("GAME_VALIDATION", e.to_string()))?;

    let dto = GameCreate {
        name: payload.name,
        description: payload.description,
        level_count: payload.level_count,
    };

    with_txn(&app_state, |txn| {
        Box::pin(async move { games_sea::create(txn, dto).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().finish())
}

/// PUT/PATCH /games/{id}
///
/// The path id wins over anything in the body.
async fn update_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let payload: GameUpdatePayload = decode_json(&body)?;
    payload
        .validate()
        .map_err(|e| AppError::validation("GAME_VALIDATION", e.to_string()))?;

    let dto = GameUpdate {
        id,
        name: payload.name,
        description: payload.description,
        level_count: payload.level_count,
    };
    if dto.is_empty() {
        return Err(AppError::bad_request(
            "UPDATE_EMPTY",
            "no updatable fields in payload".to_string(),
        ));
    }

    let rows_affected = with_txn(&app_state, |txn| {
        Box::pin(async move {
            games_sea::update_partial(txn, dto)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    if rows_affected == 0 {
        return Err(AppError::not_found(format!("game {id} not found")));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /games/{id}
async fn delete_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let rows_affected = with_txn(&app_state, |txn| {
        Box::pin(async move {
            games_sea::delete_by_id(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    if rows_affected == 0 {
        return Err(AppError::not_found(format!("game {id} not found")));
    }

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_game))
            .route(web::put().to(update_game))
            .route(web::patch().to(update_game))
            .route(web::delete().to(delete_game)),
    );
}
