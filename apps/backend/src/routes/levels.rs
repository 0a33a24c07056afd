//! Level lookup resource HTTP routes.
//!
//! Same contract as the game routes, except the create body is plain
//! JSON. Name uniqueness is delegated to the database constraint; a
//! violation surfaces as a database error on create or update.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::adapters::levels_sea::{self, LevelCreate, LevelUpdate};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::http::body::decode_json;
use crate::routes::pagination::{Page, PageQuery};
use crate::routes::parse_id;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LevelCreatePayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LevelUpdatePayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

/// GET /levels?limit=&offset=
async fn list_levels(
    app_state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = Page::from_query(&query)?;

    let levels = with_txn(&app_state, |txn| {
        Box::pin(async move {
            levels_sea::list(txn, page.limit, page.offset)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(levels))
}

/// GET /levels/{id}
async fn get_level(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let level = with_txn(&app_state, |txn| {
        Box::pin(async move { levels_sea::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await?
    .ok_or_else(|| AppError::not_found(format!("level {id} not found")))?;

    Ok(HttpResponse::Ok().json(level))
}

/// POST /levels
async fn create_level(
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload: LevelCreatePayload = decode_json(&body)?;
    payload
        .validate()
        .map_err(|e| AppError::validation("LEVEL_VALIDATION", e.to_string()))?;

    let dto = LevelCreate { name: payload.name };

    with_txn(&app_state, |txn| {
        Box::pin(async move { levels_sea::create(txn, dto).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().finish())
}

/// PUT/PATCH /levels/{id}
async fn update_level(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let payload: LevelUpdatePayload = decode_json(&body)?;
    payload
        .validate()
        .map_err(|e| AppError::validation("LEVEL_VALIDATION", e.to_string()))?;

    let dto = LevelUpdate {
        id,
        name: payload.name,
    };
    if dto.is_empty() {
        return Err(AppError::bad_request(
            "UPDATE_EMPTY",
            "no updatable fields in payload".to_string(),
        ));
    }

    let rows_affected = with_txn(&app_state, |txn| {
        Box::pin(async move {
            levels_sea::update_partial(txn, dto)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    if rows_affected == 0 {
        return Err(AppError::not_found(format!("level {id} not found")));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /levels/{id}
async fn delete_level(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let rows_affected = with_txn(&app_state, |txn| {
        Box::pin(async move {
            levels_sea::delete_by_id(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    if rows_affected == 0 {
        return Err(AppError::not_found(format!("level {id} not found")));
    }

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_levels))
            .route(web::post().to(create_level)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_level))
            .route(web::put().to(update_level))
            .route(web::patch().to(update_level))
            .route(web::delete().to(delete_level)),
    );
}
