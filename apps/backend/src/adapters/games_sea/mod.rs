//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; the web layer maps into AppError.

/// List games ordered by ascending id. `limit` and `offset` are assumed
/// to be clamped by the caller.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .order_by_asc(games::Column::Id)
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        level_count: Set(dto.level_count.unwrap_or(0)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Partial update: only fields present in the DTO are written, plus
/// `updated_at`. Returns the number of rows affected (0 means the id
/// did not match any row).
pub async fn update_partial<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let mut game_active = games::ActiveModel {
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };
    if let Some(name) = dto.name {
        game_active.name = Set(name);
    }
    if let Some(description) = dto.description {
        game_active.description = Set(description);
    }
    if let Some(level_count) = dto.level_count {
        game_active.level_count = Set(level_count);
    }

    let result = games::Entity::update_many()
        .set(game_active)
        .filter(games::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Delete by primary key. Returns the number of rows affected.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_by_id(game_id).exec(conn).await?;
    Ok(result.rows_affected)
}
