//! SeaORM adapter for the levels lookup table.
//!
//! Uniqueness of `name` is enforced by the database constraint; a
//! violation surfaces as a DbErr from `create` or `update_partial`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::levels;

pub mod dto;

pub use dto::{LevelCreate, LevelUpdate};

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<levels::Model>, sea_orm::DbErr> {
    levels::Entity::find()
        .order_by_asc(levels::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    level_id: i64,
) -> Result<Option<levels::Model>, sea_orm::DbErr> {
    levels::Entity::find()
        .filter(levels::Column::Id.eq(level_id))
        .order_by_asc(levels::Column::Id)
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LevelCreate,
) -> Result<levels::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let level_active = levels::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    };

    level_active.insert(conn).await
}

/// Partial update: only fields present in the DTO are written, plus
/// `updated_at`. Returns the number of rows affected.
pub async fn update_partial<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LevelUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let mut level_active = levels::ActiveModel {
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };
    if let Some(name) = dto.name {
        level_active.name = Set(name);
    }

    let result = levels::Entity::update_many()
        .set(level_active)
        .filter(levels::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    level_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = levels::Entity::delete_by_id(level_id).exec(conn).await?;
    Ok(result.rows_affected)
}
