use sea_orm::DatabaseConnection;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used by both main and tests).
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    connection: Option<DatabaseConnection>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            connection: None,
        }
    }

    /// Connect to the database for `profile` when building.
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Use an already-established connection; takes precedence over a
    /// profile. Tests inject mock connections through this.
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.connection = Some(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(conn) = self.connection {
            return Ok(AppState::new(conn));
        }
        match self.db_profile {
            Some(profile) => {
                let conn = connect_db(profile).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_without_db_yields_stateless_app() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }
}
