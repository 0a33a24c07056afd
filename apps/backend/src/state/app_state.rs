use sea_orm::DatabaseConnection;

/// Application state shared across workers.
#[derive(Debug, Default)]
pub struct AppState {
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State without a database connection; handlers that need one will
    /// answer with a database-unavailable error.
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
