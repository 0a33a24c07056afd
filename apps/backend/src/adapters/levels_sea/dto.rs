//! DTOs for the levels_sea adapter.

/// DTO for creating a new level.
#[derive(Debug, Clone, Default)]
pub struct LevelCreate {
    pub name: String,
}

impl LevelCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// DTO for a partial level update keyed by id.
#[derive(Debug, Clone)]
pub struct LevelUpdate {
    pub id: i64,
    pub name: Option<String>,
}

impl LevelUpdate {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when no column would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
