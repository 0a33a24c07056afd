//! DTOs for the games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub name: String,
    pub description: Option<String>,
    pub level_count: Option<i32>,
}

impl GameCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            level_count: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_level_count(mut self, level_count: i32) -> Self {
        self.level_count = Some(level_count);
        self
    }
}

/// DTO for a partial game update keyed by id.
///
/// `description` is three-state: None = no change, Some(Some(text)) = set,
/// Some(None) = clear.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub level_count: Option<i32>,
}

impl GameUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            description: None,
            level_count: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn with_level_count(mut self, level_count: i32) -> Self {
        self.level_count = Some(level_count);
        self
    }

    /// True when no column would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.level_count.is_none()
    }
}
