//! SeaORM adapters - the only layer that talks to the database.

pub mod games_sea;
pub mod levels_sea;
