pub mod games;
pub mod levels;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use levels::Entity as Levels;
pub use levels::Model as Level;
