pub mod models {
    pub mod game;
    pub mod lifecycle;
}

pub mod dto {
    pub mod game;
    pub mod common;
}

pub mod error;
pub mod pagination;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use models::{
    game::GameSummary,
    lifecycle::{classify, ColorToken, LifecycleState},
};

pub use dto::{
    game::GameCreateRequest,
    common::ErrorResponse,
};

pub use pagination::{GamesApi, LoadOutcome, PageListController, PageRequest, DEFAULT_PAGE_SIZE};

/// Route of the edit view for a game
pub fn edit_route(game_id: i64) -> String {
    format!("/admin/games/{}/info", game_id)
}
