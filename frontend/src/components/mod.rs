pub mod common_modal;
pub mod game_create_modal;
pub mod status_badge;
