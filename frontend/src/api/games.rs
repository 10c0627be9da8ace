use shared::{GameCreateRequest, GameSummary, GamesApi, Result, SharedError};
use log::debug;
use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, ensure_success, network_error};

const ADMIN_GAMES_PATH: &str = "/api/edit/games";

pub fn games_page_url(count: usize, skip: usize) -> String {
    format!("{}?count={}&skip={}", api_url(ADMIN_GAMES_PATH), count, skip)
}

/// `GamesApi` over the admin REST endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpGamesApi;

#[async_trait::async_trait(?Send)]
impl GamesApi for HttpGamesApi {
    async fn fetch_games_page(&self, count: usize, skip: usize) -> Result<Vec<GameSummary>> {
        debug!("Fetching games page (count={}, skip={})", count, skip);

        let response = authenticated_get(&games_page_url(count, skip))
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response).await?;

        let games = response
            .json::<Vec<GameSummary>>()
            .await
            .map_err(|e| SharedError::Conversion(format!("Failed to parse games response: {}", e)))?;

        debug!("Successfully fetched {} games", games.len());
        Ok(games)
    }

    async fn create_game(&self, request: &GameCreateRequest) -> Result<GameSummary> {
        debug!("Creating game: {}", request.title);

        let response = authenticated_post(&api_url(ADMIN_GAMES_PATH))
            .json(request)
            .map_err(|e| SharedError::Conversion(format!("Failed to serialize game: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response).await?;

        let game = response
            .json::<GameSummary>()
            .await
            .map_err(|e| SharedError::Conversion(format!("Failed to parse game response: {}", e)))?;

        debug!("Successfully created game {} ({})", game.id, game.title);
        Ok(game)
    }
}
