use shared::DEFAULT_PAGE_SIZE;

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs: the dev server and the production nginx both proxy /api/ to the backend
        "".to_string()
    }

    /// Rows per page on the admin games list
    pub fn games_page_size() -> usize {
        DEFAULT_PAGE_SIZE
    }
}
