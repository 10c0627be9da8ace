//! Client-side paged view over the server's game collection.
//!
//! The controller can be driven two ways. `load_page` and the `go_to_*`
//! helpers await the [`GamesApi`] directly. Event-loop callers that cannot
//! hold `&mut self` across an await split each fetch into `begin_load` and
//! `finish_load`; every `begin_load` issues a new ticket and only the most
//! recently issued ticket is applied, whatever order results arrive in.

use crate::dto::game::GameCreateRequest;
use crate::error::{Result, SharedError};
use crate::models::game::GameSummary;
use log::{debug, warn};

pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Remote collaborator serving the admin game collection
#[async_trait::async_trait(?Send)]
pub trait GamesApi {
    /// Fetches up to `count` games after skipping `skip`
    async fn fetch_games_page(&self, count: usize, skip: usize) -> Result<Vec<GameSummary>>;

    /// Creates a game and returns the stored record
    async fn create_game(&self, request: &GameCreateRequest) -> Result<GameSummary>;
}

/// One issued page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: u64,
    pub page: u32,
    pub count: usize,
    pub skip: usize,
}

/// What `finish_load` did with a completed request
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    Applied,
    Failed(SharedError),
    /// A later request was issued; the result was dropped
    Superseded,
}

#[derive(Debug, Clone)]
pub struct PageListController {
    page_size: usize,
    current_page: u32,
    items: Option<Vec<GameSummary>>,
    next_ticket: u64,
    outstanding: Option<PageRequest>,
}

impl Default for PageListController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageListController {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            items: None,
            next_ticket: 0,
            outstanding: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// `None` until the first page (or a local item) arrives
    pub fn items(&self) -> Option<&[GameSummary]> {
        self.items.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.outstanding.is_some()
    }

    /// The request whose result will be applied, if one is in flight
    pub fn outstanding(&self) -> Option<PageRequest> {
        self.outstanding
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading()
            && self
                .items
                .as_ref()
                .map_or(false, |items| items.len() >= self.page_size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Marks the controller loading and returns the request to send.
    ///
    /// Any request issued earlier is superseded.
    pub fn begin_load(&mut self, page: u32) -> Result<PageRequest> {
        if page == 0 {
            return Err(SharedError::Validation(
                "Page index starts at 1".to_string(),
            ));
        }

        let skip = usize::try_from(page - 1)
            .ok()
            .and_then(|index| index.checked_mul(self.page_size))
            .ok_or_else(|| SharedError::Validation(format!("Page {} is out of range", page)))?;

        self.next_ticket += 1;
        let request = PageRequest {
            ticket: self.next_ticket,
            page,
            count: self.page_size,
            skip,
        };

        if let Some(previous) = self.outstanding.replace(request) {
            debug!(
                "Page {} request (ticket {}) superseded by page {} (ticket {})",
                previous.page, previous.ticket, page, request.ticket
            );
        }
        debug!("Requesting page {} (count={}, skip={})", page, request.count, request.skip);
        Ok(request)
    }

    /// Applies the result of a request issued by `begin_load`.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<GameSummary>>) -> LoadOutcome {
        let request = match self.outstanding {
            Some(request) if request.ticket == ticket => request,
            _ => {
                debug!("Ignoring result for stale ticket {}", ticket);
                return LoadOutcome::Superseded;
            }
        };
        self.outstanding = None;

        match result {
            Ok(mut games) => {
                sort_by_end_desc(&mut games);
                debug!("Loaded {} games for page {}", games.len(), request.page);
                self.items = Some(games);
                self.current_page = request.page;
                LoadOutcome::Applied
            }
            Err(err) => {
                warn!("Failed to load page {}: {}", request.page, err);
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Request for the following page, or `None` when next is disabled or
    /// there is no next index
    pub fn next_page_request(&mut self) -> Option<PageRequest> {
        if !self.can_go_next() {
            return None;
        }
        let page = self.current_page.checked_add(1)?;
        self.begin_load(page).ok()
    }

    /// Request for the preceding page, or `None` on the first page
    pub fn previous_page_request(&mut self) -> Option<PageRequest> {
        if !self.can_go_previous() {
            return None;
        }
        self.begin_load(self.current_page - 1).ok()
    }

    pub async fn load_page<A: GamesApi + ?Sized>(&mut self, api: &A, page: u32) -> Result<()> {
        let request = self.begin_load(page)?;
        let result = api.fetch_games_page(request.count, request.skip).await;
        self.settle(request, result)
    }

    /// Returns `Ok(false)` without touching state when next is disabled.
    pub async fn go_to_next_page<A: GamesApi + ?Sized>(&mut self, api: &A) -> Result<bool> {
        match self.next_page_request() {
            Some(request) => {
                let result = api.fetch_games_page(request.count, request.skip).await;
                self.settle(request, result).map(|_| true)
            }
            None => Ok(false),
        }
    }

    /// Returns `Ok(false)` without touching state on the first page.
    pub async fn go_to_previous_page<A: GamesApi + ?Sized>(&mut self, api: &A) -> Result<bool> {
        match self.previous_page_request() {
            Some(request) => {
                let result = api.fetch_games_page(request.count, request.skip).await;
                self.settle(request, result).map(|_| true)
            }
            None => Ok(false),
        }
    }

    fn settle(&mut self, request: PageRequest, result: Result<Vec<GameSummary>>) -> Result<()> {
        match self.finish_load(request.ticket, result) {
            LoadOutcome::Failed(err) => Err(err),
            LoadOutcome::Applied | LoadOutcome::Superseded => Ok(()),
        }
    }

    /// Merges a locally created game into the current view and re-sorts.
    ///
    /// An existing entry with the same id is replaced.
    pub fn add_local_item(&mut self, item: GameSummary) -> Result<()> {
        item.validate_fields()?;

        let items = self.items.get_or_insert_with(Vec::new);
        items.retain(|existing| existing.id != item.id);
        debug!("Adding local game {} ({})", item.id, item.title);
        items.push(item);
        sort_by_end_desc(items);
        Ok(())
    }
}

/// Latest end first; `sort_by` is stable so equal ends keep their order
fn sort_by_end_desc(games: &mut [GameSummary]) {
    games.sort_by(|a, b| b.end.cmp(&a.end));
}
