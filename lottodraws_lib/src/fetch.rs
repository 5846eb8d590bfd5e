//! Paginated fetch-and-accumulate pipeline, one game at a time.

use std::collections::HashSet;
use std::time::Duration;

use pilio_api::{Client, Game, HistoryQuery};

use crate::draws::Draw;
use crate::scrape::{self, CellGrammar};

/// Bounds for the pagination loop.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Stop once this many draws are accumulated.
    pub target_draws: usize,
    /// Hard cap on JSON requests per game.
    pub max_pages: u32,
    /// Politeness delay before each JSON request.
    pub page_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            target_draws: 100,
            max_pages: 10,
            page_delay: Duration::from_secs(1),
        }
    }
}

/// Fetches the draw history for one game: the initial listing page first,
/// then the JSON endpoint until the target count is reached.
///
/// Failures degrade softly. An unreachable listing page yields an empty
/// result; any error mid-pagination returns whatever has accumulated so far.
/// The caller decides whether the result is sufficient to act on.
///
/// The accumulator is an explicit value returned to the caller; nothing is
/// shared between games.
pub async fn fetch_game(client: &Client, game: Game, config: &FetchConfig) -> Vec<Draw> {
    let grammar = match CellGrammar::new() {
        Ok(grammar) => grammar,
        Err(e) => {
            tracing::error!("Extraction grammar failed to compile: {}", e);
            return Vec::new();
        }
    };

    tracing::info!("Fetching {} initial page...", game.name());
    let page = match client.list_page(game).await {
        Ok(html) => scrape::parse_list_page(&grammar, &html, game),
        Err(e) => {
            tracing::warn!("Error fetching initial page: {}", e);
            return Vec::new();
        }
    };
    let mut cursor = page.cursor;
    let mut draws = page.draws;
    let mut seen: HashSet<String> = draws.iter().map(|d| d.date.clone()).collect();
    tracing::info!("Initial: {} draws, cursor={}", draws.len(), cursor);

    for iteration in 0..config.max_pages {
        if draws.len() >= config.target_draws {
            break;
        }
        tokio::time::sleep(config.page_delay).await;

        tracing::info!("Fetching more data from API (iteration {})...", iteration + 1);
        let resp = match client.history(&HistoryQuery::new(game, cursor)).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Error fetching history page: {}", e);
                break;
            }
        };
        if resp.lotto.is_empty() {
            tracing::info!("No more data available");
            break;
        }

        for item in &resp.lotto {
            // The cursor advances past every entry, including ones the
            // grammar rejects or the dedup check drops.
            if let Some(dex) = item.dex {
                cursor = dex;
            }
            match grammar.extract_history_item(item) {
                Ok(draw) => {
                    if seen.insert(draw.date.clone()) {
                        draws.push(draw);
                    }
                }
                Err(e) => tracing::debug!("Skipping history entry: {}", e),
            }
        }
        tracing::info!("Total: {} draws", draws.len());
    }

    draws
}
