//! Game identifiers and the history query builder.

use std::str::FromStr;

use url::Url;

/// The two lottery games published on pilio.idv.tw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
    /// 大樂透: 6 main numbers plus a special number.
    BigLotto,
    /// 威力彩: 6 zone-1 numbers plus a zone-2 number.
    SuperLotto,
}

impl Game {
    /// Human-readable name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Game::BigLotto => "Big Lotto",
            Game::SuperLotto => "Super Lotto",
        }
    }

    /// `Lkind` value the JSON endpoint expects for this game.
    pub fn kind(self) -> &'static str {
        match self {
            Game::BigLotto => "ltobig",
            Game::SuperLotto => "lto",
        }
    }

    /// Path of the HTML listing page for this game.
    pub fn list_path(self) -> &'static str {
        match self {
            Game::BigLotto => "/ltobig/list.asp",
            Game::SuperLotto => "/lto/list.asp",
        }
    }

    /// Cursor to fall back on when the listing page carries no `lastindex`
    /// field.
    pub fn default_cursor(self) -> i64 {
        match self {
            Game::BigLotto => 2383,
            Game::SuperLotto => 1000,
        }
    }
}

/// Sort order for history results.
#[derive(Clone, Copy, Default)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first. This is the default.
    #[default]
    Desc,
}

impl SortOrder {
    fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Query for the `Json_ltonew.asp` history endpoint.
#[derive(Clone, Copy)]
pub struct HistoryQuery {
    /// Which game to page through.
    pub game: Game,
    /// Pagination cursor (`Lindex`): the index of the oldest record already
    /// seen.
    pub index: i64,
    /// Sort order (`Ldesc`). Defaults to descending.
    pub order: SortOrder,
}

impl HistoryQuery {
    /// Creates a query for the given game and cursor, sorted descending.
    pub fn new(game: Game, index: i64) -> Self {
        Self {
            game,
            index,
            order: SortOrder::default(),
        }
    }

    /// Sets the sort order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Appends the `Lkind`/`Lindex`/`Ldesc` parameters to the given URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("Lkind", self.game.kind())
            .append_pair("Lindex", &self.index.to_string())
            .append_pair("Ldesc", self.order.as_param());
        url
    }
}
