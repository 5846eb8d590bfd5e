//! Library layer for lottodraws: extraction grammar, fetch pipeline, and
//! data-module serialization.
//!
//! Wraps the `pilio_api` crate with the cell grammar for the Big5 listing
//! pages, the paginated accumulation loop, and the generated-file writer
//! that produces the JavaScript module consumed by the front end.

pub mod datafile;
pub mod draws;
pub mod fetch;
pub mod scrape;

pub use pilio_api;
pub use pilio_api::{Client, Game, HistoryQuery, SortOrder};

pub use draws::{finalize, BigLottoRecord, Draw, SuperLottoRecord, MAX_DRAWS};
pub use fetch::{fetch_game, FetchConfig};
pub use scrape::{parse_list_page, CellGrammar, ListPage, ParseError};
