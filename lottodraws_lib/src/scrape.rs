//! Extraction grammar for the pilio listing pages and history entries.

use regex::Regex;

use pilio_api::types::HistoryItem;
use pilio_api::Game;

use crate::draws::Draw;

/// Marker that opens each draw cell on the listing page.
const CELL_MARKER: &str = "<td class=\"date-cell\">";

/// Errors from the extraction grammar. Callers generally skip the offending
/// cell rather than aborting the page.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("regex compile error: {0}")]
    Grammar(#[from] regex::Error),
    #[error("no date found in cell")]
    MissingDate,
    #[error("no number cell found")]
    MissingNumbers,
    #[error("expected at least 6 numbers, found {found}")]
    TooFewNumbers { found: usize },
    #[error("no bonus cell found")]
    MissingBonus,
}

/// Compiled extraction rules for one draw cell.
///
/// The listing markup is scraped with patterns rather than a DOM. Keeping
/// all the rules behind this one type means markup drift only ever touches
/// this module; fetch and merge code never see raw HTML.
pub struct CellGrammar {
    date: Regex,
    number_cell: Regex,
    bonus_cell: Regex,
    digits: Regex,
    last_index: Regex,
}

impl CellGrammar {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            date: Regex::new(r"(\d{2}/\d{2})<br>(\d{2})")?,
            number_cell: Regex::new(r#"(?s)class="number-cell">\s*(.*?)\s*</td>"#)?,
            bonus_cell: Regex::new(r#"class="bonus-cell">\s*(\d+)\s*</td>"#)?,
            digits: Regex::new(r"\d+")?,
            last_index: Regex::new(r#"id="lastindex"[^>]*value="(\d+)""#)?,
        })
    }

    /// Extracts one draw from a cell fragment. All three rules must match;
    /// the first six numbers are kept.
    pub fn extract(&self, cell: &str) -> Result<Draw, ParseError> {
        let date = self.extract_date(cell)?;
        let number_text = self
            .number_cell
            .captures(cell)
            .ok_or(ParseError::MissingNumbers)?;
        let numbers = self.extract_numbers(&number_text[1])?;
        let special = self
            .bonus_cell
            .captures(cell)
            .and_then(|caps| caps[1].parse().ok())
            .ok_or(ParseError::MissingBonus)?;
        Ok(Draw {
            date,
            numbers,
            special,
        })
    }

    /// Parses one JSON history entry into a draw. The date grammar is shared
    /// with the HTML cells; `sp` falls back to 0 when non-numeric.
    pub fn extract_history_item(&self, item: &HistoryItem) -> Result<Draw, ParseError> {
        let date = self.extract_date(&item.date)?;
        let numbers = self.extract_numbers(&item.num)?;
        let special = item.sp.trim().parse().unwrap_or(0);
        Ok(Draw {
            date,
            numbers,
            special,
        })
    }

    /// Rebuilds the 4-digit-year date from a `"MM/DD<br>YY"` fragment.
    fn extract_date(&self, text: &str) -> Result<String, ParseError> {
        let caps = self.date.captures(text).ok_or(ParseError::MissingDate)?;
        Ok(format!("20{}/{}", &caps[2], &caps[1]))
    }

    /// Collects digit groups from a separator-delimited number list.
    fn extract_numbers(&self, text: &str) -> Result<[u8; 6], ParseError> {
        let cleaned = text.replace("&nbsp;", " ").replace(',', " ");
        let parsed: Vec<u8> = self
            .digits
            .find_iter(&cleaned)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        if parsed.len() < 6 {
            return Err(ParseError::TooFewNumbers {
                found: parsed.len(),
            });
        }
        let mut numbers = [0u8; 6];
        numbers.copy_from_slice(&parsed[..6]);
        Ok(numbers)
    }
}

/// A parsed listing page: the extractable draws plus the pagination cursor.
pub struct ListPage {
    pub draws: Vec<Draw>,
    pub cursor: i64,
}

/// Splits the page on the cell marker and extracts every parseable cell;
/// cells the grammar rejects are dropped. The cursor comes from the hidden
/// `lastindex` input, or the game's default when the field is absent.
pub fn parse_list_page(grammar: &CellGrammar, html: &str, game: Game) -> ListPage {
    let mut draws = Vec::new();
    for cell in html.split(CELL_MARKER).skip(1) {
        match grammar.extract(cell) {
            Ok(draw) => draws.push(draw),
            Err(e) => tracing::debug!("Skipping cell: {}", e),
        }
    }
    let cursor = grammar
        .last_index
        .captures(html)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or_else(|| game.default_cursor());
    ListPage { draws, cursor }
}
