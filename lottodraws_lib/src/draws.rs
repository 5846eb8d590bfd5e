//! Draw records and the merge rules applied before serialization.

use serde::{Deserialize, Serialize};

/// Records kept per game after sorting, newest first.
pub const MAX_DRAWS: usize = 100;

/// One lottery result: date, the six drawn numbers, and the bonus/special
/// number.
///
/// `date` is always `YYYY/MM/DD` with zero-padded month and day. Both games
/// share this canonical shape; they diverge only in the field names used at
/// serialization time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub date: String,
    pub numbers: [u8; 6],
    pub special: u8,
}

/// Big Lotto serialization shape: `{date, main, special}`.
#[derive(Serialize, Deserialize)]
pub struct BigLottoRecord {
    pub date: String,
    pub main: [u8; 6],
    pub special: u8,
}

impl From<&Draw> for BigLottoRecord {
    fn from(draw: &Draw) -> Self {
        Self {
            date: draw.date.clone(),
            main: draw.numbers,
            special: draw.special,
        }
    }
}

/// Super Lotto serialization shape: `{date, zone1, zone2}`.
#[derive(Serialize, Deserialize)]
pub struct SuperLottoRecord {
    pub date: String,
    pub zone1: [u8; 6],
    pub zone2: u8,
}

impl From<&Draw> for SuperLottoRecord {
    fn from(draw: &Draw) -> Self {
        Self {
            date: draw.date.clone(),
            zone1: draw.numbers,
            zone2: draw.special,
        }
    }
}

/// Sorts newest-first and caps the collection at [`MAX_DRAWS`].
///
/// The comparison is lexicographic on the date string, which is correct only
/// while dates stay zero-padded and year-first. If the date representation
/// ever changes, this must move to a parsed-date comparison.
pub fn finalize(mut draws: Vec<Draw>) -> Vec<Draw> {
    draws.sort_by(|a, b| b.date.cmp(&a.date));
    draws.truncate(MAX_DRAWS);
    draws
}
