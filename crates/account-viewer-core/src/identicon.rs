//! Deterministic avatar pattern derived from an account id.

use crate::key::PublicKey;

pub const IDENTICON_SIZE: usize = 7;

/// Columns that carry information; the rest mirror them.
const HALF_WIDTH: usize = IDENTICON_SIZE / 2 + 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f32,
    cells: [[bool; IDENTICON_SIZE]; IDENTICON_SIZE],
}

impl Identicon {
    /// Returns `None` when the key is missing or is not a valid account id.
    pub fn from_public_key(public_key: Option<&str>) -> Option<Self> {
        let key = PublicKey::parse(public_key?).ok()?;
        Some(Self::from_key(&key))
    }

    pub fn from_key(key: &PublicKey) -> Self {
        let raw = key.raw_bytes();
        let hue = raw[0] as f32 / 256.0 * 360.0;
        let bits = u32::from_be_bytes([raw[1], raw[2], raw[3], raw[4]]);

        let mut cells = [[false; IDENTICON_SIZE]; IDENTICON_SIZE];
        for index in 0..IDENTICON_SIZE * HALF_WIDTH {
            let row = index / HALF_WIDTH;
            let col = index % HALF_WIDTH;
            let filled = bits & (1 << (31 - index)) != 0;
            cells[row][col] = filled;
            cells[row][IDENTICON_SIZE - 1 - col] = filled;
        }

        Self { hue, cells }
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| (row, col))
        })
    }
}
