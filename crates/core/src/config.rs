//! Startup configuration
//!
//! The game takes one grid dimension and one symbol pool, fixed for the life
//! of the process.
//!
//! # Environment Variables
//!
//! - `MEMORY_DIMENSION`: grid side length (default: 4)
//! - `MEMORY_SYMBOLS`: symbol pool; every visible char is one symbol,
//!   whitespace and zero-width chars are skipped (default: the ten food glyphs)
//! - `MEMORY_SEED`: RNG seed (default: derived from the system clock)

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use unicode_width::UnicodeWidthChar;

use crate::board::{check_dimension, distinct_symbols, pairs_for};
use crate::types::{DealError, Symbol, DEFAULT_DIMENSION, DEFAULT_SYMBOLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dimension: u8,
    pub symbols: Vec<Symbol>,
}

impl GameConfig {
    pub fn new(dimension: u8, symbols: Vec<Symbol>) -> Self {
        Self { dimension, symbols }
    }

    pub fn from_env() -> Result<Self, DealError> {
        Self::from_values(
            env::var("MEMORY_DIMENSION").ok().as_deref(),
            env::var("MEMORY_SYMBOLS").ok().as_deref(),
        )
    }

    /// Build from raw variable values.
    ///
    /// A missing dimension falls back to the default; one that is present but
    /// not a number in `0..=255` is an error. A missing or blank pool falls
    /// back to the default symbols.
    pub fn from_values(
        dimension: Option<&str>,
        symbols: Option<&str>,
    ) -> Result<Self, DealError> {
        let dimension = match dimension {
            None => DEFAULT_DIMENSION,
            Some(raw) => raw.trim().parse::<u8>().map_err(|_| {
                DealError::InvalidArgument(format!("dimension {:?} is not a valid size", raw))
            })?,
        };

        let symbols = symbols
            .map(parse_symbols)
            .filter(|pool| !pool.is_empty())
            .unwrap_or_else(|| DEFAULT_SYMBOLS.to_vec());

        Ok(Self { dimension, symbols })
    }

    /// Check both dealing preconditions before any round is dealt.
    pub fn validate(&self) -> Result<(), DealError> {
        check_dimension(self.dimension)?;

        let required = pairs_for(self.dimension);
        let available = distinct_symbols(&self.symbols).len();
        if available < required {
            return Err(DealError::InsufficientSymbols {
                required,
                available,
            });
        }
        Ok(())
    }

}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION, DEFAULT_SYMBOLS.to_vec())
    }
}

/// Split a pool string into symbols, one per visible char.
///
/// Whitespace and zero-width chars (variation selectors, joiners) are dropped
/// so they can never end up as a blank card face.
pub fn parse_symbols(s: &str) -> Vec<Symbol> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| matches!(UnicodeWidthChar::width(*c), Some(w) if w > 0))
        .map(Symbol::from)
        .collect()
}

/// Seed from `MEMORY_SEED`, or from the system clock when unset.
pub fn seed_from_env() -> u32 {
    env::var("MEMORY_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
}
