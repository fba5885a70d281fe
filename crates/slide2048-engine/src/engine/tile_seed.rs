use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use crate::ParseTileSeedError;

/// Seed for deterministic tile spawning.
///
/// A 128-bit seed for the random number generator that picks where new tiles
/// appear and whether they are 2 or 4. Two sessions created with the same seed
/// and fed the same moves produce identical grids.
///
/// The textual form (used by `Display` and `FromStr`) is a 32-character hex
/// string.
///
/// # Example
///
/// ```
/// use slide2048_engine::{GameSession, TileSeed};
/// use rand::Rng as _;
///
/// let seed: TileSeed = rand::rng().random();
///
/// let session1 = GameSession::with_seed(seed);
/// let session2 = GameSession::with_seed(seed);
/// assert_eq!(session1.grid(), session2.grid());
///
/// let parsed: TileSeed = seed.to_string().parse().unwrap();
/// assert_eq!(parsed, seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSeed(pub(crate) [u8; 16]);

impl TileSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TileSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for TileSeed {
    type Err = ParseTileSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseTileSeedError::InvalidLength(s.len()));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|e| ParseTileSeedError::InvalidDigit(format!("{s} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Distribution<TileSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        TileSeed(seed)
    }
}
