use std::str::FromStr;

use crate::ParseDirectionError;

/// A direction in which all tiles on the grid slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const LEN: usize = 4;
    pub const ALL: [Self; Self::LEN] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns which end of each extracted line the tiles move toward.
    ///
    /// Rows are extracted left to right and columns top to bottom, so `Left`
    /// and `Up` move toward index 0 while `Right` and `Down` move toward index 3.
    #[must_use]
    pub const fn towards(self) -> Towards {
        match self {
            Self::Up | Self::Left => Towards::Start,
            Self::Down | Self::Right => Towards::End,
        }
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError::new(s))
    }
}

/// The end of a line that tiles slide toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Towards {
    /// Toward index 0.
    Start,
    /// Toward index 3.
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_towards() {
        assert_eq!(Direction::Left.towards(), Towards::Start);
        assert_eq!(Direction::Up.towards(), Towards::Start);
        assert_eq!(Direction::Right.towards(), Towards::End);
        assert_eq!(Direction::Down.towards(), Towards::End);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert!(err.to_string().contains("diagonal"));
        assert!("".parse::<Direction>().is_err());
    }
}
