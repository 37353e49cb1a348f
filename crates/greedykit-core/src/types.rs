//! Value types shared by the kernels.
//!
//! A road is a left-to-right sequence of cars, each described by a single
//! [`Direction`]. The text form uses one character per car: `L`, `R`, `S`.

use crate::error::{GreedyError, Result};
use std::fmt;
use std::str::FromStr;

/// Motion state of one car on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Moving towards the left end of the road.
    Left,
    /// Moving towards the right end of the road.
    Right,
    /// Not moving.
    Stationary,
}

impl Direction {
    /// All directions, in text-symbol order `L`, `R`, `S`.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Stationary];

    /// The single-character text form.
    pub const fn as_char(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Stationary => 'S',
        }
    }

    /// Whether the car is moving.
    pub const fn is_moving(self) -> bool {
        !matches!(self, Self::Stationary)
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(symbol: char) -> std::result::Result<Self, Self::Error> {
        match symbol {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            'S' => Ok(Self::Stationary),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A non-empty sequence of cars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Direction>", into = "Vec<Direction>"))]
pub struct Road {
    cars: Vec<Direction>,
}

impl Road {
    /// Build a road from an explicit list of cars.
    pub fn new(cars: Vec<Direction>) -> Result<Self> {
        if cars.is_empty() {
            return Err(GreedyError::empty("road"));
        }
        Ok(Self { cars })
    }

    /// The cars from left to right.
    pub fn as_slice(&self) -> &[Direction] {
        &self.cars
    }

    /// Number of cars.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Always false; a road holds at least one car.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl TryFrom<Vec<Direction>> for Road {
    type Error = GreedyError;

    fn try_from(cars: Vec<Direction>) -> Result<Self> {
        Self::new(cars)
    }
}

impl From<Road> for Vec<Direction> {
    fn from(road: Road) -> Self {
        road.cars
    }
}

impl FromStr for Road {
    type Err = GreedyError;

    fn from_str(text: &str) -> Result<Self> {
        let cars = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Direction::try_from(symbol)
                    .map_err(|symbol| GreedyError::invalid_symbol(symbol, position))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(cars)
    }
}

impl AsRef<[Direction]> for Road {
    fn as_ref(&self) -> &[Direction] {
        &self.cars
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for car in &self.cars {
            write!(f, "{car}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_symbols() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.as_char()), Ok(direction));
        }
        assert_eq!(Direction::try_from('l'), Err('l'));
        assert!(!Direction::Stationary.is_moving());
        assert!(Direction::Left.is_moving());
    }

    #[test]
    fn test_road_parsing() {
        let road: Road = "RLRSLL".parse().unwrap();
        assert_eq!(road.len(), 6);
        assert_eq!(road.as_slice()[3], Direction::Stationary);
        assert_eq!(road.to_string(), "RLRSLL");
    }

    #[test]
    fn test_road_rejects_bad_text() {
        assert_eq!("".parse::<Road>(), Err(GreedyError::empty("road")));
        assert_eq!(
            "RLxS".parse::<Road>(),
            Err(GreedyError::invalid_symbol('x', 2))
        );
        assert!(Road::new(Vec::new()).is_err());
    }
}
