//! Collision counting on a one-lane road.
//!
//! Cars sit at distinct positions on an infinite line and all move at the same
//! speed. When two cars moving towards each other meet, the collision counts 2;
//! when a moving car runs into a stationary one, it counts 1. Cars that collide
//! stop where they are and become obstacles themselves.
//!
//! Rather than simulating the road, the count is obtained in closed form:
//!
//! 1. Cars in the maximal `L` prefix drive off the left end and never meet
//!    anything.
//! 2. Cars in the maximal `R` suffix drive off the right end.
//! 3. What remains starts with `R` or `S` and ends with `L` or `S`, so every
//!    moving car inside it is eventually blocked. Each one contributes exactly
//!    1 to the total, whether it hits a stationary car or an oncoming one.
//!
//! [`simulate_collisions`] keeps an event-by-event scan of the same rule as an
//! independent check.

use crate::error::{GreedyError, Result};
use crate::types::{Direction, Road};
use log::trace;
use std::ops::Range;

/// Step-by-step view of the closed-form reduction for a single road.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionBreakdown {
    /// Number of cars trimmed from the left end (all moving left).
    pub leading_left: usize,
    /// Number of cars trimmed from the right end (all moving right).
    pub trailing_right: usize,
    /// Index range of the cars that remain after trimming.
    pub interior: Range<usize>,
    /// Stationary cars inside the interior.
    pub stationary: usize,
    /// Total number of collisions on the road.
    pub collisions: u64,
}

impl CollisionBreakdown {
    /// Run the trim-and-count reduction over `cars`.
    pub fn analyze(cars: &[Direction]) -> Result<Self> {
        if cars.is_empty() {
            return Err(GreedyError::empty("road"));
        }

        let leading_left = cars
            .iter()
            .take_while(|&&car| car == Direction::Left)
            .count();
        let trailing_right = cars[leading_left..]
            .iter()
            .rev()
            .take_while(|&&car| car == Direction::Right)
            .count();
        let interior = leading_left..cars.len() - trailing_right;

        let stationary = cars[interior.clone()]
            .iter()
            .filter(|car| !car.is_moving())
            .count();
        let collisions = (interior.len() - stationary) as u64;

        trace!(
            "trimmed {leading_left} leading L and {trailing_right} trailing R, {} cars left ({stationary} stationary)",
            interior.len()
        );

        Ok(Self {
            leading_left,
            trailing_right,
            interior,
            stationary,
            collisions,
        })
    }

    /// Number of moving cars left after trimming.
    pub fn moving(&self) -> usize {
        self.interior.len() - self.stationary
    }
}

/// Count the collisions that occur on `cars`.
///
/// # Example
/// ```
/// use greedykit_core::collisions::count_collisions;
/// use greedykit_core::types::Direction::{Left as L, Right as R, Stationary as S};
///
/// assert_eq!(count_collisions(&[R, L, R, S, L, L]).unwrap(), 5);
/// ```
pub fn count_collisions(cars: &[Direction]) -> Result<u64> {
    CollisionBreakdown::analyze(cars).map(|breakdown| breakdown.collisions)
}

/// Count the collisions for a road given in `L`/`R`/`S` text form.
pub fn count_collisions_str(text: &str) -> Result<u64> {
    let road: Road = text.parse()?;
    count_collisions(road.as_slice())
}

/// Count collisions by scanning the road left to right and resolving each
/// crash as it happens.
///
/// Runs in linear time and agrees with [`count_collisions`] on every input.
pub fn simulate_collisions(cars: &[Direction]) -> Result<u64> {
    if cars.is_empty() {
        return Err(GreedyError::empty("road"));
    }

    let mut collisions = 0u64;
    // Right-moving cars that have not hit anything yet.
    let mut oncoming = 0u64;
    // Whether a wreck or stationary car exists somewhere to the left.
    let mut blocked = false;

    for car in cars {
        match car {
            Direction::Right => oncoming += 1,
            Direction::Stationary => {
                collisions += oncoming;
                oncoming = 0;
                blocked = true;
            }
            Direction::Left if oncoming > 0 => {
                // Head-on with the nearest R, then the rest pile into the wreck.
                collisions += 2 + (oncoming - 1);
                oncoming = 0;
                blocked = true;
            }
            Direction::Left if blocked => collisions += 1,
            Direction::Left => {}
        }
    }

    Ok(collisions)
}
