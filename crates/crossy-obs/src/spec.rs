//! Encoding options and the observation space description.

use crate::observation::Observation;
use crossy_core::CellKind;

/// Which optional layers the encoder paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodeSpec {
    /// Paint vehicle rows with [`CellKind::Road`] before the dynamic layers.
    pub paint_roads: bool,
    /// Paint rocks as [`CellKind::Obstacle`] as the final layer.
    pub paint_rocks: bool,
}

impl EncodeSpec {
    /// Largest legacy code this spec can produce: 5 with roads or rocks,
    /// otherwise 4 (water).
    pub fn max_code(&self) -> i32 {
        if self.paint_roads || self.paint_rocks {
            CellKind::MAX_CODE
        } else {
            CellKind::Water.code()
        }
    }
}

/// Shape and value bounds of the observations an environment produces.
///
/// # Examples
///
/// ```
/// use crossy_obs::{EncodeSpec, Observation, ObservationSpace};
///
/// let spec = EncodeSpec { paint_roads: false, paint_rocks: false };
/// let space = ObservationSpace::new(20, 35, &spec);
/// assert_eq!(space.shape(), (20, 35));
/// assert_eq!(space.high(), 4);
/// assert!(space.contains(&Observation::new(35, 20)));
/// assert!(!space.contains(&Observation::new(20, 35)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObservationSpace {
    height: usize,
    width: usize,
    high: i32,
}

impl ObservationSpace {
    /// Describe `height × width` observations produced under `spec`.
    pub fn new(height: usize, width: usize, spec: &EncodeSpec) -> Self {
        Self {
            height,
            width,
            high: spec.max_code(),
        }
    }

    /// `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Smallest legacy code (always 0).
    pub fn low(&self) -> i32 {
        0
    }

    /// Largest legacy code.
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Whether `obs` has this shape and every code lies in `[low, high]`.
    pub fn contains(&self, obs: &Observation) -> bool {
        obs.shape() == self.shape()
            && obs
                .cells()
                .iter()
                .all(|c| (self.low()..=self.high).contains(&c.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roads_or_rocks_raise_bound_to_five() {
        let roads = EncodeSpec {
            paint_roads: true,
            paint_rocks: false,
        };
        let rocks = EncodeSpec {
            paint_roads: false,
            paint_rocks: true,
        };
        assert_eq!(roads.max_code(), 5);
        assert_eq!(rocks.max_code(), 5);
    }
}
