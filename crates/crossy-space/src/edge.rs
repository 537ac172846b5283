//! Edge policies for horizontally moving entities.

use crossy_core::Heading;

/// How vehicles and logs behave at the left and right grid edges.
///
/// Entities are described by their leading (leftmost) column `x` and a
/// length `len` (1 for vehicles, 3 for logs).
///
/// # Examples
///
/// ```
/// use crossy_core::Heading;
/// use crossy_space::{EdgeEvent, EdgePolicy};
///
/// // Respawn: a vehicle past the right edge re-enters at -1.
/// let a = EdgePolicy::Respawn.advance(10, Heading::Right, 1, 10);
/// assert_eq!((a.x, a.event), (-1, EdgeEvent::Respawned));
///
/// // Bounce: leaving [0, width) flips the heading.
/// let b = EdgePolicy::Bounce.advance(9, Heading::Right, 1, 10);
/// assert_eq!((b.x, b.heading), (10, Heading::Left));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Once an entity is fully past an edge (`x > width` moving right,
    /// `x < -len` moving left) it re-enters just outside the opposite edge
    /// (`x = -len` or `x = width`), keeping row and heading.
    Respawn,
    /// When the leading column leaves `[0, width)` the heading flips. The
    /// entity keeps its out-of-bounds column and moves back next tick.
    Bounce,
}

/// What happened at the edge during one advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeEvent {
    /// Plain move.
    None,
    /// The entity left the grid and re-entered on the opposite side.
    Respawned,
    /// The entity's heading reversed.
    Bounced,
}

/// Result of advancing an entity by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Advance {
    /// New leading column.
    pub x: i32,
    /// Heading after the move.
    pub heading: Heading,
    /// Edge interaction, if any.
    pub event: EdgeEvent,
}

impl EdgePolicy {
    /// Advance an entity with leading column `x` by one step of `heading`.
    pub fn advance(self, x: i32, heading: Heading, len: i32, width: i32) -> Advance {
        let moved = x + heading.delta();
        match self {
            EdgePolicy::Respawn => match heading {
                Heading::Right if moved > width => Advance {
                    x: -len,
                    heading,
                    event: EdgeEvent::Respawned,
                },
                Heading::Left if moved < -len => Advance {
                    x: width,
                    heading,
                    event: EdgeEvent::Respawned,
                },
                _ => Advance {
                    x: moved,
                    heading,
                    event: EdgeEvent::None,
                },
            },
            EdgePolicy::Bounce => {
                if moved < 0 || moved >= width {
                    Advance {
                        x: moved,
                        heading: heading.reversed(),
                        event: EdgeEvent::Bounced,
                    }
                } else {
                    Advance {
                        x: moved,
                        heading,
                        event: EdgeEvent::None,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn respawn_vehicle_lingers_one_column_past_right_edge() {
        // x = width is still "on the way out"; only x > width respawns.
        let a = EdgePolicy::Respawn.advance(9, Heading::Right, 1, 10);
        assert_eq!((a.x, a.event), (10, EdgeEvent::None));
        let b = EdgePolicy::Respawn.advance(a.x, a.heading, 1, 10);
        assert_eq!((b.x, b.event), (-1, EdgeEvent::Respawned));
    }

    #[test]
    fn respawn_left_moving_log_reenters_at_width() {
        let a = EdgePolicy::Respawn.advance(-3, Heading::Left, 3, 12);
        assert_eq!(a.x, 12);
        assert_eq!(a.heading, Heading::Left);
        assert_eq!(a.event, EdgeEvent::Respawned);
    }

    #[test]
    fn respawn_right_moving_log_reenters_three_columns_out() {
        let a = EdgePolicy::Respawn.advance(12, Heading::Right, 3, 12);
        assert_eq!(a.x, -3);
        assert_eq!(a.event, EdgeEvent::Respawned);
    }

    #[test]
    fn bounce_flips_at_left_edge_and_returns() {
        let a = EdgePolicy::Bounce.advance(0, Heading::Left, 1, 10);
        assert_eq!((a.x, a.heading, a.event), (-1, Heading::Right, EdgeEvent::Bounced));
        let b = EdgePolicy::Bounce.advance(a.x, a.heading, 1, 10);
        assert_eq!((b.x, b.heading, b.event), (0, Heading::Right, EdgeEvent::None));
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![Just(Heading::Left), Just(Heading::Right)]
    }

    proptest! {
        #[test]
        fn respawn_keeps_entity_near_grid(
            width in 1i32..60,
            len in 1i32..4,
            start in -3i32..60,
            heading in arb_heading(),
            ticks in 0usize..200,
        ) {
            let mut x = start.clamp(-len, width);
            let mut h = heading;
            for _ in 0..ticks {
                let a = EdgePolicy::Respawn.advance(x, h, len, width);
                prop_assert_eq!(a.heading, h, "respawn never changes heading");
                x = a.x;
                h = a.heading;
                prop_assert!(x >= -len && x <= width, "x={} outside [-{}, {}]", x, len, width);
            }
        }

        #[test]
        fn bounce_never_drifts_more_than_one_column_out(
            width in 2i32..60,
            start in 0i32..60,
            heading in arb_heading(),
            ticks in 0usize..200,
        ) {
            let mut x = start % width;
            let mut h = heading;
            for _ in 0..ticks {
                let a = EdgePolicy::Bounce.advance(x, h, 1, width);
                x = a.x;
                h = a.heading;
                prop_assert!(x >= -1 && x <= width);
            }
        }
    }
}
