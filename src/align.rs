//! Relative placement: where to put a shape so it sits next to another one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Point, Rect};

/// Which side of a reference shape a dependent shape goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Above,
    Below,
    RightOf,
    LeftOf,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "above" => Ok(Direction::Above),
            "below" => Ok(Direction::Below),
            "right_of" | "right" => Ok(Direction::RightOf),
            "left_of" | "left" => Ok(Direction::LeftOf),
            other => Err(Error::config(format!("unknown alignment '{other}'"))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Above => "above",
            Direction::Below => "below",
            Direction::RightOf => "right_of",
            Direction::LeftOf => "left_of",
        };
        f.write_str(s)
    }
}

/// Anchor point for a shape placed `padding` away from `reference`.
///
/// For `Above` and `Below` the point is on the facing edge of the dependent
/// shape (its bottom-center or top-center). For `RightOf` and `LeftOf` it is
/// the dependent shape's center, which is why the caller passes
/// `half_extent`: the radius of a round shape, or half the width of
/// anything else.
///
/// The reference is only read.
pub fn align(padding: f64, direction: Direction, reference: &Rect, half_extent: f64) -> Point {
    let center = reference.center();
    match direction {
        Direction::Above => Point::new(center.x, reference.top - padding),
        Direction::Below => Point::new(center.x, reference.bottom + padding),
        Direction::RightOf => Point::new(reference.right + padding + half_extent, center.y),
        Direction::LeftOf => Point::new(reference.left - padding - half_extent, center.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Rect {
        Rect::round(Point::new(10.0, 20.0), 8.0)
    }

    #[test]
    fn above_and_below_use_facing_edges() {
        let r = reference();
        assert_eq!(align(1.0, Direction::Above, &r, 0.0), Point::new(10.0, 15.0));
        assert_eq!(align(1.0, Direction::Below, &r, 0.0), Point::new(10.0, 25.0));
    }

    #[test]
    fn sideways_placement_accounts_for_own_extent() {
        let r = reference();
        assert_eq!(align(1.0, Direction::RightOf, &r, 3.0), Point::new(18.0, 20.0));
        assert_eq!(align(1.0, Direction::LeftOf, &r, 3.0), Point::new(2.0, 20.0));
    }

    #[test]
    fn reference_is_untouched() {
        let r = reference();
        let before = r;
        let _ = align(2.5, Direction::RightOf, &r, 1.0);
        assert_eq!(r, before);
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("above".parse::<Direction>().unwrap(), Direction::Above);
        assert_eq!("right_of".parse::<Direction>().unwrap(), Direction::RightOf);
        assert!(matches!("sideways".parse::<Direction>(), Err(Error::Configuration(_))));
    }
}
