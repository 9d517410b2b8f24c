//! Geometry shared by every drawable element.
//!
//! All coordinates are panel-local millimeters with the origin at the top-left
//! corner of the panel and y growing downward, matching SVG user space.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point in panel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle described by its four edges.
///
/// Every shape owns exactly one of these. It is mutated only by translation
/// (directly or through [`Rect::move_center_to`]), so width and height never
/// change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    /// Build a rectangle from explicit edges, rejecting inverted or
    /// non-finite ones.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Result<Self> {
        let finite = [top, right, bottom, left].iter().all(|v| v.is_finite());
        if !finite || right < left || bottom < top {
            return Err(Error::Geometry(format!(
                "invalid rectangle edges: top={top} right={right} bottom={bottom} left={left}"
            )));
        }
        Ok(Self { top, right, bottom, left })
    }

    /// Bounds of a control positioned by its center point.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            top: center.y - height / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y + height / 2.0,
            left: center.x - width / 2.0,
        }
    }

    /// Bounds of a round control: a square whose side is the diameter.
    pub fn round(center: Point, diameter: f64) -> Self {
        Self::centered(center, diameter, diameter)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Shift all four edges by the same deltas.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.top += dy;
        self.bottom += dy;
        self.left += dx;
        self.right += dx;
    }

    /// Move the center to the given coordinates. An axis given as `None`
    /// stays where it is.
    pub fn move_center_to(&mut self, x: Option<f64>, y: Option<f64>) {
        let center = self.center();
        let dx = x.map_or(0.0, |x| x - center.x);
        let dy = y.map_or(0.0, |y| y - center.y);
        self.translate(dx, dy);
    }

    /// A copy grown outward by `amount` on every side.
    pub fn expanded(&self, amount: f64) -> Self {
        Self {
            top: self.top - amount,
            right: self.right + amount,
            bottom: self.bottom + amount,
            left: self.left - amount,
        }
    }

    /// Smallest rectangle enclosing both.
    pub fn union(&self, other: &Rect) -> Self {
        Self {
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.min(other.left),
        }
    }

    /// True if `other` lies entirely inside (or on the edges of) this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }
}

/// Smallest rectangle enclosing every rectangle in the list.
///
/// An empty list has no bounding box and is rejected.
pub fn bounding_box_of<'a, I>(rects: I) -> Result<Rect>
where
    I: IntoIterator<Item = &'a Rect>,
{
    let mut rects = rects.into_iter();
    let first = rects
        .next()
        .ok_or_else(|| Error::Geometry("cannot compute the bounding box of no shapes".into()))?;
    Ok(rects.fold(*first, |acc, r| acc.union(r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_bounds() {
        let r = Rect::centered(Point::new(10.0, 20.0), 3.0, 6.0);
        assert_eq!(r, Rect { top: 17.0, right: 11.5, bottom: 23.0, left: 8.5 });
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.center(), Point::new(10.0, 20.0));
    }

    #[test]
    fn translate_round_trip_restores_edges() {
        let original = Rect::round(Point::new(12.5, 40.25), 8.5);
        let mut r = original;
        r.translate(3.75, -11.5);
        assert_eq!(r.width(), original.width());
        assert_eq!(r.height(), original.height());
        r.translate(-3.75, 11.5);
        assert_eq!(r, original);
    }

    #[test]
    fn move_center_to_hits_requested_axes() {
        let mut r = Rect::centered(Point::new(1.5, 2.25), 3.5, 4.5);
        r.translate(0.75, 0.125);
        r.move_center_to(Some(17.25), None);
        assert_eq!(r.center(), Point::new(17.25, 2.375));
        r.move_center_to(None, Some(99.5));
        assert_eq!(r.center(), Point::new(17.25, 99.5));
        assert_eq!(r.width(), 3.5);
        assert_eq!(r.height(), 4.5);
    }

    #[test]
    fn move_center_to_arbitrary_point() {
        let mut r = Rect::centered(Point::new(1.1, 2.2), 3.3, 4.4);
        r.translate(0.7, 0.3);
        r.move_center_to(Some(17.3), Some(-4.1));
        let c = r.center();
        assert!((c.x - 17.3).abs() < 1e-12);
        assert!((c.y + 4.1).abs() < 1e-12);
    }

    #[test]
    fn move_center_to_with_no_axes_is_a_no_op() {
        let original = Rect::round(Point::new(5.0, 5.0), 2.0);
        let mut r = original;
        r.move_center_to(None, None);
        assert_eq!(r, original);
    }

    #[test]
    fn bounding_box_is_componentwise_extreme() {
        let a = Rect::new(10.0, 5.0, 12.0, 1.0).unwrap();
        let b = Rect::new(3.0, 4.0, 8.0, 2.0).unwrap();
        let c = Rect::new(9.0, 20.0, 30.0, 15.0).unwrap();
        let bbox = bounding_box_of([&a, &b, &c]).unwrap();
        assert_eq!(bbox, Rect { top: 3.0, right: 20.0, bottom: 30.0, left: 1.0 });
    }

    #[test]
    fn bounding_box_of_one_is_itself() {
        let a = Rect::round(Point::new(4.0, 4.0), 6.0);
        assert_eq!(bounding_box_of([&a]).unwrap(), a);
    }

    #[test]
    fn bounding_box_of_nothing_fails() {
        let empty: Vec<Rect> = Vec::new();
        assert!(matches!(bounding_box_of(&empty), Err(Error::Geometry(_))));
    }

    #[test]
    fn inverted_edges_are_rejected() {
        assert!(Rect::new(5.0, 1.0, 6.0, 2.0).is_err());
        assert!(Rect::new(5.0, 3.0, 4.0, 2.0).is_err());
        assert!(Rect::new(f64::NAN, 3.0, 4.0, 2.0).is_err());
        assert!(Rect::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }
}
