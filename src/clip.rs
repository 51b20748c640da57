//! Clipping Region

use std::cmp::{max, min};

/// Rectangle
///
/// Corner based bounds, used while collecting the extents of transformed
/// geometry
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Expand if the rectangle is outside
    pub fn expand_rect(&mut self, r: &Rectangle<T>) {
        self.expand(r.x1, r.y1);
        self.expand(r.x2, r.y2);
    }
}

impl Rectangle<f32> {
    /// Smallest pixel rectangle containing the bounds
    ///
    /// Bounds without area on either axis give an empty Rect
    pub fn to_rect(&self) -> Rect {
        if !(self.x2 > self.x1) || !(self.y2 > self.y1) {
            return Rect::new(self.x1.floor() as i32, self.y1.floor() as i32, 0, 0);
        }
        let x = self.x1.floor() as i32;
        let y = self.y1.floor() as i32;
        let r = self.x2.ceil() as i32;
        let b = self.y2.ceil() as i32;
        Rect::new(x, y, r.saturating_sub(x), b.saturating_sub(y))
    }
    /// Pixels of the bounds inside `clip`
    ///
    /// Works on the float values, so bounds far beyond the `i32` range still
    /// intersect the clip correctly
    pub fn clipped_rect(&self, clip: &Rect) -> Rect {
        if !(self.x2 > self.x1) || !(self.y2 > self.y1) || clip.is_empty() {
            return Rect::default();
        }
        let cx0 = f64::from(clip.x);
        let cy0 = f64::from(clip.y);
        let cx1 = cx0 + f64::from(clip.w);
        let cy1 = cy0 + f64::from(clip.h);
        let x0 = f64::from(self.x1).floor().max(cx0);
        let y0 = f64::from(self.y1).floor().max(cy0);
        let x1 = f64::from(self.x2).ceil().min(cx1);
        let y1 = f64::from(self.y2).ceil().min(cy1);
        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect::new(x0 as i32, y0 as i32, (x1 - x0) as i32, (y1 - y0) as i32)
    }
}

/// Integer pixel Rectangle
///
/// Used for the clip region and for tile bounds
///
///     use polytile::Rect;
///
///     let a = Rect::new(0, 0, 10, 10);
///     let b = Rect::new(5, 5, 10, 10);
///     assert_eq!(a.intersection(&b), Rect::new(5, 5, 5, 5));
///     assert_eq!(a.merge(&b), Rect::new(0, 0, 15, 15));
///     assert!(a.intersection(&Rect::new(20, 20, 4, 4)).is_empty());
///
#[repr(C)]
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }
    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }
    /// Rectangles with no width or no height (or a negative one) hold no pixels
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
    /// Overlapping region, empty if the rectangles are disjoint
    pub fn intersection(&self, r: &Rect) -> Rect {
        let x = max(self.x, r.x);
        let y = max(self.y, r.y);
        Rect {
            x, y,
            w: max(0, min(self.right(),  r.right())  - x),
            h: max(0, min(self.bottom(), r.bottom()) - y),
        }
    }
    /// Smallest rectangle containing both rectangles
    pub fn merge(&self, r: &Rect) -> Rect {
        let x = min(self.x, r.x);
        let y = min(self.y, r.y);
        Rect {
            x, y,
            w: max(self.right(),  r.right())  - x,
            h: max(self.bottom(), r.bottom()) - y,
        }
    }
    /// Is pixel (x,y) inside
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
    /// Is the rectangle `r` entirely inside
    pub fn contains_rect(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y &&
            r.right() <= self.right() && r.bottom() <= self.bottom()
    }
    /// Number of pixels
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            i64::from(self.w) * i64::from(self.h)
        }
    }
}
