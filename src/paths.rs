//! Paths and Polygons

use crate::clip::Rectangle;
use crate::transform::Transform;
use crate::raster::FillingRule;

use std::iter::FromIterator;
use std::ops::{Add, Sub};

/// Polygon vertex in model space
#[repr(C)]
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, p: Point) -> Point {
        Point::new(self.x + p.x, self.y + p.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, p: Point) -> Point {
        Point::new(self.x - p.x, self.y - p.y)
    }
}
impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Winding direction of a path, as seen on a y-down surface
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise,
}

/// Closed sequence of points
///
/// The last point implicitly connects back to the first. At least three
/// points are needed for the path to contribute any coverage.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self { points: vec![] }
    }
    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }
    pub fn add_points(&mut self, pts: &[Point]) {
        self.points.extend_from_slice(pts);
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Enough points to enclose an area
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 3
    }
    /// Edges of the path, including the closing edge from the last point to the first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0 .. n).map(move |i| (self.points[(i + n - 1) % n], self.points[i]))
    }
    /// Signed area, positive for clockwise paths on a y-down surface
    pub fn area(&self) -> f32 {
        self.edges()
            .map(|(a, b)| a.x * b.y - a.y * b.x)
            .sum::<f32>() / 2.0
    }
    pub fn orientation(&self) -> PathOrientation {
        if self.area() < 0.0 {
            PathOrientation::CounterClockwise
        } else {
            PathOrientation::Clockwise
        }
    }
    /// Reverse the winding direction
    pub fn reverse(&mut self) {
        self.points.reverse();
    }
    /// Reverse the path if it does not already wind in direction `dir`
    pub fn arrange_orientation(&mut self, dir: PathOrientation) {
        if self.orientation() != dir {
            self.reverse();
        }
    }
    /// Bounds of the path after applying the transform `t`
    pub fn bounds(&self, t: &Transform) -> Option<Rectangle<f32>> {
        let mut pts = self.points.iter().map(|p| t.apply(*p));
        let p0 = pts.next()?;
        let mut r = Rectangle::new(p0.x, p0.y, p0.x, p0.y);
        for p in pts {
            r.expand(p.x, p.y);
        }
        Some(r)
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}
impl From<&[(f32, f32)]> for Path {
    fn from(pts: &[(f32, f32)]) -> Self {
        pts.iter().map(|&p| Point::from(p)).collect()
    }
}
impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

/// Collection of paths filled together
///
/// All paths share a single [FillingRule](enum.FillingRule.html); holes are
/// made either by even-odd filling or by winding a path in the opposite
/// direction under non-zero filling.
///
///     use polytile::{Polygon, Path, Point, PathOrientation};
///
///     let mut poly = Polygon::new();
///     poly.add_path().add_points(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0),
///                                  Point::new(10.0, 10.0), Point::new(0.0, 10.0)]);
///     let hole = poly.add_path();
///     hole.add_points(&[Point::new(2.0, 2.0), Point::new(8.0, 2.0),
///                       Point::new(8.0, 8.0), Point::new(2.0, 8.0)]);
///     hole.reverse();
///     assert_eq!(poly.paths[0].orientation(), PathOrientation::Clockwise);
///     assert_eq!(poly.paths[1].orientation(), PathOrientation::CounterClockwise);
///
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Polygon {
    pub paths: Vec<Path>,
    pub filling_rule: FillingRule,
}

impl Polygon {
    pub fn new() -> Self {
        Self { paths: vec![], filling_rule: FillingRule::default() }
    }
    /// Polygon with a single path
    pub fn from_path(path: Path) -> Self {
        Self { paths: vec![path], filling_rule: FillingRule::default() }
    }
    /// Append an empty path and return it for filling in
    pub fn add_path(&mut self) -> &mut Path {
        self.paths.push(Path::new());
        let n = self.paths.len();
        &mut self.paths[n - 1]
    }
    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }
    pub fn filling_rule(&mut self, rule: FillingRule) {
        self.filling_rule = rule;
    }
    /// Paths with enough points to contribute coverage
    pub fn renderable_paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().filter(|p| p.is_renderable())
    }
    /// Give every path the same winding direction
    pub fn arrange_orientations(&mut self, dir: PathOrientation) {
        for path in self.paths.iter_mut() {
            path.arrange_orientation(dir);
        }
    }
    /// Bounds of the renderable paths after applying the transform `t`
    pub fn bounds(&self, t: &Transform) -> Option<Rectangle<f32>> {
        let mut out: Option<Rectangle<f32>> = None;
        for r in self.renderable_paths().filter_map(|p| p.bounds(t)) {
            match out {
                None => out = Some(r),
                Some(ref mut b) => b.expand_rect(&r),
            }
        }
        out
    }
}

impl From<Path> for Polygon {
    fn from(path: Path) -> Self {
        Polygon::from_path(path)
    }
}
impl FromIterator<Path> for Polygon {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self { paths: iter.into_iter().collect(), filling_rule: FillingRule::default() }
    }
}
