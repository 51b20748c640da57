//! Transformations

use crate::paths::Point;
use crate::error::{Error, Result};

use std::ops::Mul;

/// Affine Transformation
///
/// A 3x3 matrix whose last row is implicitly `[0 0 1]`:
///
/// ```text
///  | sx  shx tx |
///  | shy sy  ty |
///  | 0   0   1  |
/// ```
///
/// Each of [translate](#method.translate), [rotate](#method.rotate) and
/// [scale](#method.scale) appends an operation that is applied to points
/// *after* everything already in the transform, so operations run in the
/// order they were called.
///
///     use polytile::{Point, Transform};
///
///     let mut a = Transform::new();
///     a.translate(10.0, 0.0);
///     a.rotate(90.0);
///     let p = a.apply(Point::new(0.0, 0.0));
///     assert!((p.x - 0.0).abs() < 1e-4 && (p.y - 10.0).abs() < 1e-4);
///
///     let mut b = Transform::new();
///     b.rotate(90.0);
///     b.translate(10.0, 0.0);
///     let p = b.apply(Point::new(0.0, 0.0));
///     assert!((p.x - 10.0).abs() < 1e-4 && p.y.abs() < 1e-4);
///
#[repr(C)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub sy: f32,
    pub shx: f32,
    pub shy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Identity Transform
    pub fn identity() -> Self {
        Self::new()
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Add a scaling to the transform
    ///
    /// A zero scale on either axis is allowed and collapses the geometry
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.sx  *= sx;
        self.shx *= sx;
        self.tx  *= sx;
        self.sy  *= sy;
        self.shy *= sy;
        self.ty  *= sy;
    }
    /// Add a rotation about the origin to the transform
    ///
    /// angle is in degrees, positive angles turn +x towards +y
    pub fn rotate(&mut self, degrees: f32) {
        self.rotate_radians(degrees.to_radians());
    }
    /// Add a rotation to the transform
    ///
    /// angle is in radians
    pub fn rotate_radians(&mut self, angle: f32) {
        let ca = angle.cos();
        let sa = angle.sin();
        let t0   = self.sx  * ca - self.shy * sa;
        let t2   = self.shx * ca - self.sy  * sa;
        let t4   = self.tx  * ca - self.ty  * sa;
        self.shy = self.sx  * sa + self.shy * ca;
        self.sy  = self.shx * sa + self.sy  * ca;
        self.ty  = self.tx  * sa + self.ty  * ca;
        self.sx  = t0;
        self.shx = t2;
        self.tx  = t4;
    }
    /// Copy of the transform with a translation appended
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        self.translate(dx, dy);
        self
    }
    /// Copy of the transform with a scaling appended
    pub fn scaled(mut self, sx: f32, sy: f32) -> Self {
        self.scale(sx, sy);
        self
    }
    /// Copy of the transform with a rotation (degrees) appended
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotate(degrees);
        self
    }

    /// Perform the transform
    pub fn transform(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Map a single point through the transform
    pub fn apply(&self, p: Point) -> Point {
        let (x, y) = self.transform(p.x, p.y);
        Point { x, y }
    }
    pub fn is_identity(&self) -> bool {
        *self == Self::new()
    }
    pub fn is_finite(&self) -> bool {
        [self.sx, self.sy, self.shx, self.shy, self.tx, self.ty]
            .iter()
            .all(|v| v.is_finite())
    }
    /// Reject transforms that would poison every coordinate they touch
    pub fn validate(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::NonFiniteTransform(*self))
        }
    }
    /// Transform equivalent to applying `self` and then `m`
    pub fn then(&self, m: &Transform) -> Self {
        let t0  = self.sx  * m.sx  + self.shy * m.shx;
        let t2  = self.shx * m.sx  + self.sy  * m.shx;
        let t4  = self.tx  * m.sx  + self.ty  * m.shx + m.tx;
        let shy = self.sx  * m.shy + self.shy * m.sy;
        let sy  = self.shx * m.shy + self.sy  * m.sy;
        let ty  = self.tx  * m.shy + self.ty  * m.sy + m.ty;
        let sx  = t0;
        let shx = t2;
        let tx  = t4;
        Transform { sx, sy, tx, ty, shx, shy }
    }
    pub fn new_scale(sx: f32, sy: f32) -> Transform {
        Self::new().scaled(sx, sy)
    }
    pub fn new_translate(tx: f32, ty: f32) -> Transform {
        Self::new().translated(tx, ty)
    }
    /// Rotation about the origin, in degrees
    pub fn new_rotate(degrees: f32) -> Transform {
        Self::new().rotated(degrees)
    }
}

/// `a * b` applies `a` first, then `b`
impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.then(&rhs)
    }
}
