//! Filled and outlined shapes
//!
//! Each function returns a [Polygon](../struct.Polygon.html) ready to render.
//! A `stroke` of zero gives a solid shape; a positive `stroke` outlines the
//! shape with a band of that thickness, made by an inner contour running in
//! the opposite direction, so the centre stays empty under either filling
//! rule. Angles are in degrees, measured from the positive y axis towards
//! the positive x axis.

use crate::paths::{Path, Point, Polygon};

use std::f32::consts::{FRAC_PI_2, PI};

/// Corner arcs get one extra step every this many pixels of radius
const CORNER_QUALITY: f32 = 5.0;

/// Upper bound on the segments of a circle or arc
const MAX_SEGMENTS: usize = 4096;

/// Outer contour with an optional hole
fn outlined(outer: Path, inner: Option<Path>) -> Polygon {
    let mut poly = Polygon::from(outer);
    if let Some(mut inner) = inner {
        inner.reverse();
        poly.push(inner);
    }
    poly
}

fn rect_path(x: f32, y: f32, w: f32, h: f32) -> Path {
    Path::from(vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ])
}

/// Axis aligned rectangle
///
///     use polytile::primitives::rectangle;
///
///     assert_eq!(rectangle(0.0, 0.0, 10.0, 10.0, 0.0).paths.len(), 1);
///     assert_eq!(rectangle(0.0, 0.0, 10.0, 10.0, 2.0).paths.len(), 2);
///
pub fn rectangle(x: f32, y: f32, w: f32, h: f32, stroke: f32) -> Polygon {
    let inner = if stroke > 0.0 && w > 2.0 * stroke && h > 2.0 * stroke {
        Some(rect_path(x + stroke, y + stroke, w - 2.0 * stroke, h - 2.0 * stroke))
    } else {
        None
    };
    outlined(rect_path(x, y, w, h), inner)
}

fn corner(path: &mut Path, cx: f32, cy: f32, r: f32, quadrant: u32) {
    let steps = ((r / CORNER_QUALITY).ceil() as usize).min(MAX_SEGMENTS) + 2;
    let delta = -FRAC_PI_2 / steps as f32;
    let mut theta = FRAC_PI_2 * quadrant as f32;
    for _ in 0 ..= steps {
        path.add_point(Point::new(cx + theta.sin() * r, cy + theta.cos() * r));
        theta += delta;
    }
}

fn rounded_path(x: f32, y: f32, w: f32, h: f32, radii: [f32; 4]) -> Path {
    let limit = (w.abs().min(h.abs()) / 2.0).max(0.0);
    let r: Vec<f32> = radii.iter().map(|r| r.max(0.0).min(limit)).collect();
    let corners = [
        (x, y, x + r[0], y + r[0], 3),
        (x + w, y, x + w - r[1], y + r[1], 2),
        (x + w, y + h, x + w - r[2], y + h - r[2], 1),
        (x, y + h, x + r[3], y + h - r[3], 0),
    ];
    let mut path = Path::new();
    for (i, &(px, py, cx, cy, q)) in corners.iter().enumerate() {
        if r[i] == 0.0 {
            path.add_point(Point::new(px, py));
        } else {
            corner(&mut path, cx, cy, r[i], q);
        }
    }
    path
}

/// Rectangle with rounded corners
///
/// `radii` start at the top left corner and run clockwise. Each radius is
/// limited to half of the shorter side; a zero radius gives a square corner.
/// The hole of an outline has its radii reduced by `stroke`.
///
///     use polytile::primitives::{rounded_rectangle, rectangle};
///
///     let square = rounded_rectangle(0.0, 0.0, 10.0, 10.0, [0.0; 4], 0.0);
///     assert_eq!(square, rectangle(0.0, 0.0, 10.0, 10.0, 0.0));
///
///     let pill = rounded_rectangle(0.0, 0.0, 40.0, 10.0, [20.0; 4], 0.0);
///     assert!(pill.paths[0].area() < 400.0);
///
pub fn rounded_rectangle(x: f32, y: f32, w: f32, h: f32, radii: [f32; 4], stroke: f32) -> Polygon {
    let inner = if stroke > 0.0 && w > 2.0 * stroke && h > 2.0 * stroke {
        let mut r = radii;
        r.iter_mut().for_each(|v| *v = (*v - stroke).max(0.0));
        Some(rounded_path(x + stroke, y + stroke, w - 2.0 * stroke, h - 2.0 * stroke, r))
    } else {
        None
    };
    outlined(rounded_path(x, y, w, h, radii), inner)
}

fn regular_path(x: f32, y: f32, r: f32, sides: usize) -> Path {
    let step = 2.0 * PI / sides.max(1) as f32;
    (0 .. sides)
        .map(|i| {
            let theta = step * i as f32;
            Point::new(theta.sin() * r + x, theta.cos() * r + y)
        })
        .collect()
}

/// Regular polygon with `sides` vertices on a circle of radius `r`
///
/// The first vertex is directly below the centre
pub fn regular(x: f32, y: f32, r: f32, sides: usize, stroke: f32) -> Polygon {
    let sides = if r.is_finite() { sides.min(MAX_SEGMENTS) } else { 0 };
    let inner = if stroke > 0.0 && r > stroke {
        Some(regular_path(x, y, r - stroke, sides))
    } else {
        None
    };
    outlined(regular_path(x, y, r, sides), inner)
}

/// Number of segments used for circles and arcs of radius `r`
///
/// Zero for radii that are not finite
fn segments(r: f32) -> usize {
    if !r.is_finite() {
        return 0;
    }
    (r.abs() as usize).max(8).min(MAX_SEGMENTS)
}

/// Circle approximated by a regular polygon, one side per pixel of radius
pub fn circle(x: f32, y: f32, r: f32, stroke: f32) -> Polygon {
    regular(x, y, r, segments(r), stroke)
}

/// Pie slice between angles `from` and `to`, closed through the centre
///
///     use polytile::primitives::pie;
///
///     let half = pie(0.0, 0.0, 10.0, 0.0, 180.0);
///     let p = &half.paths[0].points;
///     assert_eq!(p[0].x, 0.0);
///     assert!(p.iter().all(|p| p.x >= -1e-4));
///
pub fn pie(x: f32, y: f32, r: f32, from: f32, to: f32) -> Polygon {
    let n = segments(r);
    if n == 0 {
        return Polygon::new();
    }
    let (from, to) = (from.to_radians(), to.to_radians());
    let step = (to - from) / n as f32;
    let mut path = Path::with_capacity(n + 2);
    path.add_point(Point::new(x, y));
    for i in 0 ..= n {
        let a = from + step * i as f32;
        path.add_point(Point::new(a.sin() * r + x, a.cos() * r + y));
    }
    Polygon::from(path)
}

/// Ring segment of thickness `stroke` between angles `from` and `to`
///
/// The outer edge runs from `from` to `to` and the inner edge back again,
/// so the result is a single closed outline. A zero `stroke` gives a pie.
pub fn arc(x: f32, y: f32, r: f32, stroke: f32, from: f32, to: f32) -> Polygon {
    if stroke <= 0.0 {
        return pie(x, y, r, from, to);
    }
    let n = segments(r);
    if n == 0 {
        return Polygon::new();
    }
    let (from, to) = (from.to_radians(), to.to_radians());
    let step = (to - from) / n as f32;
    let inner = r - stroke;
    let mut path = Path::with_capacity(2 * n + 2);
    for i in 0 ..= n {
        let a = from + step * i as f32;
        path.add_point(Point::new(a.sin() * r + x, a.cos() * r + y));
    }
    for i in (0 ..= n).rev() {
        let a = from + step * i as f32;
        path.add_point(Point::new(a.sin() * inner + x, a.cos() * inner + y));
    }
    Polygon::from(path)
}
