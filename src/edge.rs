//! Edges and scanline intercepts

use crate::paths::Point;

/// Non-horizontal polygon edge in destination pixel space
///
/// Endpoints are ordered so that `y0 < y1`; `winding` remembers the original
/// direction, `+1` for edges that ran downwards and `-1` for upwards
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub winding: i32,
}

impl Edge {
    /// Edge from `a` to `b`, None for horizontal edges
    pub fn new(a: Point, b: Point) -> Option<Self> {
        if a.y == b.y {
            return None;
        }
        let (a, b, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
        Some(Self { x0: a.x, y0: a.y, x1: b.x, y1: b.y, winding })
    }
    /// Does the edge overlap the vertical range [y0,y1)
    pub fn spans_rows(&self, y0: f32, y1: f32) -> bool {
        self.y1 > y0 && self.y0 < y1
    }
    /// x value where the edge crosses y
    pub fn x_at(&self, y: f32) -> f32 {
        self.x0 + (y - self.y0) * (self.x1 - self.x0) / (self.y1 - self.y0)
    }
}

/// Crossing of an edge with a sample row
///
/// `x` is in sample units relative to the tile origin
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Intercept {
    pub x: f32,
    pub winding: i32,
}

/// Intercepts for every sample row of a tile
///
/// Storage is kept between tiles, only the row lists are cleared
#[derive(Debug,Default)]
pub struct InterceptTable {
    rows: Vec<Vec<Intercept>>,
    n: usize,
}

impl InterceptTable {
    pub fn new() -> Self {
        Self { rows: vec![], n: 0 }
    }
    /// Clear the table and size it for `n` sample rows
    pub fn reset(&mut self, n: usize) {
        if self.rows.len() < n {
            self.rows.resize_with(n, Vec::new);
        }
        for row in self.rows.iter_mut().take(n) {
            row.clear();
        }
        self.n = n;
    }
    pub fn num_rows(&self) -> usize {
        self.n
    }
    pub fn total_intercepts(&self) -> usize {
        self.rows.iter().take(self.n).map(|r| r.len()).sum()
    }
    /// Add the crossings of `edge` with each sample row
    ///
    /// Sample row `r` sits at `origin.y + (r + 0.5) / scale` and is crossed
    /// when `y0 <= sample < y1`, so vertices shared by two edges are counted once
    pub fn add_edge(&mut self, edge: &Edge, origin: Point, scale: f32) {
        let first = ((edge.y0 - origin.y) * scale - 0.5).ceil().max(0.0);
        let last = ((edge.y1 - origin.y) * scale - 0.5).ceil().min(self.n as f32);
        if !(first < last) {
            return;
        }
        let (first, last) = (first as usize, last as usize);
        for r in first .. last {
            let sy = origin.y + (r as f32 + 0.5) / scale;
            let x = (edge.x_at(sy) - origin.x) * scale;
            self.rows[r].push(Intercept { x, winding: edge.winding });
        }
    }
    /// Sort every row by x
    pub fn sort(&mut self) {
        for row in self.rows.iter_mut().take(self.n) {
            row.sort_unstable_by(|a, b| a.x.total_cmp(&b.x));
        }
    }
    /// Intercepts of sample row `r`
    pub fn row(&self, r: usize) -> &[Intercept] {
        if r < self.n { &self.rows[r] } else { &[] }
    }
}
