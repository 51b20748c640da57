//! Interior spans of a single sample row

use crate::edge::Intercept;
use crate::raster::FillingRule;

/// Half-open run of interior sample columns `[x0, x1)`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x0: i32,
    pub x1: i32,
}

impl Span {
    pub fn len(&self) -> i32 {
        self.x1 - self.x0
    }
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0
    }
}

/// Spans of one sample row
#[derive(Debug,Default)]
pub struct Scanline {
    pub spans: Vec<Span>,
}

/// First sample column whose centre is at or right of `x`
fn column(x: f32, width: i32) -> i32 {
    let c = (x - 0.5).ceil();
    if c <= 0.0 {
        0
    } else if c >= width as f32 {
        width
    } else {
        c as i32
    }
}

impl Scanline {
    pub fn new() -> Self {
        Self { spans: vec![] }
    }
    pub fn reset_spans(&mut self) {
        self.spans.clear();
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Convert x-sorted intercepts into interior spans
    ///
    /// Sample column `c` (centre `c + 0.5`) is covered by an interior run
    /// `[xa, xb)` when `xa <= c + 0.5 < xb`. Spans are clamped to `[0, width)`
    /// and empty ones are dropped.
    pub fn sweep(&mut self, intercepts: &[Intercept], rule: FillingRule, width: i32) {
        self.reset_spans();
        let mut winding = 0;
        let mut start = 0.0;
        for i in intercepts {
            let was_inside = rule.is_interior(winding);
            winding += i.winding;
            let inside = rule.is_interior(winding);
            if inside && !was_inside {
                start = i.x;
            } else if was_inside && !inside {
                self.add_span(column(start, width), column(i.x, width));
            }
        }
    }
    fn add_span(&mut self, x0: i32, x1: i32) {
        if x1 <= x0 {
            return;
        }
        match self.spans.last_mut() {
            Some(cur) if cur.x1 == x0 => cur.x1 = x1,
            _ => self.spans.push(Span { x0, x1 }),
        }
    }
}
