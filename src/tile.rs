//! Coverage Tiles

use crate::clip::Rect;
use crate::math::coverage_u8;

use std::fmt;

/// Maximum width and height of a tile in pixels
pub const TILE_SIZE: i32 = 32;

/// Number of coverage counters in a full tile
pub(crate) const TILE_AREA: usize = (TILE_SIZE * TILE_SIZE) as usize;

/// Rectangle of per-pixel coverage
///
/// Data is stored row-major (C-format) as raw sample counts, `stride` counts
/// per row, with index 0 at the tile's top left pixel. Counts are scaled to
/// `0 ..= 255` by [get](#method.get).
///
/// Tiles handed to a [TileSink](trait.TileSink.html) borrow the rasterizer's
/// buffer ([TileRef](type.TileRef.html)); the [Tiles](struct.Tiles.html)
/// iterator hands out owned copies.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Tile<D = Vec<u8>> {
    bounds: Rect,
    stride: usize,
    samples: u32,
    data: D,
}

/// Tile borrowing the rasterizer's coverage buffer
pub type TileRef<'a> = Tile<&'a [u8]>;

impl<D: AsRef<[u8]>> Tile<D> {
    pub(crate) fn new(bounds: Rect, stride: usize, samples: u32, data: D) -> Self {
        debug_assert!(bounds.w <= TILE_SIZE && bounds.h <= TILE_SIZE);
        debug_assert!(samples > 0);
        Self { bounds, stride, samples, data }
    }
    /// Region of the destination surface covered by the tile
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
    pub fn x(&self) -> i32 {
        self.bounds.x
    }
    pub fn y(&self) -> i32 {
        self.bounds.y
    }
    pub fn width(&self) -> i32 {
        self.bounds.w
    }
    pub fn height(&self) -> i32 {
        self.bounds.h
    }
    /// Counters per row of the underlying data
    pub fn stride(&self) -> usize {
        self.stride
    }
    /// Samples taken per pixel, the count of a fully covered pixel
    pub fn samples(&self) -> u32 {
        self.samples
    }
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let lx = (x - self.bounds.x) as usize;
        let ly = (y - self.bounds.y) as usize;
        Some(lx + ly * self.stride)
    }
    /// Number of samples inside the fill at pixel (x,y)
    ///
    /// Coordinates are absolute; pixels outside of the tile have no samples
    pub fn sample_count(&self, x: i32, y: i32) -> u32 {
        self.index(x, y)
            .and_then(|i| self.data.as_ref().get(i))
            .map_or(0, |&v| u32::from(v))
    }
    /// Coverage at pixel (x,y) in the range `0 ..= 255`
    ///
    /// Coordinates are absolute; pixels outside of the tile read as 0
    pub fn get(&self, x: i32, y: i32) -> u8 {
        coverage_u8(self.sample_count(x, y), self.samples)
    }
    /// Coverage of a single row, `y` absolute
    pub fn row(&self, y: i32) -> impl Iterator<Item = u8> + '_ {
        let x0 = self.bounds.x;
        let n = if y >= self.bounds.y && y < self.bounds.bottom() { self.bounds.w } else { 0 };
        (x0 .. x0 + n).map(move |x| self.get(x, y))
    }
    /// All pixels of the tile as `(x, y, coverage)`, row by row
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let b = self.bounds;
        (b.y .. b.bottom())
            .flat_map(move |y| (b.x .. b.right()).map(move |x| (x, y, self.get(x, y))))
    }
    /// Copy of the tile owning only its own window of the data
    pub fn owned(&self) -> Tile<Vec<u8>> {
        let b = self.bounds;
        let data = self.data.as_ref();
        let mut out = Vec::with_capacity(b.area() as usize);
        for ly in 0 .. b.h.max(0) as usize {
            let start = ly * self.stride;
            let end = start + b.w.max(0) as usize;
            out.extend_from_slice(&data[start .. end]);
        }
        Tile { bounds: b, stride: b.w.max(0) as usize, samples: self.samples, data: out }
    }
}

/// Hex dump of the coverage, one line per row
impl<D: AsRef<[u8]>> fmt::Display for Tile<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let b = self.bounds;
        writeln!(f, "tile {}, {} ({} x {})", b.x, b.y, b.w, b.h)?;
        for y in b.y .. b.bottom() {
            write!(f, "[{:3}]: ", y - b.y)?;
            for v in self.row(y) {
                write!(f, "{:02x}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
