//! Rasterizer configuration and entry points

use crate::clip::Rect;
use crate::error::{Error, Result};
use crate::paths::Polygon;
use crate::render::{render_tiles, Discard, Tiles};
use crate::transform::Transform;
use crate::TileSink;

use std::convert::TryFrom;

/// Rule deciding which regions enclosed by the paths are interior
#[derive(Debug,PartialEq,Eq,Copy,Clone,Hash)]
pub enum FillingRule {
    /// Interior where the signed crossing count is not zero
    NonZero,
    /// Interior where the crossing count is odd
    EvenOdd,
}
impl Default for FillingRule {
    fn default() -> FillingRule {
        FillingRule::EvenOdd
    }
}
impl FillingRule {
    /// Is a point with accumulated `winding` inside the fill
    pub fn is_interior(&self, winding: i32) -> bool {
        match self {
            FillingRule::NonZero => winding != 0,
            FillingRule::EvenOdd => winding % 2 != 0,
        }
    }
}

/// Super-sampling level
///
/// Level N samples an N x N grid inside every pixel
#[derive(Debug,PartialEq,Eq,Copy,Clone,Hash)]
pub enum Antialias {
    None,
    X2,
    X4,
    X8,
}
impl Default for Antialias {
    fn default() -> Antialias {
        Antialias::None
    }
}
impl Antialias {
    /// Anti-alias level from a grid size
    ///
    ///     use polytile::Antialias;
    ///
    ///     assert_eq!(Antialias::from_level(4).unwrap(), Antialias::X4);
    ///     assert_eq!(Antialias::from_level(0).unwrap(), Antialias::None);
    ///     assert!(Antialias::from_level(3).is_err());
    ///
    pub fn from_level(level: u32) -> Result<Self> {
        match level {
            0 | 1 => Ok(Antialias::None),
            2 => Ok(Antialias::X2),
            4 => Ok(Antialias::X4),
            8 => Ok(Antialias::X8),
            _ => Err(Error::InvalidAntialias(level)),
        }
    }
    /// log2 of the grid size
    pub fn shift(self) -> u32 {
        match self {
            Antialias::None => 0,
            Antialias::X2 => 1,
            Antialias::X4 => 2,
            Antialias::X8 => 3,
        }
    }
    /// Sample rows (and columns) per pixel
    pub fn scale(self) -> i32 {
        1 << self.shift()
    }
    /// Samples per pixel
    pub fn samples(self) -> u32 {
        1 << (2 * self.shift())
    }
}
impl TryFrom<u32> for Antialias {
    type Error = Error;
    fn try_from(level: u32) -> Result<Self> {
        Antialias::from_level(level)
    }
}

/// Render state shared by every render call of a [Rasterizer](struct.Rasterizer.html)
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Settings {
    /// Tiles are never emitted outside of this rectangle
    pub clip: Rect,
    pub antialias: Antialias,
    /// Applied to every point before scan conversion
    pub transform: Transform,
    /// Shrink tiles to their covered pixels and skip empty tiles
    pub trim: bool,
}

/// Polygon Rasterizer
///
/// Holds the clip rectangle, anti-alias level, transform and the tile
/// callback used by [render](#method.render). Nothing is drawn until a clip
/// rectangle is set.
///
///     use polytile::{Rasterizer, Antialias, Polygon, Path, TileRef};
///
///     let square = Path::from(&[(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)][..]);
///     let poly = Polygon::from(square);
///
///     let mut covered = 0;
///     {
///         let mut ras = Rasterizer::new();
///         ras.clip(0, 0, 100, 100);
///         ras.antialias(Antialias::X4);
///         ras.tile_callback(|tile: &TileRef| {
///             covered += tile.pixels().filter(|&(_, _, c)| c == 255).count();
///         });
///         ras.render(&poly);
///     }
///     assert_eq!(covered, 64);
///
pub struct Rasterizer<'a> {
    settings: Settings,
    callback: Option<Box<dyn TileSink + 'a>>,
}

impl<'a> Default for Rasterizer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for Rasterizer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("settings", &self.settings)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl<'a> Rasterizer<'a> {
    pub fn new() -> Self {
        Self { settings: Settings::default(), callback: None }
    }
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings, callback: None }
    }
    /// Current render state
    pub fn settings(&self) -> Settings {
        self.settings
    }
    /// Set the clip rectangle
    ///
    /// Rectangles without area suppress all output
    pub fn clip(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.settings.clip = Rect::new(x, y, w, h);
    }
    pub fn clip_rect(&mut self, clip: Rect) {
        self.settings.clip = clip;
    }
    pub fn antialias(&mut self, level: Antialias) {
        self.settings.antialias = level;
    }
    /// Set the anti-alias level from a grid size of 1, 2, 4 or 8
    ///
    /// Other values are rejected and leave the level unchanged
    pub fn antialias_level(&mut self, level: u32) -> Result<()> {
        self.settings.antialias = Antialias::from_level(level)?;
        Ok(())
    }
    /// Set the transform applied to every render
    ///
    /// Transforms with non-finite components are rejected and leave the
    /// current transform in place
    pub fn transform(&mut self, t: Transform) -> Result<()> {
        t.validate()?;
        self.settings.transform = t;
        Ok(())
    }
    pub fn reset_transform(&mut self) {
        self.settings.transform = Transform::new();
    }
    /// Shrink tiles to their covered pixels and skip tiles without coverage
    pub fn trim_tiles(&mut self, trim: bool) {
        self.settings.trim = trim;
    }
    /// Register the tile callback, replacing any previous one
    pub fn tile_callback<F>(&mut self, f: F)
        where F: FnMut(&crate::TileRef<'_>) + 'a
    {
        self.callback = Some(Box::new(f));
    }
    /// Register a tile consumer, replacing any previous one
    pub fn tile_sink<S: TileSink + 'a>(&mut self, sink: S) {
        self.callback = Some(Box::new(sink));
    }
    /// Remove and return the registered tile consumer
    pub fn take_tile_callback(&mut self) -> Option<Box<dyn TileSink + 'a>> {
        self.callback.take()
    }
    pub fn has_tile_callback(&self) -> bool {
        self.callback.is_some()
    }
    /// Rasterize `polygon` and deliver its tiles to the registered callback
    ///
    /// Without a callback the polygon is still scan converted but nothing
    /// is delivered
    pub fn render(&mut self, polygon: &Polygon) {
        match self.callback {
            Some(ref mut sink) => render_tiles(&self.settings, polygon, sink.as_mut()),
            None => {
                log::debug!("render without a tile callback, tiles are discarded");
                render_tiles(&self.settings, polygon, &mut Discard);
            }
        }
    }
    /// Rasterize `polygon` into `sink`, ignoring the registered callback
    pub fn render_into<S: TileSink + ?Sized>(&self, polygon: &Polygon, sink: &mut S) {
        render_tiles(&self.settings, polygon, sink);
    }
    /// Lazily rasterize `polygon`, one owned tile at a time
    pub fn tiles(&self, polygon: &Polygon) -> Tiles {
        Tiles::new(&self.settings, polygon)
    }
}
