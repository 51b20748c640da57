//! Tile based polygon fill rasterizer
//!
//! Polygons are scan converted into small rectangles of per-pixel
//! coverage, [Tile](struct.Tile.html)s of at most
//! [TILE_SIZE](constant.TILE_SIZE.html) pixels on a side, which are handed to a
//! consumer that blends them into its own surface. Nothing here knows about
//! colors or pixel formats.
//!
//! # How does this work
//!
//! ```text
//!     ras = Rasterizer::new()
//!       clip(), antialias(), transform(), tile_callback()
//!     ras.render(polygon)
//!       TileScan::new()          -- transform points, build edges
//!         bounds ∩ clip          -- working region, 'draw polygon'
//!       next_tile()              -- row-major over the region
//!         update_active()        -- edges overlapping the tile row
//!         rasterize()
//!           add_edge()           -- intercepts per sample row
//!           sort()
//!           sweep()              -- filling rule, interior spans
//!           accumulate()         -- samples per pixel
//!         trimmed()              -- optional, skip empty tiles
//!       TileSink::tile()         -- 'emitted N tiles'
//! ```
//!
//! # Example
//!
//!     use polytile::{Rasterizer, Antialias, Mask, primitives};
//!
//!     let poly = primitives::circle(50.0, 50.0, 20.0, 0.0);
//!     let mut mask = Mask::new(100, 100);
//!
//!     let mut ras = Rasterizer::new();
//!     ras.clip(0, 0, 100, 100);
//!     ras.antialias(Antialias::X4);
//!     ras.render_into(&poly, &mut mask);
//!
//!     assert_eq!(mask.get(50, 50), 255);
//!     assert_eq!(mask.get(5, 5), 0);
//!

pub mod clip;
pub mod edge;
pub mod error;
pub mod mask;
pub mod math;
pub mod paths;
pub mod primitives;
pub mod raster;
pub mod render;
pub mod scan;
pub mod tile;
pub mod transform;

pub use clip::*;
pub use edge::*;
pub use error::{Error, Result};
pub use mask::*;
pub use math::*;
pub use paths::*;
pub use raster::*;
pub use render::*;
pub use scan::*;
pub use tile::*;
pub use transform::*;

/// Consumer of rendered tiles
///
/// Tiles borrow the rasterizer's buffer and are only valid for the duration
/// of the call. Closures taking a `&TileRef` are sinks, as are `Vec<Tile>`
/// which keep owned copies of every tile.
pub trait TileSink {
    fn tile(&mut self, tile: &TileRef<'_>);
}

impl<F> TileSink for F where F: FnMut(&TileRef<'_>) {
    fn tile(&mut self, tile: &TileRef<'_>) {
        self(tile)
    }
}

impl TileSink for Vec<Tile> {
    fn tile(&mut self, tile: &TileRef<'_>) {
        self.push(tile.owned());
    }
}
