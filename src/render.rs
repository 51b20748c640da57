//! Tile generation

use crate::clip::{Rect, Rectangle};
use crate::edge::{Edge, InterceptTable};
use crate::paths::{Path, Point, Polygon};
use crate::raster::{Antialias, FillingRule, Settings};
use crate::scan::{Scanline, Span};
use crate::tile::{Tile, TileRef, TILE_AREA, TILE_SIZE};
use crate::TileSink;

use log::{debug, trace, warn};

use std::iter::FusedIterator;

/// Sink dropping every tile
pub(crate) struct Discard;

impl TileSink for Discard {
    fn tile(&mut self, _tile: &TileRef<'_>) { }
}

/// Scan conversion state of a single render call
///
/// Holds the transformed edges of the polygon, the working region (bounds
/// of the polygon intersected with the clip) and the position of the next
/// tile. Tiles are produced row-major, left to right and top to bottom.
#[derive(Debug)]
pub(crate) struct TileScan {
    rule: FillingRule,
    antialias: Antialias,
    trim: bool,
    edges: Vec<Edge>,
    region: Rect,
    next: Option<(i32, i32)>,
    /// Edges overlapping the current row of tiles
    active: Vec<usize>,
    active_y: Option<i32>,
    table: InterceptTable,
    scanline: Scanline,
    coverage: [u8; TILE_AREA],
}

impl TileScan {
    pub fn new(settings: &Settings, polygon: &Polygon) -> Self {
        let t = &settings.transform;
        let mut edges = vec![];
        let mut bounds: Option<Rectangle<f32>> = None;
        let mut paths = 0;

        for path in polygon.renderable_paths() {
            let path: Path = path.points.iter().map(|p| t.apply(*p)).collect();
            if !path.points.iter().all(Point::is_finite) {
                warn!("skipping path of {} points with non-finite coordinates", path.len());
                continue;
            }
            paths += 1;
            edges.extend(path.edges().filter_map(|(a, b)| Edge::new(a, b)));
            for p in &path.points {
                match bounds {
                    None => bounds = Some(Rectangle::new(p.x, p.y, p.x, p.y)),
                    Some(ref mut b) => b.expand(p.x, p.y),
                }
            }
        }

        let region = match bounds {
            Some(b) => b.clipped_rect(&settings.clip),
            None => Rect::default(),
        };
        debug!("draw polygon with {} of {} paths, {} edges, bounds {:?}, clip {:?}, region {:?}",
               paths, polygon.paths.len(), edges.len(), bounds, settings.clip, region);

        let next = if region.is_empty() { None } else { Some((region.x, region.y)) };
        Self {
            rule: polygon.filling_rule,
            antialias: settings.antialias,
            trim: settings.trim,
            edges, region, next,
            active: vec![],
            active_y: None,
            table: InterceptTable::new(),
            scanline: Scanline::new(),
            coverage: [0; TILE_AREA],
        }
    }

    /// Bounds of the next tile in scan order, clipped to the working region
    fn next_bounds(&mut self) -> Option<Rect> {
        let (x, y) = self.next?;
        let r = Rect::new(x, y, TILE_SIZE, TILE_SIZE).intersection(&self.region);
        let nx = x.saturating_add(TILE_SIZE);
        let ny = y.saturating_add(TILE_SIZE);
        self.next = if nx < self.region.right() {
            Some((nx, y))
        } else if ny < self.region.bottom() {
            Some((self.region.x, ny))
        } else {
            None
        };
        Some(r)
    }

    fn update_active(&mut self, bounds: &Rect) {
        if self.active_y == Some(bounds.y) {
            return;
        }
        let (y0, y1) = (bounds.y as f32, bounds.bottom() as f32);
        let edges = &self.edges;
        self.active.clear();
        self.active.extend((0 .. edges.len()).filter(|&i| edges[i].spans_rows(y0, y1)));
        self.active_y = Some(bounds.y);
        trace!("tile row {}: {} active edges", bounds.y, self.active.len());
    }

    /// Accumulate the sample counts of the tile at `bounds`
    fn rasterize(&mut self, bounds: &Rect) {
        let shift = self.antialias.shift();
        let scale = self.antialias.scale();
        let rows = (bounds.h << shift) as usize;
        let width = bounds.w << shift;
        let origin = Point::new(bounds.x as f32, bounds.y as f32);

        self.coverage.iter_mut().for_each(|v| *v = 0);
        self.table.reset(rows);
        for &i in &self.active {
            self.table.add_edge(&self.edges[i], origin, scale as f32);
        }
        self.table.sort();

        let stride = TILE_SIZE as usize;
        for r in 0 .. rows {
            let cuts = self.table.row(r);
            if cuts.is_empty() {
                continue;
            }
            self.scanline.sweep(cuts, self.rule, width);
            let py = r >> shift;
            let row = &mut self.coverage[py * stride .. (py + 1) * stride];
            for span in &self.scanline.spans {
                accumulate(row, span, shift);
            }
        }
    }

    /// Covered part of the tile and the offset of its first counter
    fn trimmed(&self, bounds: &Rect) -> Option<(Rect, usize)> {
        let stride = TILE_SIZE as usize;
        let (w, h) = (bounds.w as usize, bounds.h as usize);
        let (mut x0, mut y0, mut x1, mut y1) = (w, h, 0, 0);
        for ly in 0 .. h {
            let row = &self.coverage[ly * stride .. ly * stride + w];
            if let Some(first) = row.iter().position(|&v| v != 0) {
                let last = row.iter().rposition(|&v| v != 0).unwrap_or(first);
                x0 = x0.min(first);
                x1 = x1.max(last + 1);
                y0 = y0.min(ly);
                y1 = ly + 1;
            }
        }
        if x1 <= x0 {
            return None;
        }
        let r = Rect::new(bounds.x + x0 as i32, bounds.y + y0 as i32,
                          (x1 - x0) as i32, (y1 - y0) as i32);
        Some((r, x0 + y0 * stride))
    }

    /// Scan convert and return the next tile
    pub fn next_tile(&mut self) -> Option<TileRef<'_>> {
        loop {
            let bounds = self.next_bounds()?;
            self.update_active(&bounds);
            self.rasterize(&bounds);
            let (bounds, offset) = if self.trim {
                match self.trimmed(&bounds) {
                    Some(v) => v,
                    None => {
                        trace!("tile {:?} has no coverage, skipping", bounds);
                        continue;
                    }
                }
            } else {
                (bounds, 0)
            };
            let samples = self.antialias.samples();
            return Some(Tile::new(bounds, TILE_SIZE as usize, samples, &self.coverage[offset ..]));
        }
    }
}

/// Add the samples of one span to a row of pixel counters
///
/// Span ends are in sample columns, `1 << shift` columns per pixel
fn accumulate(row: &mut [u8], span: &Span, shift: u32) {
    let scale = 1 << shift;
    let mask = scale - 1;
    let mut px = (span.x0 >> shift) as usize;
    let end = (span.x1 >> shift) as usize;
    if px == end {
        row[px] += span.len() as u8;
        return;
    }
    row[px] += (scale - (span.x0 & mask)) as u8;
    px += 1;
    while px < end {
        row[px] += scale as u8;
        px += 1;
    }
    let tail = span.x1 & mask;
    if tail != 0 {
        row[end] += tail as u8;
    }
}

/// Rasterize `polygon` and hand every tile to `sink`
///
/// Each tile is delivered exactly once, in row-major order
pub fn render_tiles<S>(settings: &Settings, polygon: &Polygon, sink: &mut S)
    where S: TileSink + ?Sized
{
    let mut scan = TileScan::new(settings, polygon);
    let mut n = 0;
    while let Some(tile) = scan.next_tile() {
        if log::log_enabled!(log::Level::Trace) {
            trace!("{}", tile);
        }
        sink.tile(&tile);
        n += 1;
    }
    debug!("emitted {} tiles", n);
}

/// Pull style tile generation
///
/// Created by [Rasterizer::tiles](struct.Rasterizer.html#method.tiles).
/// Each tile is scan converted when requested; the sequence is finite and
/// cannot be restarted.
#[derive(Debug)]
pub struct Tiles {
    scan: TileScan,
}

impl Tiles {
    pub(crate) fn new(settings: &Settings, polygon: &Polygon) -> Self {
        Self { scan: TileScan::new(settings, polygon) }
    }
}

impl Iterator for Tiles {
    type Item = Tile;
    fn next(&mut self) -> Option<Tile> {
        self.scan.next_tile().map(|t| t.owned())
    }
}

impl FusedIterator for Tiles {}
