//! Grayscale coverage surface
//!
//! A minimal tile consumer: every tile is composited onto an 8 bit mask
//! with white as the fill value. Masks can be written to and read from
//! PNG files, which is mostly useful to compare renders in tests.

use crate::clip::Rect;
use crate::error::Result;
use crate::math::{lerp_u8, multiply_u8};
use crate::tile::TileRef;
use crate::TileSink;

use std::path::Path;

/// 8 bit coverage mask
///
/// Data is stored row-major (C-format), one byte per pixel
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Mask {
    /// Coverage of every pixel
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Scale applied to incoming coverage
    opacity: u8,
}

impl Mask {
    /// Empty (all zero) mask of width x height pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![0; width * height], width, height, opacity: 255 }
    }
    /// Rectangle covering the whole mask, suitable as a clip
    pub fn clip_rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
    /// Set every pixel to `v`
    pub fn clear(&mut self, v: u8) {
        self.data.iter_mut().for_each(|p| *p = v);
    }
    /// Scale subsequent tile coverage by `a`
    pub fn opacity(&mut self, a: u8) {
        self.opacity = a;
    }
    /// Coverage at (x,y), 0 outside of the mask
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if self.clip_rect().contains(x, y) {
            self.data[x as usize + y as usize * self.width]
        } else {
            0
        }
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// Composite a tile, pixels outside of the mask are dropped
    pub fn blend_tile(&mut self, tile: &TileRef<'_>) {
        let r = tile.bounds().intersection(&self.clip_rect());
        for y in r.y .. r.bottom() {
            let row = y as usize * self.width;
            for x in r.x .. r.right() {
                let cover = multiply_u8(tile.get(x, y), self.opacity);
                if cover == 0 {
                    continue;
                }
                let p = &mut self.data[row + x as usize];
                *p = lerp_u8(*p, 255, cover);
            }
        }
    }
    /// Write the mask as a grayscale PNG
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        image::save_buffer(filename, &self.data, self.width as u32, self.height as u32,
                           image::ColorType::L8)?;
        Ok(())
    }
    /// Read an image, converting it to grayscale
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let img = image::open(filename)?.to_luma8();
        let (w, h) = img.dimensions();
        Ok(Self { data: img.into_raw(), width: w as usize, height: h as usize, opacity: 255 })
    }
}

impl TileSink for Mask {
    fn tile(&mut self, tile: &TileRef<'_>) {
        self.blend_tile(tile);
    }
}

/// Compare two image files as grayscale masks
///
/// Differing pixels are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let m1 = Mask::from_file(f1)?;
    let m2 = Mask::from_file(f2)?;
    if m1.width != m2.width || m1.height != m2.height {
        log::debug!("image sizes differ: {}x{} {}x{}", m1.width, m1.height, m2.width, m2.height);
        return Ok(false);
    }
    let mut flag = true;
    for (i, (v1, v2)) in m1.data.iter().zip(m2.data.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{}]: {} {}", i, i % m1.width, i / m1.width, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
