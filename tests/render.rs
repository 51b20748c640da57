use polytile::{Antialias, Path, Polygon, Rasterizer, Rect, Tile, TileRef, Transform};
use test_log::test;

fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Polygon {
    Polygon::from(Path::from(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)][..]))
}

fn collect(ras: &Rasterizer, poly: &Polygon) -> Vec<Tile> {
    let mut tiles = vec![];
    ras.render_into(poly, &mut tiles);
    tiles
}

fn at(tiles: &[Tile], x: i32, y: i32) -> u8 {
    tiles.iter().map(|t| t.get(x, y)).max().unwrap_or(0)
}

#[test]
fn interior_is_fully_covered() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 100, 100);
    ras.antialias(Antialias::X4);
    let tiles = collect(&ras, &square(10.0, 10.0, 50.0, 50.0));
    assert_eq!(tiles.len(), 4);
    for t in &tiles {
        for (x, y, c) in t.pixels() {
            assert_eq!(c, 255, "pixel {} {}", x, y);
        }
    }
}

#[test]
fn exterior_is_empty() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 100, 100);
    let tri = Polygon::from(Path::from(&[(0.0, 0.0), (40.0, 0.0), (0.0, 40.0)][..]));
    let tiles = collect(&ras, &tri);
    for t in &tiles {
        assert!(t.samples() == 1);
        for (x, y, c) in t.pixels() {
            assert!(t.sample_count(x, y) <= t.samples());
            if x + y <= 37 {
                assert_eq!(c, 255, "inside {} {}", x, y);
            } else if x + y >= 40 {
                assert_eq!(c, 0, "outside {} {}", x, y);
            }
        }
    }
}

#[test]
fn tiles_stay_inside_clip() {
    let mut ras = Rasterizer::new();
    let clip = Rect::new(10, 20, 30, 40);
    ras.clip_rect(clip);
    let tiles = collect(&ras, &square(-20.0, -20.0, 80.0, 80.0));
    assert_eq!(tiles.len(), 2);
    let mut area = 0;
    for t in &tiles {
        assert!(clip.contains_rect(&t.bounds()), "{:?}", t.bounds());
        area += t.bounds().area();
        assert!(t.pixels().all(|(_, _, c)| c == 255));
    }
    assert_eq!(area, clip.area());
}

#[test]
fn tiles_cover_region_once_in_row_major_order() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 200, 200);
    let tri = Polygon::from(Path::from(&[(5.0, 7.0), (100.0, 7.0), (50.0, 70.0)][..]));
    let tiles = collect(&ras, &tri);
    let region = Rect::new(5, 7, 95, 63);

    let bounds: Vec<Rect> = tiles.iter().map(|t| t.bounds()).collect();
    assert_eq!(bounds.len(), 6);
    assert_eq!(bounds[0], Rect::new(5, 7, 32, 32));
    assert_eq!(bounds[5], Rect::new(69, 39, 31, 31));

    let mut sorted = bounds.clone();
    sorted.sort_by_key(|r| (r.y, r.x));
    assert_eq!(bounds, sorted);

    for (i, a) in bounds.iter().enumerate() {
        assert!(a.w <= polytile::TILE_SIZE && a.h <= polytile::TILE_SIZE);
        assert!(region.contains_rect(a));
        for b in &bounds[i + 1 ..] {
            assert!(a.intersection(b).is_empty());
        }
    }
    assert_eq!(bounds.iter().map(|r| r.area()).sum::<i64>(), region.area());
}

#[test]
fn coordinates_far_outside_clip() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 64, 64);
    ras.antialias(Antialias::X8);
    let tiles = collect(&ras, &square(-1000.0, -1000.0, 1000.0, 1000.0));
    assert_eq!(tiles.len(), 4);
    assert!(tiles.iter().all(|t| t.pixels().all(|(_, _, c)| c == 255)));
}

#[test]
fn coordinates_beyond_i32_range() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 100, 100);
    let tiles = collect(&ras, &square(-3e9, 0.0, 50.0, 50.0));
    assert_eq!(tiles.len(), 4);
    assert_eq!(tiles[0].bounds(), Rect::new(0, 0, 32, 32));
    assert_eq!(at(&tiles, 10, 10), 255);
    assert_eq!(at(&tiles, 49, 49), 255);

    let tiles = collect(&ras, &square(-3e9, -3e9, 3e9, 3e9));
    assert_eq!(tiles.len(), 16);
    assert!(tiles.iter().all(|t| t.pixels().all(|(_, _, c)| c == 255)));
}

#[test]
fn partial_coverage_per_antialias_level() {
    let rect = square(0.5, 0.0, 1.5, 1.0);
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 10, 10);

    let tiles = collect(&ras, &rect);
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].bounds(), Rect::new(0, 0, 2, 1));
    assert_eq!((at(&tiles, 0, 0), at(&tiles, 1, 0)), (255, 0));

    for &aa in &[Antialias::X2, Antialias::X4, Antialias::X8] {
        ras.antialias(aa);
        let tiles = collect(&ras, &rect);
        assert_eq!(tiles[0].samples(), aa.samples());
        assert_eq!(tiles[0].sample_count(0, 0), aa.samples() / 2);
        assert_eq!((at(&tiles, 0, 0), at(&tiles, 1, 0)), (127, 127), "{:?}", aa);
    }
}

#[test]
fn default_and_empty_clip_emit_nothing() {
    let poly = square(0.0, 0.0, 10.0, 10.0);
    let mut ras = Rasterizer::new();
    assert!(collect(&ras, &poly).is_empty());
    ras.clip(0, 0, 0, 50);
    assert!(collect(&ras, &poly).is_empty());
    ras.clip(20, 20, 50, 50);
    assert!(collect(&ras, &poly).is_empty());
}

#[test]
fn degenerate_paths_are_ignored() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 1000, 1000);

    let line = Polygon::from(Path::from(&[(0.0, 0.0), (50.0, 50.0)][..]));
    assert!(collect(&ras, &line).is_empty());

    // Neither the line nor the broken path widen the bounds
    let mut poly = square(0.0, 0.0, 10.0, 10.0);
    poly.push(Path::from(&[(500.0, 500.0), (600.0, 600.0)][..]));
    poly.push(Path::from(&[(0.0, 0.0), (f32::NAN, 900.0), (900.0, 900.0)][..]));
    let tiles = collect(&ras, &poly);
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].bounds(), Rect::new(0, 0, 10, 10));
}

#[test]
fn zero_scale_collapses_to_nothing() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 100, 100);
    ras.transform(Transform::new_scale(0.0, 0.0)).unwrap();
    assert!(collect(&ras, &square(0.0, 0.0, 10.0, 10.0)).is_empty());
}

#[test]
fn render_without_callback() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 100, 100);
    ras.render(&square(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn callback_sees_every_tile() {
    let poly = square(0.0, 0.0, 70.0, 40.0);
    let mut seen = vec![];
    {
        let mut ras = Rasterizer::new();
        ras.clip(0, 0, 100, 100);
        ras.tile_callback(|tile: &TileRef| seen.push((tile.bounds(), tile.get(5, 5))));
        ras.render(&poly);
    }
    assert_eq!(seen.len(), 6);
    assert_eq!(seen[0], (Rect::new(0, 0, 32, 32), 255));
    assert_eq!(seen[1].1, 0);
}

#[test]
fn repeated_renders_are_identical() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 100, 100);
    ras.antialias(Antialias::X4);
    ras.transform(Transform::new_rotate(17.0).translated(40.0, 10.0)).unwrap();
    let poly = square(3.3, 1.7, 45.1, 38.9);
    let a = collect(&ras, &poly);
    let b = collect(&ras, &poly);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn pull_matches_push() {
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 128, 128);
    ras.antialias(Antialias::X2);
    let poly = Polygon::from(Path::from(&[(3.0, 90.0), (60.0, 2.5), (120.0, 110.0)][..]));
    let pushed = collect(&ras, &poly);
    let mut it = ras.tiles(&poly);
    let pulled: Vec<Tile> = it.by_ref().collect();
    assert_eq!(pushed, pulled);
    assert!(it.next().is_none());
}

#[test]
fn trimmed_tiles_keep_coverage() {
    let tri = Polygon::from(Path::from(&[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)][..]));
    let mut ras = Rasterizer::new();
    ras.clip(0, 0, 128, 128);
    ras.antialias(Antialias::X4);
    let full = collect(&ras, &tri);
    ras.trim_tiles(true);
    let trimmed = collect(&ras, &tri);

    assert_eq!(full.len(), 16);
    assert!(trimmed.len() < full.len());

    let covered = |tiles: &[Tile]| {
        let mut v: Vec<(i32, i32, u8)> = tiles.iter()
            .flat_map(|t| t.pixels().filter(|p| p.2 != 0).collect::<Vec<_>>())
            .collect();
        v.sort();
        v
    };
    assert_eq!(covered(&full), covered(&trimmed));

    for t in &trimmed {
        let b = t.bounds();
        assert!(t.row(b.y).any(|c| c != 0));
        assert!(t.row(b.bottom() - 1).any(|c| c != 0));
        assert!((b.y .. b.bottom()).any(|y| t.get(b.x, y) != 0));
        assert!((b.y .. b.bottom()).any(|y| t.get(b.right() - 1, y) != 0));
    }
}
