use polytile::primitives::{arc, circle, pie, rectangle, regular, rounded_rectangle};
use polytile::{Antialias, FillingRule, Mask, Polygon, Rasterizer};
use test_log::test;

fn draw(poly: &Polygon) -> Mask {
    let mut mask = Mask::new(100, 100);
    let mut ras = Rasterizer::new();
    ras.clip_rect(mask.clip_rect());
    ras.antialias(Antialias::X4);
    ras.render_into(poly, &mut mask);
    mask
}

#[test]
fn filled_rectangle() {
    let m = draw(&rectangle(10.0, 20.0, 30.0, 40.0, 0.0));
    assert_eq!(m.get(10, 20), 255);
    assert_eq!(m.get(39, 59), 255);
    assert_eq!(m.get(40, 20), 0);
    assert_eq!(m.get(10, 60), 0);
}

#[test]
fn outlined_rectangle() {
    for &rule in &[FillingRule::EvenOdd, FillingRule::NonZero] {
        let mut poly = rectangle(10.0, 10.0, 80.0, 60.0, 5.0);
        poly.filling_rule(rule);
        let m = draw(&poly);
        // Band
        assert_eq!(m.get(10, 40), 255, "{:?}", rule);
        assert_eq!(m.get(14, 40), 255, "{:?}", rule);
        assert_eq!(m.get(50, 67), 255, "{:?}", rule);
        // Hole and outside
        assert_eq!(m.get(15, 40), 0, "{:?}", rule);
        assert_eq!(m.get(50, 40), 0, "{:?}", rule);
        assert_eq!(m.get(50, 70), 0, "{:?}", rule);
    }
}

#[test]
fn rounded_corners_are_cut() {
    let m = draw(&rounded_rectangle(10.0, 10.0, 80.0, 80.0, [20.0, 0.0, 20.0, 0.0], 0.0));
    // Rounded top left and bottom right, square top right and bottom left
    assert_eq!(m.get(10, 10), 0);
    assert_eq!(m.get(89, 89), 0);
    assert_eq!(m.get(89, 10), 255);
    assert_eq!(m.get(10, 89), 255);
    assert_eq!(m.get(50, 50), 255);
}

#[test]
fn outlined_rounded_rectangle() {
    let m = draw(&rounded_rectangle(10.0, 10.0, 80.0, 80.0, [20.0; 4], 6.0));
    assert_eq!(m.get(50, 50), 0);
    assert_eq!(m.get(50, 12), 255);
    assert_eq!(m.get(12, 50), 255);
    assert_eq!(m.get(50, 17), 0);
    assert_eq!(m.get(10, 10), 0);
}

#[test]
fn circle_and_regular() {
    let m = draw(&circle(50.0, 50.0, 30.0, 0.0));
    assert_eq!(m.get(50, 50), 255);
    assert_eq!(m.get(50, 22), 255);
    assert_eq!(m.get(50, 18), 0);
    assert_eq!(m.get(22, 22), 0);

    // Triangle pointing down
    let m = draw(&regular(50.0, 50.0, 40.0, 3, 0.0));
    assert_eq!(m.get(50, 85), 255);
    assert_eq!(m.get(50, 15), 0);
}

#[test]
fn outlined_circle_and_regular() {
    for &rule in &[FillingRule::EvenOdd, FillingRule::NonZero] {
        let mut ring = circle(50.0, 50.0, 40.0, 8.0);
        ring.filling_rule(rule);
        let m = draw(&ring);
        assert_eq!(m.get(50, 50), 0, "{:?}", rule);
        assert_eq!(m.get(50, 14), 255, "{:?}", rule);
        assert_eq!(m.get(50, 85), 255, "{:?}", rule);
        assert_eq!(m.get(50, 25), 0, "{:?}", rule);
    }

    let m = draw(&regular(50.0, 50.0, 40.0, 4, 10.0));
    assert_eq!(m.get(50, 50), 0);
    assert_eq!(m.get(50, 84), 255);
}

#[test]
fn pie_covers_one_side() {
    // Angles run from +y towards +x
    let m = draw(&pie(50.0, 50.0, 30.0, 0.0, 180.0));
    assert_eq!(m.get(60, 50), 255);
    assert_eq!(m.get(40, 50), 0);
}

#[test]
fn arc_leaves_centre_empty() {
    let mut poly = arc(50.0, 50.0, 40.0, 10.0, 0.0, 360.0);
    poly.filling_rule(FillingRule::NonZero);
    let m = draw(&poly);
    assert_eq!(m.get(50, 50), 0);
    assert_eq!(m.get(50, 15), 255);
    assert_eq!(m.get(50, 5), 0);
}

#[test]
fn infinite_radius_draws_nothing() {
    let m = draw(&pie(50.0, 50.0, f32::INFINITY, 0.0, 90.0));
    assert!(m.as_bytes().iter().all(|&v| v == 0));
    let m = draw(&arc(50.0, 50.0, f32::INFINITY, 4.0, 0.0, 90.0));
    assert!(m.as_bytes().iter().all(|&v| v == 0));
}
