// Host-side tests for the angular layout.

use cyl_core::*;
use std::f64::consts::TAU;

fn dims(widths: &[u32]) -> Vec<ImageDims> {
    widths.iter().map(|&w| ImageDims::new(w, 100)).collect()
}

fn assert_close(a: f64, b: f64, what: &str) {
    let tol = 1e-9 * a.abs().max(b.abs()).max(1.0);
    assert!((a - b).abs() <= tol, "{what}: {a} vs {b}");
}

#[test]
fn thetas_sum_to_full_turn() {
    let cases: [&[u32]; 6] = [
        &[1],
        &[100, 100],
        &[640, 480, 1920, 300, 77],
        &[1, 1_000_000],
        &[3, 5, 7, 11, 13, 17, 19, 23],
        &[4000; 12],
    ];
    for widths in cases {
        for gutter in [0.0, 0.005, 0.02] {
            let layout = CarouselLayout::compute(&dims(widths), gutter).unwrap();
            assert_close(layout.theta_sum(), TAU, &format!("theta sum for {widths:?}"));
        }
    }
}

#[test]
fn theta_is_proportional_to_width() {
    let layout = CarouselLayout::compute(&dims(&[100, 300]), 0.005).unwrap();
    let s = layout.segments();
    assert_close(s[0].theta, TAU / 4.0, "theta 0");
    assert_close(s[1].theta, 3.0 * TAU / 4.0, "theta 1");
    assert_close(s[1].theta / s[0].theta, 3.0, "ratio");
}

#[test]
fn gutter_only_affects_rendered_extent_and_midpoint() {
    let widths = dims(&[200, 100, 300]);
    let bare = CarouselLayout::compute(&widths, 0.0).unwrap();
    let gapped = CarouselLayout::compute(&widths, 0.01).unwrap();
    let g = 0.01 * TAU;
    assert_close(gapped.gutter_radians(), g, "gutter radians");
    for (a, b) in bare.segments().iter().zip(gapped.segments()) {
        assert_close(a.theta, b.theta, "theta unaffected");
        assert_close(a.start, b.start, "start unaffected");
        assert_close(b.rendered_extent, a.theta - g, "extent shrinks by gutter");
        assert_close(b.midpoint, a.midpoint - g / 2.0, "midpoint shifts half a gutter");
    }
}

#[test]
fn midpoints_follow_formula_and_increase() {
    let widths = [120, 80, 400, 40, 360];
    let layout = CarouselLayout::compute(&dims(&widths), 0.005).unwrap();
    let total: f64 = widths.iter().map(|&w| w as f64).sum();
    let g = 0.005 * TAU;
    let mut acc = 0.0;
    for (i, s) in layout.segments().iter().enumerate() {
        let w = widths[i] as f64;
        let expected = ((w / 2.0 + acc) / total) * TAU - g / 2.0;
        assert_close(s.midpoint, expected, &format!("midpoint {i}"));
        acc += w;
    }
    for pair in layout.segments().windows(2) {
        assert!(
            pair[1].midpoint > pair[0].midpoint,
            "midpoints not increasing: {} then {}",
            pair[0].midpoint,
            pair[1].midpoint
        );
    }
    let last = layout.segments().last().unwrap();
    assert!(last.midpoint < TAU, "midpoints stay within one turn");
}

#[test]
fn relative_height_keeps_aspect() {
    let d = vec![ImageDims::new(400, 200), ImageDims::new(100, 300)];
    let layout = CarouselLayout::compute(&d, 0.0).unwrap();
    for (s, d) in layout.segments().iter().zip(&d) {
        let ratio = d.height as f64 / d.width as f64;
        assert_close(s.ratio, ratio, "ratio");
        assert_close(s.relative_height, s.theta * ratio, "relative height");
        // height over angular width (arc length at radius 1) is the image aspect
        assert_close(s.relative_height / s.theta, ratio, "aspect");
    }
    assert_close(
        layout.max_relative_height(),
        layout.segments()[1].relative_height,
        "tallest",
    );
}

#[test]
fn assembly_offset_faces_segment_zero() {
    let layout = CarouselLayout::compute(&dims(&[100, 200, 300]), 0.005).unwrap();
    assert_close(
        layout.assembly_offset(),
        -layout.segments()[0].midpoint,
        "offset",
    );
    // centre of segment 0's rendered span lands on angle 0
    let s0 = layout.segments()[0];
    assert_close(
        s0.start + s0.rendered_extent / 2.0 + layout.assembly_offset(),
        0.0,
        "facing",
    );
}

#[test]
fn five_equal_images() {
    let layout = CarouselLayout::compute(&dims(&[100; 5]), 0.005).unwrap();
    assert_eq!(layout.len(), 5);
    for s in layout.segments() {
        assert!((s.theta - 1.2566).abs() < 1e-4, "theta {}", s.theta);
    }
}

#[test]
fn rejects_empty_and_degenerate_input() {
    assert!(matches!(
        CarouselLayout::compute(&[], 0.005),
        Err(CarouselError::InvalidInput(_))
    ));
    assert!(matches!(
        CarouselLayout::compute(&[ImageDims::new(100, 50), ImageDims::new(0, 50)], 0.005),
        Err(CarouselError::InvalidInput(_))
    ));
    assert!(matches!(
        CarouselLayout::compute(&[ImageDims::new(100, 0)], 0.005),
        Err(CarouselError::InvalidInput(_))
    ));
    assert!(matches!(
        CarouselLayout::compute(&dims(&[100]), -0.1),
        Err(CarouselError::InvalidInput(_))
    ));
}
