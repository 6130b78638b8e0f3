// Host-side tests for source planning, duplication and asset assembly.

use cyl_core::*;
use std::f64::consts::TAU;

fn figures(n: usize) -> Vec<FigureSource> {
    (0..n)
        .map(|i| FigureSource::new(format!("https://example.test/{i}.jpg"), format!("Figure {i}")))
        .collect()
}

#[test]
fn small_sets_are_doubled_with_captions_in_step() {
    let config = CarouselConfig::default();
    for n in 1..=4 {
        let set = SourceSet::plan(figures(n), &config).unwrap();
        assert_eq!(set.original_len(), n);
        assert_eq!(set.len(), 2 * n, "N={n} should double");
        assert!(set.is_duplicated());
        let urls: Vec<&str> = set.urls().collect();
        let captions: Vec<&str> = set.captions().collect();
        for i in 0..set.len() {
            assert_eq!(captions[i], format!("Figure {}", i % n));
            assert_eq!(urls[i], urls[i % n]);
            assert_eq!(set.entries()[i], set.entries()[i % n]);
        }
    }
}

#[test]
fn larger_sets_are_left_alone() {
    let set = SourceSet::plan(figures(5), &CarouselConfig::default()).unwrap();
    assert_eq!(set.len(), 5);
    assert!(!set.is_duplicated());
}

#[test]
fn threshold_is_configurable() {
    let config = CarouselConfig {
        duplicate_threshold: 6,
        ..CarouselConfig::default()
    };
    assert_eq!(SourceSet::plan(figures(6), &config).unwrap().len(), 12);
    assert_eq!(SourceSet::plan(figures(7), &config).unwrap().len(), 7);

    let never = CarouselConfig {
        duplicate_threshold: 0,
        ..CarouselConfig::default()
    };
    assert_eq!(SourceSet::plan(figures(1), &never).unwrap().len(), 1);
}

#[test]
fn duplicate_small_set_is_generic() {
    assert_eq!(duplicate_small_set(vec![1, 2], 4), vec![1, 2, 1, 2]);
    assert_eq!(duplicate_small_set(vec![1, 2, 3, 4, 5], 4), vec![1, 2, 3, 4, 5]);
    assert!(duplicate_small_set(Vec::<u8>::new(), 4).is_empty());
}

#[test]
fn empty_source_set_is_invalid() {
    let err = SourceSet::plan(Vec::new(), &CarouselConfig::default()).unwrap_err();
    assert!(matches!(err, CarouselError::InvalidInput(_)));
    let blank = vec![FigureSource::new("  ", "no src")];
    assert!(SourceSet::plan(blank, &CarouselConfig::default()).is_err());
}

#[test]
fn two_images_double_and_still_fill_the_turn() {
    let set = SourceSet::plan(figures(2), &CarouselConfig::default()).unwrap();
    assert_eq!(set.len(), 4);
    let dims = vec![ImageDims::new(100, 80); set.len()];
    let assets = assemble_assets(&set, &dims).unwrap();
    let layout = CarouselLayout::from_assets(&assets, 0.005).unwrap();
    assert_eq!(layout.len(), 4);
    assert!((layout.theta_sum() - TAU).abs() < 1e-9);
}

#[test]
fn assemble_pairs_sizes_in_source_order() {
    let set = SourceSet::plan(figures(5), &CarouselConfig::default()).unwrap();
    let dims: Vec<ImageDims> = (1..=5).map(|i| ImageDims::new(i * 100, 50)).collect();
    let assets = assemble_assets(&set, &dims).unwrap();
    for (i, a) in assets.iter().enumerate() {
        assert_eq!(a.url, set.entries()[i].url);
        assert_eq!(a.caption, format!("Figure {i}"));
        assert_eq!(a.width, (i as u32 + 1) * 100);
        assert_eq!(a.dims(), dims[i]);
    }
}

#[test]
fn assemble_rejects_bad_sizes() {
    let set = SourceSet::plan(figures(5), &CarouselConfig::default()).unwrap();
    let short = vec![ImageDims::new(10, 10); 4];
    assert!(assemble_assets(&set, &short).is_err());
    let mut zero = vec![ImageDims::new(10, 10); 5];
    zero[3] = ImageDims::new(0, 10);
    assert!(matches!(
        assemble_assets(&set, &zero),
        Err(CarouselError::InvalidInput(_))
    ));
}

#[test]
fn config_defaults_and_validation() {
    let c = CarouselConfig::default();
    assert_eq!(c.gutter_fraction, 0.005);
    assert_eq!(c.duplicate_threshold, 4);
    assert_eq!(c.transition_duration_ms, 500);
    assert!(!c.debug_overlay);
    assert!(c.validate().is_ok());

    let bad = [
        CarouselConfig { gutter_fraction: -0.1, ..c.clone() },
        CarouselConfig { gutter_fraction: 1.0, ..c.clone() },
        CarouselConfig { gutter_fraction: f64::NAN, ..c.clone() },
        CarouselConfig { background_opacity: 1.5, ..c.clone() },
        CarouselConfig { radial_segments: 0, ..c.clone() },
        CarouselConfig { asset_timeout_ms: 0, ..c.clone() },
    ];
    for b in bad {
        assert!(b.validate().is_err(), "expected {b:?} to be rejected");
    }
}

#[test]
fn clear_colour_is_premultiplied() {
    let c = CarouselConfig {
        background_color: parse_hex_color("#ff8000").unwrap(),
        background_opacity: 0.5,
        ..CarouselConfig::default()
    };
    let [r, g, b, a] = c.clear_rgba();
    assert!((r - 0.5).abs() < 1e-6);
    assert!((g - 0.5 * 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(b, 0.0);
    assert_eq!(a, 0.5);
    assert_eq!(rgb_from_u32(0x00ff00), [0.0, 1.0, 0.0]);
}

#[test]
fn error_messages_name_the_failure() {
    let e = CarouselError::AssetLoadFailure {
        index: 2,
        url: "a.png".into(),
        reason: "404".into(),
    };
    assert_eq!(e.to_string(), "image 2 (a.png) failed to load: 404");
    let t = CarouselError::AssetLoadTimeout {
        pending: 3,
        timeout_ms: 100,
    };
    assert!(t.to_string().contains("100ms"));
}
