mod common;

use approx::assert_relative_eq;
use cellscan_core::detect::detect;
use cellscan_core::params::DetectParams;
use common::{black_frame, draw_filled_circle, draw_filled_square, RED_BGR};

fn circle_params() -> DetectParams {
    DetectParams {
        hue_lo: 0,
        hue_hi: 10,
        sat_lo: 100,
        sat_hi: 255,
        val_lo: 100,
        val_hi: 255,
        kernel_size: 3,
        min_area: 50.0,
        max_area: 1000.0,
    }
}

/// Two red circles (radius 10 and 5) on black, both inside the area band.
fn two_circle_frame() -> cellscan_core::frame::Frame {
    let mut frame = black_frame(100, 100);
    draw_filled_circle(&mut frame, 30, 30, 10, RED_BGR);
    draw_filled_circle(&mut frame, 70, 70, 5, RED_BGR);
    frame
}

#[test]
fn test_two_circles_counted() {
    let detection = detect(&two_circle_frame(), &circle_params());
    assert_eq!(detection.count(), 2);

    // Scan order: the radius-10 circle starts higher in the raster.
    let (cx, cy) = detection.contours[0].centroid.expect("centroid defined");
    assert_relative_eq!(cx, 30.0, epsilon = 1.5);
    assert_relative_eq!(cy, 30.0, epsilon = 1.5);
}

#[test]
fn test_max_area_excludes_larger_circle() {
    let params = DetectParams {
        max_area: 100.0,
        ..circle_params()
    };
    let detection = detect(&two_circle_frame(), &params);
    assert_eq!(detection.count(), 1);

    let (cx, cy) = detection.contours[0].centroid.expect("centroid defined");
    assert_relative_eq!(cx, 70.0, epsilon = 1.5);
    assert_relative_eq!(cy, 70.0, epsilon = 1.5);
}

#[test]
fn test_detect_is_idempotent() {
    let frame = two_circle_frame();
    let params = circle_params();

    let first = detect(&frame, &params);
    let second = detect(&frame, &params);

    assert_eq!(first.mask, second.mask);
    assert_eq!(first.closed, second.closed);
    assert_eq!(first.count(), second.count());
    assert_eq!(first.annotated, second.annotated);
}

#[test]
fn test_area_filter_boundaries_are_inclusive() {
    // A filled 6x6 square traces to an exact polygon area of 25.
    // Kernel 1 makes the closing stage an identity.
    let mut frame = black_frame(20, 20);
    draw_filled_square(&mut frame, 5, 5, 6, RED_BGR);

    let base = DetectParams {
        kernel_size: 1,
        ..circle_params()
    };

    let at_min = DetectParams {
        min_area: 25.0,
        max_area: 1000.0,
        ..base.clone()
    };
    assert_eq!(detect(&frame, &at_min).count(), 1);

    let above_min = DetectParams {
        min_area: 26.0,
        max_area: 1000.0,
        ..base.clone()
    };
    assert_eq!(detect(&frame, &above_min).count(), 0);

    let at_max = DetectParams {
        min_area: 0.0,
        max_area: 25.0,
        ..base.clone()
    };
    assert_eq!(detect(&frame, &at_max).count(), 1);

    let below_max = DetectParams {
        min_area: 0.0,
        max_area: 24.0,
        ..base
    };
    assert_eq!(detect(&frame, &below_max).count(), 0);
}

#[test]
fn test_count_matches_blob_count() {
    // k disjoint blobs of strictly increasing area, all in range.
    let mut frame = black_frame(60, 60);
    draw_filled_square(&mut frame, 5, 5, 4, RED_BGR);
    draw_filled_square(&mut frame, 20, 30, 6, RED_BGR);
    draw_filled_square(&mut frame, 45, 10, 8, RED_BGR);

    let params = DetectParams {
        kernel_size: 1,
        min_area: 5.0,
        max_area: 100.0,
        ..circle_params()
    };
    assert_eq!(detect(&frame, &params).count(), 3);
}

#[test]
fn test_inverted_hue_bounds_detect_nothing() {
    let params = DetectParams {
        hue_lo: 10,
        hue_hi: 0,
        ..circle_params()
    };
    let detection = detect(&two_circle_frame(), &params);
    assert!(detection.mask.iter().all(|&v| !v));
    assert_eq!(detection.count(), 0);
}

#[test]
fn test_annotated_frame_keeps_dimensions() {
    let frame = two_circle_frame();
    let detection = detect(&frame, &circle_params());
    assert_eq!(detection.annotated.width(), frame.width());
    assert_eq!(detection.annotated.height(), frame.height());
    assert_eq!(detection.mask.dim(), (100, 100));
    assert_eq!(detection.closed.dim(), (100, 100));
}
