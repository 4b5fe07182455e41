//! View transform regression test
//!
//! Chain building, inversion, point and region mapping in both directions,
//! and sampling of real rasters through a chain.

use saccade_core::{Point, Region, Size};
use saccade_test::{RegParams, ramp};
use saccade_transform::{ResizeTarget, TransformError, TransformOp, ViewTransform};

fn chains() -> Vec<ViewTransform> {
    let src = ViewTransform::new(Size::new(100, 100));
    vec![
        src.clone(),
        src.add_submat(&Region::new(10, 20, 50, 40), false)
            .unwrap()
            .unwrap(),
        src.add_resize(ResizeTarget::Factor(0.5)).unwrap(),
        src.add_resize(ResizeTarget::Factor(0.5))
            .unwrap()
            .add_submat(&Region::new(10, 10, 20, 20), false)
            .unwrap()
            .unwrap(),
        src.add_submat_centered(Point::new(50, 50), Size::new(31, 21), false)
            .unwrap()
            .unwrap()
            .add_resize(ResizeTarget::Size(Size::new(62, 42)))
            .unwrap()
            .add_submat(&Region::new(5, 5, 40, 30), true)
            .unwrap()
            .unwrap(),
    ]
}

#[test]
fn viewtransform_invert_reg() {
    let mut rp = RegParams::new("viewtransform_invert");

    for vt in chains() {
        let inv = vt.invert();
        rp.compare_bool(true, inv.invert() == vt);
        rp.compare_bool(true, inv.source() == vt.final_size());
        rp.compare_bool(true, inv.final_size() == vt.source());
        rp.compare_values(vt.len() as f64, inv.len() as f64, 0.0);
        rp.compare_values(1.0, vt.scale_factor() * inv.scale_factor(), 1e-12);
    }

    assert!(rp.cleanup(), "viewtransform_invert regression test failed");
}

#[test]
fn viewtransform_mapping_reg() {
    let mut rp = RegParams::new("viewtransform_mapping");

    // Downsample by two, then look at a 20x20 window at (10, 10)
    let vt = chains()[3].clone();
    rp.compare_values(20.0, vt.final_size().width as f64, 0.0);
    rp.compare_values(0.5, vt.scale_factor(), 0.0);
    let back = vt.invert().map_point(Point::new(20, 20));
    rp.compare_values(60.0, back.x as f64, 0.0);
    rp.compare_values(60.0, back.y as f64, 0.0);
    let fwd = vt.map_point(Point::new(60, 60));
    rp.compare_bool(true, fwd == Point::new(20, 20));

    // Crop-only chains map back exactly
    let crop = chains()[1].clone();
    for p in [Point::new(10, 20), Point::new(33, 47), Point::new(59, 59)] {
        let there = crop.map_point(p);
        rp.compare_bool(true, crop.invert().map_point(there) == p);
    }

    // With resizes, points come back within rounding
    for vt in chains() {
        for p in [Point::new(40, 40), Point::new(50, 51), Point::new(62, 38)] {
            let round_trip = vt.invert().map_point(vt.map_point(p));
            let tolerance = (1.0 / vt.scale_factor()).ceil();
            rp.compare_values(p.x as f64, round_trip.x as f64, tolerance);
            rp.compare_values(p.y as f64, round_trip.y as f64, tolerance);
        }
    }

    // Regions scale with resizes and shift with crops
    let r = vt.map_region(&Region::new(40, 40, 20, 20));
    rp.compare_regions(Some(&Region::new(10, 10, 10, 10)), Some(&r));
    let r = vt.invert().map_region(&Region::sized(4, 6));
    rp.compare_regions(Some(&Region::sized(8, 12)), Some(&r));

    assert!(rp.cleanup(), "viewtransform_mapping regression test failed");
}

#[test]
fn viewtransform_build_reg() {
    let mut rp = RegParams::new("viewtransform_build");
    let src = ViewTransform::new(Size::new(100, 80));

    // Clipped submatrix
    let vt = src
        .add_submat(&Region::new(90, -10, 20, 30), false)
        .unwrap()
        .unwrap();
    let expected = TransformOp::Crop {
        x: 90,
        y: 0,
        width: 10,
        height: 20,
        old_width: 100,
        old_height: 80,
    };
    rp.compare_bool(true, vt.ops() == [expected]);

    // Adjusted submatrix keeps its size
    let vt = src
        .add_submat(&Region::new(90, -10, 20, 30), true)
        .unwrap()
        .unwrap();
    let expected = TransformOp::Crop {
        x: 80,
        y: 0,
        width: 20,
        height: 30,
        old_width: 100,
        old_height: 80,
    };
    rp.compare_bool(true, vt.ops() == [expected]);

    // Nothing left, too large, incomplete
    rp.compare_bool(
        true,
        src.add_submat(&Region::new(200, 0, 5, 5), false)
            .unwrap()
            .is_none(),
    );
    rp.compare_bool(
        true,
        matches!(
            src.add_submat(&Region::new(0, 0, 101, 5), true),
            Err(TransformError::SubmatTooLarge { .. })
        ),
    );
    rp.compare_bool(
        true,
        matches!(
            src.add_submat(&Region::point(1, 1), false),
            Err(TransformError::IncompleteRegion(_))
        ),
    );

    // Resizes: truncated factors, zero sizes rejected
    let vt = src.add_resize(ResizeTarget::Factor(0.33)).unwrap();
    rp.compare_bool(true, vt.final_size() == Size::new(33, 26));
    rp.compare_bool(true, src.add_resize(ResizeTarget::Factor(0.001)).is_err());
    rp.compare_bool(
        true,
        src.add_resize(ResizeTarget::Size(Size::new(0, 10))).is_err(),
    );

    // Concatenation checks the joint
    let a = src.add_resize(ResizeTarget::Factor(0.5)).unwrap();
    let b = ViewTransform::new(Size::new(50, 40))
        .add_submat(&Region::new(0, 0, 10, 10), false)
        .unwrap()
        .unwrap();
    let ab = a.concat(&b).unwrap();
    rp.compare_values(2.0, ab.len() as f64, 0.0);
    rp.compare_bool(true, ab.final_size() == Size::new(10, 10));
    rp.compare_bool(true, b.concat(&a).is_err());

    // Validated construction
    rp.compare_bool(
        true,
        ViewTransform::from_ops(Size::new(50, 40), ab.ops().to_vec()).is_err(),
    );
    rp.compare_bool(
        true,
        ViewTransform::from_ops(src.source(), ab.ops().to_vec()).unwrap() == ab,
    );

    assert!(rp.cleanup(), "viewtransform_build regression test failed");
}

#[test]
fn viewtransform_sample_reg() {
    let mut rp = RegParams::new("viewtransform_sample");

    let img = ramp(16, 16).unwrap();
    let vt = ViewTransform::for_raster(&img)
        .add_submat(&Region::new(4, 4, 8, 8), false)
        .unwrap()
        .unwrap()
        .add_resize(ResizeTarget::Factor(0.5))
        .unwrap();
    let out = vt.sample(&img).unwrap();
    rp.compare_bool(true, out.size() == vt.final_size());

    // Nearest sampling of a 2x downsample reads every other source pixel
    // of the crop, starting at its second pixel
    for y in 0..4u32 {
        for x in 0..4u32 {
            let src_x = 4 + 2 * x + 1;
            let src_y = 4 + 2 * y + 1;
            rp.compare_values(
                img.get(src_x, src_y).unwrap() as f64,
                out.get(x, y).unwrap() as f64,
                0.0,
            );
        }
    }

    // An inverted chain describes geometry only
    rp.compare_bool(true, vt.invert().sample(&out).is_err());

    assert!(rp.cleanup(), "viewtransform_sample regression test failed");
}

#[cfg(feature = "serde")]
#[test]
fn viewtransform_serde_reg() {
    let mut rp = RegParams::new("viewtransform_serde");

    let vt = chains()[3].clone();
    let json = serde_json::to_string(&vt).unwrap();
    rp.compare_bool(true, json.contains("\"type\":\"resize\""));
    rp.compare_bool(true, json.contains("\"type\":\"crop\""));
    let back: ViewTransform = serde_json::from_str(&json).unwrap();
    rp.compare_bool(true, back == vt);

    assert!(rp.cleanup(), "viewtransform_serde regression test failed");
}
