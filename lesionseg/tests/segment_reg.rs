//! Segmentation orchestrator regression test
//!
//! Runs all six methods on synthetic images and checks the parameter
//! bundle's validation and wire shape.
//!
//! Run with:
//! ```
//! cargo test -p lesionseg --test segment_reg
//! ```

use lesionseg::color::ColorError;
use lesionseg::region::RegionError;
use lesionseg::{
    MASK_FG, PixelFormat, SeedPoint, SegmentError, SegmentationMethod, SegmentationParams,
    segment_all_methods,
};
use lesionseg_test::{RegParams, synth};

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    // --- 100x100 all-white image ---
    let white = synth::uniform(100, 100, PixelFormat::Rgb, 255).expect("white");
    let params = SegmentationParams::new(SeedPoint::new(50, 50)).with_region_diff_threshold(10);
    let results = segment_all_methods(&white, &params).expect("segment white");

    rp.compare_values(6.0, results.len() as f64, 0.0);
    let names: Vec<_> = results.iter().map(|(m, _)| m.as_str()).collect();
    rp.check(
        names
            == [
                "manual_inv",
                "otsu_inv",
                "adapt_mean",
                "adapt_gauss",
                "region_growing",
                "watershed",
            ],
        "methods in canonical order",
    );
    for (method, mask) in results.iter() {
        rp.check(
            mask.width() == 100 && mask.height() == 100 && mask.is_binary_mask(),
            method.as_str(),
        );
    }

    let count = |m: SegmentationMethod| {
        results
            .get(m)
            .map(|p| p.count_foreground() as f64)
            .unwrap_or(-1.0)
    };
    rp.compare_values(10000.0, count(SegmentationMethod::RegionGrowing), 0.0);
    rp.compare_values(0.0, count(SegmentationMethod::ManualInv), 0.0);
    rp.compare_values(0.0, count(SegmentationMethod::OtsuInv), 0.0);
    rp.compare_values(0.0, count(SegmentationMethod::Watershed), 0.0);
    // Flat image: every pixel exceeds its local mean minus C
    rp.compare_values(10000.0, count(SegmentationMethod::AdaptMean), 0.0);
    rp.compare_values(10000.0, count(SegmentationMethod::AdaptGauss), 0.0);

    // --- Dark disk on bright tissue ---
    let gray = synth::dark_disk(80, 80, 40.0, 40.0, 14.0, 40, 210).expect("disk");
    let disk = synth::gray_to_rgb(&gray).expect("disk rgb");
    let area = synth::disk_area(80, 80, 40.0, 40.0, 14.0) as f64;
    let params = SegmentationParams::new(SeedPoint::new(40, 40));
    let results = segment_all_methods(&disk, &params).expect("segment disk");

    let manual = results.get(SegmentationMethod::ManualInv).expect("manual");
    let otsu = results.get(SegmentationMethod::OtsuInv).expect("otsu");
    let grown = results.get(SegmentationMethod::RegionGrowing).expect("grown");
    let lesion = results.get(SegmentationMethod::Watershed).expect("lesion");
    rp.compare_values(area, manual.count_foreground() as f64, 0.0);
    rp.compare_pix(manual, otsu);
    rp.compare_pix(manual, grown);
    rp.compare_values(MASK_FG as f64, lesion.get_pixel(40, 40).unwrap_or(0) as f64, 0.0);
    let lesion_count = lesion.count_foreground() as f64;
    rp.check(
        lesion_count <= area && lesion_count >= 0.7 * area,
        "watershed lesion covers the disk",
    );

    // --- Gray input gives the same masks as its RGB replica ---
    let from_gray = segment_all_methods(&gray, &params).expect("segment gray");
    for (method, mask) in from_gray.iter() {
        if let Some(other) = results.get(method) {
            rp.compare_pix(mask, other);
        }
    }

    assert!(rp.cleanup(), "segment regression test failed");
}

#[test]
fn test_invalid_seed_aborts() {
    let pix = synth::uniform(20, 10, PixelFormat::Gray, 100).unwrap();
    let params = SegmentationParams::new(SeedPoint::new(20, 0));
    let err = segment_all_methods(&pix, &params).unwrap_err();
    assert!(matches!(
        err,
        SegmentError::Region(RegionError::InvalidSeed { x: 20, y: 0 })
    ));
}

#[test]
fn test_invalid_block_size_aborts() {
    let pix = synth::uniform(20, 10, PixelFormat::Gray, 100).unwrap();
    for block in [0, 1, 2, 34] {
        let params = SegmentationParams::new(SeedPoint::new(0, 0)).with_adaptive_block_size(block);
        let err = segment_all_methods(&pix, &params).unwrap_err();
        assert!(
            matches!(err, SegmentError::Color(ColorError::InvalidParameters(_))),
            "block size {} accepted",
            block
        );
    }
}

#[test]
fn test_block_size_larger_than_image() {
    let white = synth::uniform(10, 10, PixelFormat::Rgb, 255).unwrap();
    let params = SegmentationParams::new(SeedPoint::new(5, 5)).with_adaptive_block_size(3001);
    let results = segment_all_methods(&white, &params).unwrap();
    for method in [SegmentationMethod::AdaptMean, SegmentationMethod::AdaptGauss] {
        let mask = results.get(method).unwrap();
        assert_eq!(mask.count_foreground(), 100, "{}", method);
    }
}

#[test]
fn test_params_wire_shape() {
    let params: SegmentationParams =
        serde_json::from_str(r#"{"regionSeed": {"x": 3, "y": 4}}"#).unwrap();
    assert_eq!(params, SegmentationParams::new(SeedPoint::new(3, 4)));
    assert_eq!(params.manual_threshold, 120);
    assert_eq!(params.adaptive_block_size, 35);
    assert_eq!(params.adaptive_c, 5);
    assert_eq!(params.region_diff_threshold, 12);
    assert_eq!(params.watershed_foreground_fraction, 0.5);

    let json = serde_json::to_value(
        SegmentationParams::new(SeedPoint::new(7, 9))
            .with_manual_threshold(90)
            .with_adaptive_c(-3),
    )
    .unwrap();
    assert_eq!(json["manualThreshold"], 90);
    assert_eq!(json["adaptiveBlockSize"], 35);
    assert_eq!(json["adaptiveC"], -3);
    assert_eq!(json["regionSeed"]["x"], 7);
    assert_eq!(json["regionSeed"]["y"], 9);
    assert_eq!(json["regionDiffThreshold"], 12);
    assert_eq!(json["watershedForegroundFraction"], 0.5);

    assert!(serde_json::from_str::<SegmentationParams>(r#"{"manualThreshold": 100}"#).is_err());
}

#[test]
fn test_method_names() {
    for method in SegmentationMethod::ALL {
        assert_eq!(method.as_str().parse::<SegmentationMethod>().unwrap(), method);
        assert_eq!(method.file_name(), format!("{}.png", method));
    }
    assert_eq!(SegmentationMethod::Watershed.file_name(), "watershed.png");
    assert!(matches!(
        "canny".parse::<SegmentationMethod>(),
        Err(SegmentError::UnknownMethod(_))
    ));
    assert_eq!(
        serde_json::to_string(&SegmentationMethod::AdaptGauss).unwrap(),
        r#""adapt_gauss""#
    );
}

#[test]
fn test_parallel_calls_agree() {
    let pix = synth::wavy(64, 48).unwrap();
    let params = SegmentationParams::new(SeedPoint::new(10, 10)).with_adaptive_block_size(11);
    let reference = segment_all_methods(&pix, &params).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| segment_all_methods(&pix, &params).unwrap()))
            .collect();
        for handle in handles {
            let results = handle.join().unwrap();
            for (method, mask) in results.iter() {
                assert_eq!(mask.data(), reference.get(method).unwrap().data());
            }
        }
    });
}
