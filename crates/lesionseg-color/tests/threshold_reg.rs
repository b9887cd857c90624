//! Thresholding regression test
//!
//! Fixed, Otsu and adaptive thresholds on synthetic images whose
//! expected masks can be worked out by hand.
//!
//! Run with:
//! ```
//! cargo test -p lesionseg-color --test threshold_reg
//! ```

use lesionseg_color::{
    AdaptiveMethod, AdaptiveThresholdOptions, ColorError, adaptive_threshold,
    adaptive_threshold_gaussian, adaptive_threshold_mean, compute_otsu_threshold,
    threshold_manual_inv, threshold_otsu_inv,
};
use lesionseg_core::{MASK_BG, MASK_FG, Pix, PixelFormat};
use lesionseg_test::{RegParams, synth};

#[test]
fn threshold_reg() {
    let mut rp = RegParams::new("threshold");

    // --- Manual inverted threshold: v <= t is foreground ---
    let ramp = synth::horizontal_ramp(256, 4).expect("ramp");
    let manual = threshold_manual_inv(&ramp, 120).expect("manual");
    rp.check(manual.is_binary_mask(), "manual mask is binary");
    rp.compare_values((121 * 4) as f64, manual.count_foreground() as f64, 0.0);
    rp.compare_values(MASK_FG as f64, manual.get_pixel(120, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(MASK_BG as f64, manual.get_pixel(121, 0).unwrap_or(255) as f64, 0.0);

    // --- Otsu on a bimodal image splits at the lower level ---
    let two = synth::two_level(40, 10, 30, 220).expect("two_level");
    let otsu = threshold_otsu_inv(&two).expect("otsu");
    rp.compare_values(30.0, otsu.threshold as f64, 0.0);
    rp.check(!otsu.degenerate, "bimodal image is not degenerate");
    rp.compare_values(200.0, otsu.mask.count_foreground() as f64, 0.0);
    rp.compare_values(MASK_FG as f64, otsu.mask.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);

    // --- Otsu separates a dark disk from bright tissue ---
    let disk = synth::dark_disk(64, 64, 32.0, 32.0, 12.0, 40, 210).expect("disk");
    let otsu = threshold_otsu_inv(&disk).expect("otsu disk");
    let area = synth::disk_area(64, 64, 32.0, 32.0, 12.0);
    rp.compare_values(area as f64, otsu.mask.count_foreground() as f64, 0.0);

    // --- Adaptive thresholds around a vertical step edge ---
    // Only the dark column touching the edge sees a local mean above v + c.
    let mean = adaptive_threshold_mean(&two, 3, 5).expect("adaptive mean");
    rp.compare_values(390.0, mean.count_foreground() as f64, 0.0);
    rp.compare_values(MASK_BG as f64, mean.get_pixel(19, 5).unwrap_or(255) as f64, 0.0);
    rp.compare_values(MASK_FG as f64, mean.get_pixel(20, 5).unwrap_or(0) as f64, 0.0);

    let gauss = adaptive_threshold_gaussian(&two, 3, 5).expect("adaptive gaussian");
    rp.compare_pix(&mean, &gauss);

    // --- Flat regions are foreground for any positive offset ---
    let flat = synth::uniform(30, 30, PixelFormat::Gray, 128).expect("flat");
    let flat_mask = adaptive_threshold_mean(&flat, 35, 5).expect("flat mean");
    rp.compare_values(900.0, flat_mask.count_foreground() as f64, 0.0);

    assert!(rp.cleanup(), "threshold regression test failed");
}

#[test]
fn test_otsu_degenerate_histogram() {
    let white = synth::uniform(100, 100, PixelFormat::Gray, 255).unwrap();
    assert_eq!(compute_otsu_threshold(&white).unwrap(), None);

    let otsu = threshold_otsu_inv(&white).unwrap();
    assert!(otsu.degenerate);
    assert_eq!(otsu.threshold, 0);
    assert!(otsu.mask.is_all_background());
    assert_eq!(otsu.mask.width(), 100);
}

#[test]
fn test_uniform_white_manual_is_empty() {
    let white = synth::uniform(100, 100, PixelFormat::Gray, 255).unwrap();
    let mask = threshold_manual_inv(&white, 120).unwrap();
    assert!(mask.is_all_background());
}

#[test]
fn test_adaptive_rejects_bad_block_size() {
    let flat = synth::uniform(10, 10, PixelFormat::Gray, 50).unwrap();
    for block in [0, 1, 2, 4, 34] {
        let result = adaptive_threshold_mean(&flat, block, 5);
        assert!(
            matches!(result, Err(ColorError::InvalidParameters(_))),
            "block size {} accepted",
            block
        );
    }
    assert!(adaptive_threshold_gaussian(&flat, 3, 5).is_ok());
}

#[test]
fn test_adaptive_options_builder() {
    let opts = AdaptiveThresholdOptions::default();
    assert_eq!(opts.block_size, 35);
    assert_eq!(opts.c, 5);
    assert_eq!(opts.method, AdaptiveMethod::Mean);

    let opts = AdaptiveThresholdOptions::new(AdaptiveMethod::Gaussian)
        .with_block_size(11)
        .with_c(-2);
    assert_eq!(opts.block_size, 11);
    assert_eq!(opts.c, -2);

    // With a negative offset, flat pixels are no longer above local - c
    let flat = synth::uniform(12, 12, PixelFormat::Gray, 90).unwrap();
    let mask = adaptive_threshold(&flat, &opts).unwrap();
    assert!(mask.is_all_background());
}

#[test]
fn test_threshold_rejects_rgb() {
    let rgb = Pix::new(4, 4, PixelFormat::Rgb).unwrap();
    assert!(threshold_otsu_inv(&rgb).is_err());
    assert!(threshold_manual_inv(&rgb, 10).is_err());
    assert!(adaptive_threshold_mean(&rgb, 3, 5).is_err());
}

#[test]
fn test_adaptive_block_larger_than_image() {
    let white = synth::uniform(10, 10, PixelFormat::Gray, 255).unwrap();
    let mean = adaptive_threshold_mean(&white, 3001, 5).unwrap();
    assert_eq!(mean.count_foreground(), 100);
    let gauss = adaptive_threshold_gaussian(&white, 3001, 5).unwrap();
    assert_eq!(gauss.count_foreground(), 100);
}

#[test]
fn test_adaptive_extreme_offsets() {
    let white = synth::uniform(10, 10, PixelFormat::Gray, 255).unwrap();
    // 255 > 255 - i32::MIN never holds
    let mask = adaptive_threshold_mean(&white, 3, i32::MIN).unwrap();
    assert!(mask.is_all_background());
    let mask = adaptive_threshold_gaussian(&white, 3, i32::MIN).unwrap();
    assert!(mask.is_all_background());
    // 255 > 255 - i32::MAX always holds
    let mask = adaptive_threshold_mean(&white, 3, i32::MAX).unwrap();
    assert_eq!(mask.count_foreground(), 100);
    let mask = adaptive_threshold_gaussian(&white, 3, i32::MAX).unwrap();
    assert_eq!(mask.count_foreground(), 100);
}

#[test]
fn test_adaptive_gaussian_differs_from_mean() {
    // Single bright sample on black, block 5. The local mean is 10 over the
    // whole 5x5 window; the Gaussian statistic peaks at 35 and falls to
    // 7, 4, 1 on the window's outer ring.
    let mut data = vec![0u8; 81];
    data[4 * 9 + 4] = 255;
    let spike = Pix::from_raw(9, 9, 1, data).unwrap();

    // Black pixels are foreground only where the local statistic is below 10
    let mean = adaptive_threshold_mean(&spike, 5, 10).unwrap();
    let gauss = adaptive_threshold_gaussian(&spike, 5, 10).unwrap();

    // Mean: the 24 black pixels of the window drop out
    assert_eq!(mean.count_foreground(), 81 - 24);
    // Gaussian: only the 8 neighbours of the spike drop out
    assert_eq!(gauss.count_foreground(), 81 - 8);

    assert_eq!(mean.get_pixel(4, 4), Some(MASK_FG));
    assert_eq!(gauss.get_pixel(4, 4), Some(MASK_FG));
    assert_eq!(mean.get_pixel(6, 4), Some(MASK_BG));
    assert_eq!(gauss.get_pixel(6, 4), Some(MASK_FG));
    assert_eq!(mean.get_pixel(5, 5), Some(MASK_BG));
    assert_eq!(gauss.get_pixel(5, 5), Some(MASK_BG));
}
