//! Region growing regression test
//!
//! Run with:
//! ```
//! cargo test -p lesionseg-region --test seedfill_reg
//! ```

use lesionseg_core::{MASK_BG, MASK_FG, Pix, PixelFormat};
use lesionseg_region::{RegionError, SeedPoint, region_grow, region_grow_with_stats};
use lesionseg_test::{RegParams, synth};

#[test]
fn seedfill_reg() {
    let mut rp = RegParams::new("seedfill");

    // --- Uniform image: the region covers everything ---
    let white = synth::uniform(100, 100, PixelFormat::Gray, 255).expect("white");
    let mask = region_grow(&white, SeedPoint::new(50, 50), 10).expect("grow white");
    rp.check(mask.is_binary_mask(), "region mask is binary");
    rp.compare_values(10000.0, mask.count_foreground() as f64, 0.0);

    // --- Step edge stops growth ---
    let two = synth::two_level(40, 10, 30, 220).expect("two_level");
    let (mask, stats) = region_grow_with_stats(&two, SeedPoint::new(5, 5), 12).expect("grow left");
    rp.compare_values(200.0, mask.count_foreground() as f64, 0.0);
    rp.compare_values(30.0, stats.mean, 1e-9);
    rp.compare_values(MASK_BG as f64, mask.get_pixel(20, 5).unwrap_or(255) as f64, 0.0);

    // --- Running mean drifts along a ramp ---
    // Region 0..=k has mean k/2; the next value k+1 is accepted while
    // k/2 + 1 <= 12, so growth stops after value 23.
    let ramp = synth::horizontal_ramp(256, 1).expect("ramp");
    let (mask, stats) = region_grow_with_stats(&ramp, SeedPoint::new(0, 0), 12).expect("grow ramp");
    eprintln!("ramp region: {} pixels, mean {}", stats.pixel_count, stats.mean);
    rp.compare_values(24.0, stats.pixel_count as f64, 0.0);
    rp.compare_values(11.5, stats.mean, 1e-9);
    rp.compare_values(MASK_FG as f64, mask.get_pixel(23, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(MASK_BG as f64, mask.get_pixel(24, 0).unwrap_or(255) as f64, 0.0);

    // --- Dark disk seeded at its center ---
    let disk = synth::dark_disk(64, 64, 32.0, 32.0, 10.0, 50, 200).expect("disk");
    let mask = region_grow(&disk, SeedPoint::new(32, 32), 12).expect("grow disk");
    let area = synth::disk_area(64, 64, 32.0, 32.0, 10.0);
    rp.compare_values(area as f64, mask.count_foreground() as f64, 0.0);

    assert!(rp.cleanup(), "seedfill regression test failed");
}

#[test]
fn test_seed_out_of_bounds() {
    let pix = Pix::new(10, 10, PixelFormat::Gray).unwrap();
    let err = region_grow(&pix, SeedPoint::new(10, 0), 5).unwrap_err();
    assert!(matches!(err, RegionError::InvalidSeed { x: 10, y: 0 }));
    assert!(region_grow(&pix, SeedPoint::new(0, 10), 5).is_err());
}

#[test]
fn test_zero_tolerance_keeps_equal_values() {
    let two = synth::two_level(10, 4, 7, 8).unwrap();
    let mask = region_grow(&two, SeedPoint::new(9, 3), 0).unwrap();
    assert_eq!(mask.count_foreground(), 20);
}

#[test]
fn test_seed_row_col_order() {
    let seed = SeedPoint::from_row_col(3, 7);
    assert_eq!(seed, SeedPoint::new(7, 3));
    assert!(seed.check_in_bounds(8, 4).is_ok());
    assert!(seed.check_in_bounds(7, 4).is_err());
}

#[test]
fn test_region_grow_rejects_rgb() {
    let rgb = Pix::new(4, 4, PixelFormat::Rgb).unwrap();
    assert!(matches!(
        region_grow(&rgb, SeedPoint::new(0, 0), 5),
        Err(RegionError::Core(_))
    ));
}
