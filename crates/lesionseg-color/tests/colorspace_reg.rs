//! Color space conversion regression test
//!
//! Run with:
//! ```
//! cargo test -p lesionseg-color --test colorspace_reg
//! ```

use lesionseg_color::{
    ColorError, pix_convert_to_gray, pix_convert_to_rgb, pix_from_samples_normalized,
};
use lesionseg_core::{Pix, PixelFormat};
use lesionseg_test::{RegParams, synth};

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Gray input passes through unchanged ---
    let wavy = synth::wavy(40, 30).expect("wavy");
    let gray = pix_convert_to_gray(&wavy).expect("gray");
    rp.compare_pix(&wavy, &gray);

    // --- Gray -> RGB -> Gray is lossless for replicated channels ---
    let rgb = pix_convert_to_rgb(&wavy).expect("rgb");
    rp.compare_values(3.0, rgb.channels() as f64, 0.0);
    let back = pix_convert_to_gray(&rgb).expect("back");
    rp.compare_pix(&wavy, &back);

    // --- Colored pixel uses luma weights ---
    let mut pm = Pix::new(2, 1, PixelFormat::Rgb).expect("rgb pix").to_mut();
    pm.set_rgb(0, 0, 200, 100, 50).expect("set");
    pm.set_rgb(1, 0, 0, 0, 255).expect("set");
    let gray = pix_convert_to_gray(&pm.into()).expect("luma");
    // 0.299*200 + 0.587*100 + 0.114*50 = 124.2
    rp.compare_values(124.0, gray.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(29.0, gray.get_pixel(1, 0).unwrap_or(0) as f64, 0.0);

    // --- Sample normalization ---
    let samples = [1000.0, 1500.0, 2000.0, 3000.0];
    let norm = pix_from_samples_normalized(2, 2, &samples).expect("normalize");
    rp.compare_values(0.0, norm.get_pixel(0, 0).unwrap_or(1) as f64, 0.0);
    rp.compare_values(63.0, norm.get_pixel(1, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(127.0, norm.get_pixel(0, 1).unwrap_or(0) as f64, 0.0);
    rp.compare_values(255.0, norm.get_pixel(1, 1).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "colorspace regression test failed");
}

#[test]
fn test_normalize_constant_is_zero() {
    let pix = pix_from_samples_normalized(3, 1, &[7.5; 3]).unwrap();
    assert!(pix.data().iter().all(|&v| v == 0));
}

#[test]
fn test_normalize_rejects_bad_samples() {
    assert!(matches!(
        pix_from_samples_normalized(0, 0, &[]),
        Err(ColorError::EmptyImage)
    ));
    assert!(matches!(
        pix_from_samples_normalized(2, 1, &[0.0, f32::NAN]),
        Err(ColorError::InvalidParameters(_))
    ));
    assert!(matches!(
        pix_from_samples_normalized(2, 2, &[0.0, 1.0, 2.0]),
        Err(ColorError::Core(_))
    ));
}
