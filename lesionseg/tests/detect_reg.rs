//! Detector interface test
//!
//! Run with:
//! ```
//! cargo test -p lesionseg --test detect_reg
//! ```

use lesionseg::{
    BoundingBox, DetectError, DetectResult, Detection, DetectionOutput, Detector, Pix,
    PixelFormat, SharedDetector,
};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct FakeDetector;

impl Detector for FakeDetector {
    fn infer(&self, path: &Path) -> DetectResult<DetectionOutput> {
        if path.as_os_str().is_empty() {
            return Err(DetectError::Inference("empty path".to_string()));
        }
        Ok(DetectionOutput {
            overlay: Pix::new(8, 6, PixelFormat::Rgb)
                .map_err(|e| DetectError::Inference(e.to_string()))?,
            detections: vec![Detection {
                class_id: 0,
                class_name: "nodule".to_string(),
                confidence: 0.875,
                bbox: BoundingBox::new(1.0, 2.0, 5.0, 4.0),
            }],
        })
    }
}

#[test]
fn test_shared_detector_loads_once() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&loads);
    let shared = SharedDetector::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(FakeDetector)
    });
    assert!(!shared.is_loaded());

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let out = shared.infer(Path::new("scan.png")).unwrap();
                assert_eq!(out.detections.len(), 1);
                assert_eq!(out.overlay.channels(), 3);
            });
        }
    });

    assert!(shared.is_loaded());
    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(shared.infer(Path::new("")).is_err());
}

#[test]
fn test_failed_load_is_reported() {
    let shared: SharedDetector<FakeDetector> =
        SharedDetector::new(|| Err(DetectError::Load("weights missing".to_string())));
    assert!(matches!(
        shared.infer(Path::new("scan.png")),
        Err(DetectError::Load(_))
    ));
    assert!(!shared.is_loaded());
}

#[test]
fn test_detection_wire_shape() {
    let det = Detection {
        class_id: 2,
        class_name: "mass".to_string(),
        confidence: 0.5,
        bbox: BoundingBox::new(10.0, 20.0, 30.0, 45.0),
    };
    let json = serde_json::to_value(&det).unwrap();
    assert_eq!(json["class_id"], 2);
    assert_eq!(json["class_name"], "mass");
    assert_eq!(json["bbox_xyxy"], serde_json::json!([10.0, 20.0, 30.0, 45.0]));

    let back: Detection = serde_json::from_value(json).unwrap();
    assert_eq!(back, det);
    assert_eq!(back.bbox.width(), 20.0);
    assert_eq!(back.bbox.height(), 25.0);
}
