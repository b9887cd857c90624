//! External detector interface
//!
//! A learned object detector lives outside this crate. This module defines
//! the shape of its output and a lazily loaded, shared handle so callers
//! can plug one in alongside the classical methods.

use lesionseg_core::Pix;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

/// Errors reported by a detector
#[derive(Debug, Error)]
pub enum DetectError {
    /// The detector could not be constructed
    #[error("detector load failed: {0}")]
    Load(String),

    /// Inference on an input failed
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Result type for detector operations
pub type DetectResult<T> = Result<T, DetectError>;

/// Axis-aligned box in pixel coordinates.
///
/// Serialized as `[x_min, y_min, x_max, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BoundingBox {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> f32 {
        (self.x_max - self.x_min).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y_max - self.y_min).max(0.0)
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x_min, b.y_min, b.x_max, b.y_max]
    }
}

/// One detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_id: u32,
    pub class_name: String,
    pub confidence: f32,
    #[serde(rename = "bbox_xyxy")]
    pub bbox: BoundingBox,
}

/// Detector output for one image
#[derive(Debug, Clone)]
pub struct DetectionOutput {
    /// RGB rendering of the input with detections drawn on it
    pub overlay: Pix,
    pub detections: Vec<Detection>,
}

/// A detector that can run inference on an image file
pub trait Detector: Send + Sync {
    fn infer(&self, path: &Path) -> DetectResult<DetectionOutput>;
}

type Loader<D> = Box<dyn Fn() -> DetectResult<D> + Send + Sync>;

/// Lazily constructed detector shared by all callers.
///
/// The loader runs at most once successfully; a failed load is reported to
/// the caller and retried on the next request.
pub struct SharedDetector<D> {
    detector: OnceLock<D>,
    init: Mutex<()>,
    loader: Loader<D>,
}

impl<D: Detector> SharedDetector<D> {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> DetectResult<D> + Send + Sync + 'static,
    {
        Self {
            detector: OnceLock::new(),
            init: Mutex::new(()),
            loader: Box::new(loader),
        }
    }

    /// True once the detector has been constructed.
    pub fn is_loaded(&self) -> bool {
        self.detector.get().is_some()
    }

    /// Get the detector, constructing it on first use.
    pub fn get(&self) -> DetectResult<&D> {
        if let Some(d) = self.detector.get() {
            return Ok(d);
        }
        let _guard = self
            .init
            .lock()
            .map_err(|_| DetectError::Load("detector initialization lock poisoned".to_string()))?;
        if let Some(d) = self.detector.get() {
            return Ok(d);
        }
        let d = (self.loader)()?;
        log::debug!("detector loaded");
        Ok(self.detector.get_or_init(|| d))
    }

    /// Run inference with the shared detector.
    pub fn infer(&self, path: &Path) -> DetectResult<DetectionOutput> {
        self.get()?.infer(path)
    }
}
