//! Configuration errors reported before any rendering starts.

use thiserror::Error;

/// Errors raised when building a scene, camera, frame or render config.
///
/// None of these are retried; the caller has to fix its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Invalid frame size {width}x{height}: both dimensions must be positive")]
    InvalidFrameSize { width: usize, height: usize },

    #[error("Sample count must be positive")]
    ZeroSamples,

    #[error("Bounce limit must be positive")]
    ZeroBounces,

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Sphere center must be finite")]
    InvalidCenter,

    #[error("Reflectance must be non-negative and finite, got {0}")]
    InvalidReflectance(f64),

    #[error("Light brightness must be non-negative and finite, got {0}")]
    InvalidBrightness(f64),

    #[error("Camera position must be finite")]
    InvalidCameraPosition,

    #[error("Camera direction must be a non-zero finite vector")]
    DegenerateCameraDirection,

    #[error("Field of view must be finite, got {0} degrees")]
    InvalidFieldOfView(f64),
}
