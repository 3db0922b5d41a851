//! Face annotations

use crate::geometry::{BoundingPoly, Position};
use crate::likelihood::Likelihood;
use serde::{Deserialize, Serialize};

/// A detected face
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaceAnnotation {
    /// Face region including headwear
    pub bounding_poly: Option<BoundingPoly>,
    /// Tighter region covering skin only
    pub fd_bounding_poly: Option<BoundingPoly>,
    /// Detected facial landmarks
    pub landmarks: Vec<FaceLandmark>,
    /// Clockwise rotation around the camera axis, degrees
    pub roll_angle: Option<f64>,
    /// Left-to-right rotation, degrees
    pub pan_angle: Option<f64>,
    /// Up-and-down rotation, degrees
    pub tilt_angle: Option<f64>,
    /// Detection confidence
    pub detection_confidence: Option<f64>,
    /// Landmarking confidence
    pub landmarking_confidence: Option<f64>,
    /// Joy likelihood
    pub joy_likelihood: Option<Likelihood>,
    /// Sorrow likelihood
    pub sorrow_likelihood: Option<Likelihood>,
    /// Anger likelihood
    pub anger_likelihood: Option<Likelihood>,
    /// Surprise likelihood
    pub surprise_likelihood: Option<Likelihood>,
    /// Under-exposure likelihood
    pub under_exposed_likelihood: Option<Likelihood>,
    /// Blur likelihood
    pub blurred_likelihood: Option<Likelihood>,
    /// Headwear likelihood
    pub headwear_likelihood: Option<Likelihood>,
}

/// A single facial landmark
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaceLandmark {
    /// Landmark kind, e.g. `CHIN_GNATHION`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Landmark position
    pub position: Option<Position>,
}
