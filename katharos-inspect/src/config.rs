//! Inspection settings

use std::time::Duration;

/// Vision workflow the fixture was trained against
pub const DEFAULT_ENDPOINT: &str = "https://detect.roboflow.com/infer/workflows/disc-golf-7sak2/find-dirts";

/// Local camera streamer
pub const DEFAULT_CAMERA_ADDR: &str = "127.0.0.1:8888";

/// Where and how to inspect
#[derive(Debug, Clone)]
pub struct InspectionConfig {
    /// Inference workflow URL
    pub endpoint: String,
    /// Credential sent in the request body
    pub api_key: String,
    /// Camera stream address (`host:port`)
    pub camera_addr: String,
    /// Buffered frames dropped before the one that is sent
    pub discard_frames: usize,
    /// Whole-request budget for the inference call
    pub request_timeout: Duration,
    /// Connect/read budget for the camera stream
    pub camera_timeout: Duration,
}

impl InspectionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            camera_addr: DEFAULT_CAMERA_ADDR.to_string(),
            discard_frames: 10,
            request_timeout: Duration::from_secs(8),
            camera_timeout: Duration::from_secs(2),
        }
    }
}
