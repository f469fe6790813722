//! Inspection client

use katharos_core::inspect::{InspectionFailure, InspectionPolicy, InspectionResult, Inspector};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::camera::{FrameSource, TcpCamera};
use crate::config::InspectionConfig;
use crate::error::InspectError;
use crate::payload::{parse_verdict, InferenceRequest};

/// Captures a frame and asks the vision service for a residue verdict
pub struct InspectionClient<F> {
    http: Client,
    config: InspectionConfig,
    camera: F,
}

impl InspectionClient<TcpCamera> {
    /// Client reading from the configured TCP camera
    pub fn from_config(config: InspectionConfig) -> Result<Self, InspectError> {
        let camera = TcpCamera::new(config.camera_addr.clone(), config.camera_timeout);
        Self::new(config, camera)
    }
}

impl<F: FrameSource> InspectionClient<F> {
    pub fn new(config: InspectionConfig, camera: F) -> Result<Self, InspectError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            config,
            camera,
        })
    }

    pub fn camera(&self) -> &F {
        &self.camera
    }

    /// One capture and one request; every failure is reported
    pub fn try_inspect(&mut self) -> Result<InspectionResult, InspectError> {
        let frame = self.camera.grab_latest_frame(self.config.discard_frames)?;
        let request = InferenceRequest::new(&self.config.api_key, &frame);

        let response = self.http.post(&self.config.endpoint).json(&request).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(InspectError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        let result = parse_verdict(&body)?;
        log::info!(
            "Inspection verdict: {}",
            if result.is_dirty { "residue" } else { "clean" }
        );
        Ok(result)
    }

    /// Verdict with every failure counted as clean
    pub fn inspect(&mut self) -> InspectionResult {
        InspectionPolicy::FailOpen.resolve(Inspector::try_inspect(self))
    }
}

impl<F: FrameSource> Inspector for InspectionClient<F> {
    fn try_inspect(&mut self) -> Result<InspectionResult, InspectionFailure> {
        InspectionClient::try_inspect(self).map_err(|err| {
            log::warn!("Inspection failed: {}", err);
            err.failure()
        })
    }
}
