//! Positioning capability seam.
//!
//! Platform sensors live behind [`PositionSource`]; hosts with a real
//! location service implement it over their geolocation plugin, while
//! [`FixedPosition`] serves hosts without one.

use crate::types::{Coordinates, PositionError};

/// Outcome of a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Requested accuracy for a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Low,
    Balanced,
    High,
    Highest,
}

/// Capability-gated access to the host's positioning service.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    /// Ask the host for foreground location access.
    async fn request_permission(&self) -> PermissionStatus;

    /// Request a single fix at the given accuracy.
    async fn current_fix(&self, accuracy: Accuracy) -> Result<Coordinates, PositionError>;
}

/// Request permission and a single highest-accuracy fix from the source.
///
/// One attempt per call; failures are returned to the caller, never retried.
pub async fn acquire<S: PositionSource>(source: &S) -> Result<Coordinates, PositionError> {
    if source.request_permission().await == PermissionStatus::Denied {
        tracing::warn!("location permission denied");
        return Err(PositionError::PermissionDenied);
    }

    let fix = source.current_fix(Accuracy::Highest).await?;
    tracing::info!("got fix: {}, {}", fix.latitude, fix.longitude);
    Ok(fix)
}

/// Position source that always reports a pre-configured fix.
#[derive(Debug, Clone)]
pub struct FixedPosition {
    coordinates: Coordinates,
}

impl FixedPosition {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

impl PositionSource for FixedPosition {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_fix(&self, _accuracy: Accuracy) -> Result<Coordinates, PositionError> {
        Ok(self.coordinates)
    }
}
