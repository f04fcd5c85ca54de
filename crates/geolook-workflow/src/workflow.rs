//! Owner of the three-stage lookup state.
//!
//! Statuses and results live behind a single mutex. The lock is only held
//! for state transitions, never across the permission prompt, the sensor
//! fix or a network call, so the address and weather stages can be in
//! flight at the same time while each stage stays at most once in flight.

use parking_lot::Mutex;

use geolook_services::geocode::GeocodeClient;
use geolook_services::position::{self, PositionSource};
use geolook_services::types::{
    AddressResult, Coordinates, LookupError, PositionError, WeatherResult,
};
use geolook_services::weather::WeatherClient;

use crate::notify::{LogNotifier, Notice, Notifier};
use crate::status::StageStatus;

/// Read-only view of the workflow state.
#[derive(Debug, Clone, Default)]
pub struct WorkflowSnapshot {
    pub position: StageStatus,
    pub coordinates: Option<Coordinates>,
    pub address: StageStatus,
    pub address_result: Option<AddressResult>,
    pub weather: StageStatus,
    pub weather_result: Option<WeatherResult>,
}

#[derive(Debug, Default)]
struct WorkflowState {
    position: StageStatus,
    coordinates: Option<Coordinates>,
    address: StageStatus,
    address_result: Option<AddressResult>,
    weather: StageStatus,
    weather_result: Option<WeatherResult>,
}

/// The location-dependent lookup workflow.
///
/// Trigger methods return `None` when the trigger is ignored because the
/// stage is already in flight, otherwise `Some` with the stage outcome.
pub struct LocationWorkflow {
    state: Mutex<WorkflowState>,
    notifier: Box<dyn Notifier>,
}

impl LocationWorkflow {
    pub fn new() -> Self {
        Self::with_notifier(Box::new(LogNotifier))
    }

    pub fn with_notifier(notifier: Box<dyn Notifier>) -> Self {
        Self {
            state: Mutex::new(WorkflowState::default()),
            notifier,
        }
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        let s = self.state.lock();
        WorkflowSnapshot {
            position: s.position,
            coordinates: s.coordinates,
            address: s.address,
            address_result: s.address_result.clone(),
            weather: s.weather,
            weather_result: s.weather_result.clone(),
        }
    }

    /// Acquire a fresh position fix.
    ///
    /// Beginning a run invalidates both lookup results and returns their
    /// stages to Idle; prior coordinates survive until replaced by a new
    /// successful fix.
    pub async fn acquire_position<S: PositionSource>(
        &self,
        source: &S,
    ) -> Option<Result<Coordinates, PositionError>> {
        {
            let mut s = self.state.lock();
            if !s.position.can_start() {
                tracing::debug!("position trigger ignored: acquisition already in flight");
                return None;
            }
            s.position = StageStatus::InProgress;
            s.address = StageStatus::Idle;
            s.address_result = None;
            s.weather = StageStatus::Idle;
            s.weather_result = None;
        }

        let result = position::acquire(source).await;

        {
            let mut s = self.state.lock();
            s.position = s.position.on_done(result.is_ok());
            if let Ok(coords) = &result {
                s.coordinates = Some(*coords);
            }
        }

        match &result {
            Ok(coords) => self.notifier.notify(&Notice::success(
                "Position",
                format!("Coordinates acquired: {}, {}", coords.latitude, coords.longitude),
            )),
            Err(e) => self
                .notifier
                .notify(&Notice::failure("Position", e.user_message())),
        }

        Some(result)
    }

    /// Resolve the captured coordinates to a postal address.
    pub async fn resolve_address(
        &self,
        geocoder: &GeocodeClient,
    ) -> Option<Result<AddressResult, LookupError>> {
        let coords = match self.begin_lookup(Stage::Address) {
            Trigger::Ignored => return None,
            Trigger::Missing => return Some(Err(self.fail_missing(Stage::Address))),
            Trigger::Run(coords) => coords,
        };

        let result = geocoder.resolve(coords).await;

        {
            let mut s = self.state.lock();
            s.address = s.address.on_done(result.is_ok());
            if let Ok(address) = &result {
                s.address_result = Some(address.clone());
            }
        }

        match &result {
            Ok(address) => self
                .notifier
                .notify(&Notice::success("Address found", address.formatted.clone())),
            Err(e) => self
                .notifier
                .notify(&Notice::failure("Address", e.user_message())),
        }

        Some(result)
    }

    /// Fetch current weather for the captured coordinates.
    pub async fn resolve_weather(
        &self,
        client: &WeatherClient,
    ) -> Option<Result<WeatherResult, LookupError>> {
        let coords = match self.begin_lookup(Stage::Weather) {
            Trigger::Ignored => return None,
            Trigger::Missing => return Some(Err(self.fail_missing(Stage::Weather))),
            Trigger::Run(coords) => coords,
        };

        let result = client.resolve(coords).await;

        {
            let mut s = self.state.lock();
            s.weather = s.weather.on_done(result.is_ok());
            if let Ok(weather) = &result {
                s.weather_result = Some(weather.clone());
            }
        }

        match &result {
            Ok(weather) => self.notifier.notify(&Notice::success(
                "Weather",
                format!("Current weather for {}", weather.city_name),
            )),
            Err(e) => self
                .notifier
                .notify(&Notice::failure("Weather", e.user_message())),
        }

        Some(result)
    }

    fn begin_lookup(&self, stage: Stage) -> Trigger {
        let mut s = self.state.lock();
        let status = match stage {
            Stage::Address => s.address,
            Stage::Weather => s.weather,
        };

        if !status.can_start() {
            tracing::debug!("{} trigger ignored: lookup already in flight", stage.name());
            return Trigger::Ignored;
        }

        let Some(coords) = s.coordinates else {
            return Trigger::Missing;
        };

        match stage {
            Stage::Address => {
                s.address = StageStatus::InProgress;
                s.address_result = None;
            }
            Stage::Weather => {
                s.weather = StageStatus::InProgress;
                s.weather_result = None;
            }
        }

        Trigger::Run(coords)
    }

    fn fail_missing(&self, stage: Stage) -> LookupError {
        {
            let mut s = self.state.lock();
            match stage {
                Stage::Address => s.address = StageStatus::Failed,
                Stage::Weather => s.weather = StageStatus::Failed,
            }
        }

        let err = LookupError::MissingCoordinates;
        self.notifier
            .notify(&Notice::failure(stage.title(), err.user_message()));
        err
    }
}

impl Default for LocationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Address,
    Weather,
}

impl Stage {
    fn name(self) -> &'static str {
        match self {
            Stage::Address => "address",
            Stage::Weather => "weather",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Stage::Address => "Address",
            Stage::Weather => "Weather",
        }
    }
}

enum Trigger {
    /// Stage already in flight; the trigger is dropped.
    Ignored,
    /// No coordinates captured yet.
    Missing,
    /// Lookup may proceed with the captured coordinates.
    Run(Coordinates),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_workflow_is_fully_idle() {
        let workflow = LocationWorkflow::new();
        let snap = workflow.snapshot();

        assert_eq!(snap.position, StageStatus::Idle);
        assert_eq!(snap.address, StageStatus::Idle);
        assert_eq!(snap.weather, StageStatus::Idle);
        assert!(snap.coordinates.is_none());
        assert!(snap.address_result.is_none());
        assert!(snap.weather_result.is_none());
    }
}
