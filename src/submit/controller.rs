//! Submission controller
//!
//! Owns the single in-flight prediction request and the outcome it
//! produces.

use crate::error::{Error, FALLBACK_MESSAGE, Result};
use crate::form::FormModel;
use crate::service::PredictionService;
use crate::submit::OutcomeListener;
use crate::types::OutcomeState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Drives prediction requests and records their outcome
///
/// At most one request is in flight at a time; a second [`submit`] made
/// while one is pending is rejected with [`Error::SubmissionInFlight`].
///
/// [`submit`]: SubmissionController::submit
pub struct SubmissionController {
    service: Arc<dyn PredictionService>,
    state: Mutex<OutcomeState>,
    in_flight: AtomicBool,
}

/// Ends a submission, however it ends
///
/// A submission dropped mid-request (timeout, `select!`, aborted task) is
/// settled as `Failed` before the in-flight flag is cleared, so `Loading`
/// never outlives its request.
struct InFlightGuard<'a> {
    state: &'a Mutex<OutcomeState>,
    in_flight: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.is_loading() {
                warn!("prediction abandoned before the service answered");
                *state = OutcomeState::Failed(FALLBACK_MESSAGE.to_string());
            }
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

impl SubmissionController {
    /// Create an idle controller backed by `service`
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self {
            service,
            state: Mutex::new(OutcomeState::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current outcome
    pub fn state(&self) -> OutcomeState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a request is currently pending
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The service requests are sent to
    pub fn service(&self) -> &dyn PredictionService {
        self.service.as_ref()
    }

    /// Submit the form and wait for the outcome
    ///
    /// The form is expected to be complete; it is sent as-is either way.
    /// Moves to `Loading` (dropping any previous result or error), sends
    /// exactly one request and settles on `Succeeded` or `Failed`. The
    /// settled state replaces `Loading` in a single step. If the returned
    /// future is dropped before the service answers, the outcome settles
    /// on `Failed` with the fallback message and no listener is notified.
    ///
    /// Returns the settled state. The only error is
    /// [`Error::SubmissionInFlight`], in which case nothing is changed.
    pub async fn submit(
        &self,
        form: &FormModel,
        listener: &dyn OutcomeListener,
    ) -> Result<OutcomeState> {
        let _guard = self.claim()?;

        self.transition(OutcomeState::Loading, listener).await;

        let payload = form.payload();
        debug!(
            biomass = %payload.biomass,
            endpoint = %self.service.endpoint(),
            "submitting prediction"
        );

        let outcome = match self.service.predict(&payload).await {
            Ok(value) => {
                info!(%value, "prediction succeeded");
                OutcomeState::Succeeded(value)
            }
            Err(e) => {
                warn!(error = %e, "prediction failed");
                OutcomeState::Failed(e.display_message())
            }
        };

        self.transition(outcome.clone(), listener).await;
        Ok(outcome)
    }

    fn claim(&self) -> Result<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::SubmissionInFlight)?;
        Ok(InFlightGuard {
            state: &self.state,
            in_flight: &self.in_flight,
        })
    }

    async fn transition(&self, state: OutcomeState, listener: &dyn OutcomeListener) {
        {
            let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            *current = state.clone();
        }
        listener.on_transition(&state).await;
    }
}
