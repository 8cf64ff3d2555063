//! Patron request lifecycle and the requests on/off switch.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{CreateRequestParam, Request, RequestAction, RequestState, RequestTransition},
};

/// Whether new requests are accepted, and the lock button presses take while
/// they change a request's state. Closed at startup.
#[derive(Clone, Default)]
pub struct RequestGate {
    open: Arc<AtomicBool>,
    transitions: Arc<Mutex<()>>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Flips the gate and returns whether it is now open.
    pub fn toggle(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::SeqCst)
    }
}

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a member may submit a request right now.
    pub fn check_submission(gate: &RequestGate, is_patron: bool) -> Result<(), AppError> {
        if !gate.is_open() {
            return Err(AppError::rejected(
                "Requests disabled",
                "Requests are currently disabled, please come back later.",
            ));
        }

        if !is_patron {
            return Err(AppError::rejected(
                "Not a Patron",
                "You need to be a Patron in order to submit requests.",
            ));
        }

        Ok(())
    }

    /// Stores a request that was posted to the requests channel.
    pub async fn submit(&self, param: CreateRequestParam) -> Result<Request, AppError> {
        RequestRepository::new(self.db).create(param).await
    }

    /// Applies a button press to the request posted as `message_id`.
    ///
    /// Only one request may be Active; accepting while another one is Active is
    /// rejected. Transitions run one at a time under the gate's lock.
    ///
    /// # Returns
    /// - `Ok(Some(RequestTransition))` - The request moved to a new state
    /// - `Ok(None)` - Unknown message, or the action does not apply to the current state
    /// - `Err(AppError::Rejected)` - Another request is already active
    pub async fn apply(
        &self,
        gate: &RequestGate,
        message_id: u64,
        action: RequestAction,
    ) -> Result<Option<RequestTransition>, AppError> {
        let _guard = gate.transitions.lock().await;
        let repo = RequestRepository::new(self.db);

        let Some(request) = repo.find_by_message_id(message_id).await? else {
            return Ok(None);
        };
        let Some(next) = action.apply(request.state) else {
            return Ok(None);
        };

        if next == RequestState::Active {
            if let Some(active) = repo.find_active().await? {
                if active.id != request.id {
                    return Err(AppError::rejected(
                        "Another request is already active",
                        "Finish the active request before accepting a new one.",
                    ));
                }
            }
        }

        let Some(updated) = repo.update_state(request.id, request.state, next).await? else {
            return Ok(None);
        };

        tracing::info!(
            "Request {} moved from {:?} to {:?}",
            updated.id,
            request.state,
            updated.state
        );

        Ok(Some(RequestTransition {
            from: request.state,
            request: updated,
        }))
    }
}
