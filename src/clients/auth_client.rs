//! # Auth Client
//!
//! High-level API for the session actor.

use crate::auth::{AuthError, SessionRequest};
use crate::model::UserId;
use crate::navigation::NavigationIntent;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};

/// Client for interacting with the session actor.
#[derive(Clone, Debug)]
pub struct AuthClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl AuthClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, AuthError>>) -> SessionRequest,
    ) -> Result<T, AuthError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| AuthError::ActorCommunicationError("session closed".to_string()))?;
        response.await.map_err(|_| {
            AuthError::ActorCommunicationError("session dropped response channel".to_string())
        })?
    }

    /// The signed-in user's id, or `None`.
    #[instrument(skip(self))]
    pub async fn current_user_id(&self) -> Result<Option<UserId>, AuthError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::CurrentUser { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn sign_in(&self, user: UserId) -> Result<(), AuthError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SignIn { user, respond_to })
            .await
    }

    /// Ends the session and returns the intent the navigation layer should apply.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<NavigationIntent, AuthError> {
        debug!("Sending request");
        match self
            .request(|respond_to| SessionRequest::SignOut { respond_to })
            .await
        {
            Ok(_) => Ok(NavigationIntent::LoggedOut),
            Err(e) => {
                warn!(error = %e, "Sign-out failed");
                Err(e)
            }
        }
    }
}
