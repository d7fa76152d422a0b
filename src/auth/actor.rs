//! # Session Actor
//!
//! Holds who is signed in. It stands in for the authentication service: the ordering
//! workflow only ever asks it "current user id, or none", and the menu asks it to sign out.

use crate::auth::error::AuthError;
use crate::model::UserId;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the session actor.
pub type SessionResponse<T> = oneshot::Sender<Result<T, AuthError>>;

/// Requests understood by the [`SessionActor`].
#[derive(Debug)]
pub enum SessionRequest {
    CurrentUser {
        respond_to: SessionResponse<Option<UserId>>,
    },
    SignIn {
        user: UserId,
        respond_to: SessionResponse<()>,
    },
    SignOut {
        respond_to: SessionResponse<UserId>,
    },
}

/// The actor owning the current session.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    current: Option<UserId>,
}

impl SessionActor {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Sender<SessionRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            current: None,
        };
        (actor, sender)
    }

    /// Starts the actor with `user` already signed in.
    pub fn signed_in(mut self, user: UserId) -> Self {
        self.current = Some(user);
        self
    }

    pub async fn run(mut self) {
        info!(signed_in = self.current.is_some(), "Session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::CurrentUser { respond_to } => {
                    debug!(user = ?self.current, "CurrentUser");
                    let _ = respond_to.send(Ok(self.current.clone()));
                }
                SessionRequest::SignIn { user, respond_to } => {
                    if user.0.trim().is_empty() {
                        warn!("Sign-in rejected: empty user id");
                        let _ = respond_to.send(Err(AuthError::InvalidUser(user.0)));
                        continue;
                    }
                    info!(%user, "Signed in");
                    self.current = Some(user);
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::SignOut { respond_to } => match self.current.take() {
                    Some(user) => {
                        info!(%user, "Signed out");
                        let _ = respond_to.send(Ok(user));
                    }
                    None => {
                        warn!("Sign-out without a session");
                        let _ = respond_to.send(Err(AuthError::NotSignedIn));
                    }
                },
            }
        }

        info!("Shutdown");
    }
}
