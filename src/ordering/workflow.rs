//! # Order Submission Workflow
//!
//! Drives one [`OrderForm`] through `Idle -> Submitting -> {Succeeded, Failed}`.
//!
//! [`OrderWorkflow::submit`] is the whole attempt. It is built from two synchronous halves that
//! callers holding the write themselves can use directly:
//!
//! 1. [`OrderWorkflow::begin_submission`] checks the gate, the user and the address, moves the
//!    form to `Submitting` and returns the [`Order`] to write.
//! 2. [`OrderWorkflow::finish_submission`] records the outcome of that write and, on success,
//!    yields the [`NavigationIntent`] for the confirmation screen.
//!
//! While a write is outstanding every further attempt is rejected with
//! [`OrderError::SubmissionInFlight`]; after success every attempt is rejected with
//! [`OrderError::AlreadyPlaced`]. Neither rejection writes or changes the state.

use crate::clients::{AuthClient, OrdersClient};
use crate::model::{Order, OrderStatus, UserId};
use crate::navigation::NavigationIntent;
use crate::ordering::{OrderError, OrderForm, SubmissionState};
use crate::store::DocumentId;
use tracing::{debug, info, instrument, warn};

pub struct OrderWorkflow {
    form: OrderForm,
    orders: OrdersClient,
    auth: AuthClient,
    trim_address: bool,
}

impl OrderWorkflow {
    pub fn new(form: OrderForm, orders: OrdersClient, auth: AuthClient) -> Self {
        Self {
            form,
            orders,
            auth,
            trim_address: false,
        }
    }

    /// When set, the address is trimmed before the emptiness check and written trimmed.
    pub fn with_trim_address(mut self, trim_address: bool) -> Self {
        self.trim_address = trim_address;
        self
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Mutable access for the detail screen's size, quantity and address controls.
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    pub fn state(&self) -> &SubmissionState {
        self.form.state()
    }

    /// Runs one submission attempt: session lookup, validation, one write.
    ///
    /// # Errors
    /// - [`OrderError::AuthRequired`] / [`OrderError::Validation`]: nothing was written.
    /// - [`OrderError::SessionUnavailable`]: the session could not be asked; nothing was written.
    /// - [`OrderError::Write`]: the write failed, the order does not exist; try again.
    /// - [`OrderError::AlreadyPlaced`] / [`OrderError::SubmissionInFlight`]: rejected outright.
    #[instrument(skip(self), fields(item_id = %self.form.item().id))]
    pub async fn submit(&mut self) -> Result<NavigationIntent, OrderError> {
        self.check_gate()?;

        let user = match self.auth.current_user_id().await {
            Ok(user) => user,
            Err(e) => return Err(self.fail(OrderError::SessionUnavailable(e.to_string()))),
        };

        let order = self.begin_submission(user)?;
        let outcome = self.orders.place(&order).await;
        self.finish_submission(outcome)
    }

    /// Validates the form for `user` and moves it to `Submitting`.
    ///
    /// On a validation failure the form is left `Failed` with the error's message.
    pub fn begin_submission(&mut self, user: Option<UserId>) -> Result<Order, OrderError> {
        self.check_gate()?;

        let Some(user_id) = user else {
            return Err(self.fail(OrderError::AuthRequired));
        };

        let address = if self.trim_address {
            self.form.delivery_address().trim().to_string()
        } else {
            self.form.delivery_address().to_string()
        };
        if address.is_empty() {
            return Err(self.fail(OrderError::Validation("missing address".to_string())));
        }

        let item = self.form.item();
        let order = Order {
            user_id,
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            size: self.form.selected_size().to_string(),
            quantity: self.form.quantity(),
            total_price: self.form.total_price(),
            delivery_address: address,
            status: OrderStatus::Pending,
        };

        debug!(?order, "Submitting");
        self.form.state = SubmissionState::Submitting;
        Ok(order)
    }

    /// Records the result of the write started by [`begin_submission`](Self::begin_submission).
    ///
    /// Without a submission in progress the outcome is ignored and the state is left as it is.
    pub fn finish_submission(
        &mut self,
        outcome: Result<DocumentId, OrderError>,
    ) -> Result<NavigationIntent, OrderError> {
        match self.form.state {
            SubmissionState::Submitting => {}
            SubmissionState::Succeeded => return Err(OrderError::AlreadyPlaced),
            SubmissionState::Idle | SubmissionState::Failed(_) => {
                warn!("Outcome reported without a submission in progress");
                return Err(OrderError::NotSubmitting);
            }
        }

        match outcome {
            Ok(order_id) => {
                info!(order_id = %order_id, "Order placed");
                self.form.state = SubmissionState::Succeeded;
                Ok(NavigationIntent::OrderPlaced { order_id })
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn check_gate(&self) -> Result<(), OrderError> {
        match self.form.state {
            SubmissionState::Succeeded => Err(OrderError::AlreadyPlaced),
            SubmissionState::Submitting => Err(OrderError::SubmissionInFlight),
            SubmissionState::Idle | SubmissionState::Failed(_) => Ok(()),
        }
    }

    fn fail(&mut self, error: OrderError) -> OrderError {
        warn!(error = %error, "Submission failed");
        self.form.state = SubmissionState::Failed(error.to_string());
        error
    }
}
