use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

use super::errors::{CheckoutError, ServiceFailure};
use super::pricing::CheckoutSummary;
use super::validation::{validate, CheckoutForm, ValidationError};
use crate::app_system::ConnectionState;
use crate::clients::OrderClient;
use crate::domain::{OrderId, OrderSubmissionRequest};
use crate::draft::OrderDraftStore;

/// Where the submit button is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    /// Confirmation screen.
    Succeeded(OrderId),
    /// Last failure, as shown to the customer.
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}

/// Marks the state `Pending` for as long as it lives. Dropped without
/// [`PendingGuard::settle`] (the caller abandoned the submit) it goes back to
/// `Idle`.
struct PendingGuard<'a> {
    state: &'a mut SubmissionState,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn begin(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Pending;
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, next: SubmissionState) {
        *self.state = next;
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state = SubmissionState::Idle;
        }
    }
}

/// Turns the draft plus the checkout form into an order.
pub struct CheckoutFlow {
    order_client: OrderClient,
    connection: watch::Receiver<ConnectionState>,
    state: SubmissionState,
}

impl CheckoutFlow {
    pub fn new(order_client: OrderClient, connection: watch::Receiver<ConnectionState>) -> Self {
        Self {
            order_client,
            connection,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Back to `Idle`, e.g. when the customer leaves the confirmation page.
    pub fn reset(&mut self) {
        if !self.state.is_pending() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validates, prices and submits the draft. The service is called at most
    /// once per invocation and only after every local check has passed.
    ///
    /// On success the draft is cleared. On failure it is left exactly as it
    /// was so the customer can retry.
    #[instrument(
        name = "submit_order",
        skip(self, draft, form),
        fields(item_count = draft.len(), city = %form.address.city)
    )]
    pub async fn submit(
        &mut self,
        draft: &mut OrderDraftStore,
        form: &CheckoutForm,
    ) -> Result<OrderId, CheckoutError> {
        if self.state.is_pending() {
            warn!("Submission already in flight");
            return Err(CheckoutError::AlreadyPending);
        }

        let request = match self.prepare(draft, form) {
            Ok(request) => request,
            Err(e) => {
                info!(reason = %e, "Checkout blocked");
                return Err(e);
            }
        };

        let guard = PendingGuard::begin(&mut self.state);
        match self.order_client.submit_order_request(request).await {
            Ok(order_id) => {
                draft.clear_draft();
                guard.settle(SubmissionState::Succeeded(order_id));
                info!(order_id, "Order submitted");
                Ok(order_id)
            }
            Err(e) => {
                let failure = ServiceFailure::classify(&e.to_string());
                error!(error = %e, ?failure, "Order submission failed");
                let error = CheckoutError::Service(failure);
                guard.settle(SubmissionState::Failed(error.user_message()));
                Err(error)
            }
        }
    }

    /// Everything up to the network call: the validation gate, the readiness
    /// check and request assembly.
    fn prepare(
        &self,
        draft: &OrderDraftStore,
        form: &CheckoutForm,
    ) -> Result<OrderSubmissionRequest, CheckoutError> {
        validate(form, draft)?;

        match *self.connection.borrow() {
            ConnectionState::Ready => {}
            ConnectionState::Connecting => return Err(CheckoutError::StillConnecting),
            ConnectionState::Error => return Err(CheckoutError::ConnectionFailed),
        }

        let summary = CheckoutSummary::compute(draft.items(), &form.address.city)
            .ok_or(ValidationError::TotalOutOfRange)?;
        info!(
            subtotal = %summary.subtotal,
            shipping = %summary.shipping,
            total = %summary.total,
            "Order priced"
        );

        let note = form.note.trim();
        Ok(OrderSubmissionRequest {
            items: draft.items().to_vec(),
            customer_name: form.customer_name.trim().to_string(),
            contact_details: form.contact_details.trim().to_string(),
            note: (!note.is_empty()).then(|| note.to_string()),
            delivery_address: form.address.trimmed(),
            payment_method: form.payment_method.cleaned(),
            shipping_fee: summary.shipping,
        })
    }
}
