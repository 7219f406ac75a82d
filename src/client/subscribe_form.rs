use tokio::sync::watch;

use crate::client::{PortalClient, SubmissionOutcome};

/// Where a subscription submission currently stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Done(SubmissionOutcome),
}

/// Subscription form state: `Idle -> Submitting -> Done(outcome)`.
///
/// Every transition is published on a watch channel, so a view can render
/// `Submitting` while the request is still in flight.
#[derive(Debug)]
pub struct SubscribeForm {
    state: watch::Sender<SubmissionState>,
}

impl Default for SubscribeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscribeForm {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self { state }
    }

    /// Receiver that sees every later state change
    pub fn watch(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// `true` while a request is in flight, the form should not accept another
    pub fn is_submitting(&self) -> bool {
        *self.state.borrow() == SubmissionState::Submitting
    }

    /// Message to show the user for the last finished submission
    pub fn message(&self) -> Option<String> {
        match &*self.state.borrow() {
            SubmissionState::Done(SubmissionOutcome::Subscribed(_)) => {
                Some("Subscribed! You will be notified about new disclosures.".into())
            }
            SubmissionState::Done(SubmissionOutcome::AlreadySubscribed(message))
            | SubmissionState::Done(SubmissionOutcome::Failed(message)) => Some(message.clone()),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// Send one subscription request, replacing any previous outcome
    pub async fn submit(&self, client: &PortalClient, email: &str) -> SubmissionState {
        self.state.send_replace(SubmissionState::Submitting);

        let outcome = client.subscribe(email).await;
        tracing::debug!(?outcome, "Subscription submitted");

        self.state.send_replace(SubmissionState::Done(outcome));
        self.state()
    }

    /// Return to `Idle`, clearing the last outcome
    pub fn reset(&self) {
        self.state.send_replace(SubmissionState::Idle);
    }
}
