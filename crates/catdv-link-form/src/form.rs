//! The connection form and its event pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use catdv_link_core::{AddressField, ConnectConfig, SetupError, check_syntax, gate, messages};
use catdv_link_host::{Dispatcher, HostSignal, PanelBridge};
use catdv_link_verify::{ServerProbe, VerifyClient, VerifyError};
use tracing::debug;

/// What a submission attempt ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both gates passed and the URL was handed to the panel host.
    Dispatched { url: String },
    /// Submission was blocked; the field's validity message says why.
    Refused(SetupError),
    /// A newer triggering event took over while this one was verifying.
    Superseded,
}

enum Checked {
    Clean { text: String },
    Refused(SetupError),
    Superseded,
}

/// The connection form: one URL field, one submit action.
///
/// Event entry points mirror the panel's wiring: [`input`](Self::input) on
/// every keystroke, [`blur`](Self::blur) on focus loss, and
/// [`submit`](Self::submit) on the form's submission attempt. The field
/// lives behind a mutex so a multi-threaded host can share the form; locks
/// are never held across an await.
///
/// Each triggering event takes a fresh sequence number, and a verification
/// result is applied only while its number is still the latest, so a stale
/// round trip can never overwrite newer state.
pub struct ConnectForm {
    field: Mutex<AddressField>,
    sequence: AtomicU64,
    probe: Arc<dyn ServerProbe>,
    dispatcher: Dispatcher,
}

impl ConnectForm {
    pub fn new(probe: Arc<dyn ServerProbe>, dispatcher: Dispatcher) -> Self {
        Self {
            field: Mutex::new(AddressField::new()),
            sequence: AtomicU64::new(0),
            probe,
            dispatcher,
        }
    }

    /// Build a form wired to the real validation service.
    pub fn from_config(
        config: &ConnectConfig,
        bridge: Arc<dyn PanelBridge>,
        signal: HostSignal,
    ) -> Result<Self, VerifyError> {
        let probe = Arc::new(VerifyClient::new(config)?);
        let dispatcher = Dispatcher::new(
            bridge,
            signal,
            Duration::from_secs(config.host_wait_secs),
        );
        Ok(Self::new(probe, dispatcher))
    }

    /// Await the host's one-time readiness signal, bounded by the
    /// dispatcher's deadline. The terminal failure maps to the same
    /// "please wait" notice a premature submission gets.
    pub async fn wait_host_ready(&self) -> Result<(), SetupError> {
        self.dispatcher.wait_ready().await.map_err(SetupError::from)
    }

    fn field(&self) -> MutexGuard<'_, AddressField> {
        self.field.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn text(&self) -> String {
        self.field().text().to_string()
    }

    /// The field's current validity message. Empty means submittable.
    pub fn custom_validity(&self) -> String {
        self.field().custom_validity().to_string()
    }

    pub fn is_valid(&self) -> bool {
        self.field().is_valid()
    }

    /// Keystroke handler: store the text and rerun the syntactic gate so
    /// stale errors clear as the user types.
    pub fn input(&self, text: &str) {
        // An edit supersedes any verification still in flight.
        self.next_sequence();
        let mut field = self.field();
        field.set_text(text);
        let verdict = check_syntax(field.text());
        field.apply(&verdict);
    }

    /// Focus-loss handler: run both gates for early feedback. Never
    /// dispatches.
    pub async fn blur(&self) {
        let sequence = self.next_sequence();
        let _ = self.run_checks(sequence).await;
    }

    /// Submission attempt: gate, verify, then hand off.
    ///
    /// The gate always completes before the verifier starts, and a gate
    /// failure short-circuits the network call entirely.
    pub async fn submit(&self) -> SubmitOutcome {
        let sequence = self.next_sequence();
        match self.run_checks(sequence).await {
            Checked::Refused(err) => SubmitOutcome::Refused(err),
            Checked::Superseded => SubmitOutcome::Superseded,
            Checked::Clean { text } => match self.dispatcher.dispatch(&text).await {
                Ok(()) => SubmitOutcome::Dispatched { url: text },
                Err(err) => {
                    let setup = SetupError::from(err);
                    self.field().set_custom_validity(setup.user_message());
                    SubmitOutcome::Refused(setup)
                }
            },
        }
    }

    async fn run_checks(&self, sequence: u64) -> Checked {
        let (text, candidate) = {
            let mut field = self.field();
            match gate::parse_candidate(field.text()) {
                Ok(candidate) => {
                    let text = field.text().to_string();
                    field.set_custom_validity(messages::CHECKING);
                    (text, candidate)
                }
                Err(reason) => {
                    field.set_custom_validity(reason);
                    return Checked::Refused(SetupError::SyntaxInvalid(reason));
                }
            }
        };

        let result = self.probe.probe(&candidate).await;

        if self.sequence.load(Ordering::SeqCst) != sequence {
            debug!(url = %candidate, "discarding stale verification result");
            return Checked::Superseded;
        }

        match result {
            Ok(()) => {
                self.field().clear_custom_validity();
                Checked::Clean { text }
            }
            Err(err) => {
                let setup = SetupError::from(err);
                self.field().set_custom_validity(setup.user_message());
                Checked::Refused(setup)
            }
        }
    }
}
