use std::sync::{Mutex, MutexGuard};

use promptdeck_core::{FormState, Preset, SubmitBlocked};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::backend::CompletionBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed(String),
    /// Carries the `Error: ...` text written to the form.
    Failed(String),
    Blocked(SubmitBlocked),
    /// The session closed before the response arrived; nothing was written.
    Discarded,
}

impl SubmitOutcome {
    pub fn response(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Completed(text) | SubmitOutcome::Failed(text) => Some(text),
            _ => None,
        }
    }
}

/// Cloneable handle that ends a controller's session from elsewhere.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    token: CancellationToken,
}

impl SessionHandle {
    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Owns one prompt form and performs its completion round trips.
///
/// Field operations never touch the network. `submit` is the only async
/// operation and holds no lock while it waits on the backend, so snapshots
/// taken mid-flight show `loading == true`.
pub struct PromptController<B> {
    backend: B,
    form: Mutex<FormState>,
    session: CancellationToken,
    session_id: Uuid,
}

impl<B: CompletionBackend> PromptController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_form(backend, FormState::new())
    }

    /// Starts the session from an already filled-in form.
    pub fn with_form(backend: B, form: FormState) -> Self {
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, "Prompt session opened");
        Self {
            backend,
            form: Mutex::new(form),
            session: CancellationToken::new(),
            session_id,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn session(&self) -> SessionHandle {
        SessionHandle {
            token: self.session.clone(),
        }
    }

    pub fn close(&self) {
        if !self.session.is_cancelled() {
            debug!(session = %self.session_id, "Prompt session closed");
        }
        self.session.cancel();
    }

    fn form(&self) -> MutexGuard<'_, FormState> {
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> FormState {
        self.form().clone()
    }

    pub fn select_preset(&self, preset: &Preset) {
        self.form().select_preset(preset);
    }

    pub fn hover_preset(&self, text: Option<&str>) {
        self.form().hover_preset(text);
    }

    pub fn set_prompt(&self, text: impl Into<String>) {
        self.form().set_prompt(text);
    }

    pub fn set_temperature(&self, value: f64) {
        self.form().set_temperature(value);
    }

    pub fn set_max_tokens(&self, value: i64) {
        self.form().set_max_tokens(value);
    }

    pub fn set_top_p(&self, value: f64) {
        self.form().set_top_p(value);
    }

    pub fn can_submit(&self) -> bool {
        !self.session.is_cancelled() && self.form().can_submit()
    }

    #[instrument(skip(self), fields(session = %self.session_id))]
    pub async fn submit(&self) -> SubmitOutcome {
        if self.session.is_cancelled() {
            return SubmitOutcome::Discarded;
        }

        let begun = self.form().begin_submit();
        let request = match begun {
            Ok(request) => request,
            Err(blocked) => {
                debug!("Submit blocked: {}", blocked);
                return SubmitOutcome::Blocked(blocked);
            }
        };

        info!(
            label = %request.label,
            temperature = request.temperature,
            max_new_tokens = request.max_new_tokens,
            top_p = request.top_p,
            "Submitting completion request"
        );

        let result = tokio::select! {
            biased;
            _ = self.session.cancelled() => {
                info!("Session closed while waiting, discarding result");
                return SubmitOutcome::Discarded;
            }
            result = self.backend.complete(&request) => result,
        };

        let mut form = self.form();
        if self.session.is_cancelled() {
            return SubmitOutcome::Discarded;
        }

        let outcome = match &result {
            Ok(resp) => {
                info!(chars = resp.completion.len(), "Completion received");
                SubmitOutcome::Completed(resp.completion.clone())
            }
            Err(e) => {
                info!("Completion failed: {}", e);
                SubmitOutcome::Failed(e.display_text())
            }
        };
        form.finish_submit(result);
        outcome
    }
}

impl<B> Drop for PromptController<B> {
    fn drop(&mut self) {
        self.session.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use promptdeck_core::preset::find;
    use promptdeck_core::{CompletionError, CompletionRequest, CompletionResponse};
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct MockBackend {
        reply: Result<CompletionResponse, CompletionError>,
        seen: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl MockBackend {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(CompletionResponse {
                    completion: text.to_string(),
                }),
                seen: Arc::default(),
            }
        }

        fn err(e: CompletionError) -> Self {
            Self {
                reply: Err(e),
                seen: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, CompletionError> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    /// Holds the request open until the test releases it.
    struct GatedBackend {
        started: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl CompletionBackend for GatedBackend {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, CompletionError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(CompletionResponse {
                completion: "late".to_string(),
            })
        }
    }

    fn gated() -> (GatedBackend, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let backend = GatedBackend {
            started: started.clone(),
            release: release.clone(),
        };
        (backend, started, release)
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let backend = MockBackend::ok("Hello");
        let seen = backend.seen.clone();
        let controller = PromptController::new(backend);
        controller.select_preset(find("Factual").unwrap());

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Completed("Hello".to_string()));
        let form = controller.snapshot();
        assert!(!form.loading);
        assert_eq!(form.response, "Hello");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].label, "Factual");
        assert_eq!(seen[0].max_new_tokens, 140);
    }

    #[tokio::test]
    async fn test_transport_error() {
        let controller =
            PromptController::new(MockBackend::err(CompletionError::Transport("Network Error".into())));
        controller.set_prompt("Hi there");

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed("Error: Network Error".to_string()));
        let form = controller.snapshot();
        assert!(!form.loading);
        assert_eq!(form.response, "Error: Network Error");
    }

    #[tokio::test]
    async fn test_empty_form_never_calls_backend() {
        let backend = MockBackend::ok("unused");
        let seen = backend.seen.clone();
        let controller = PromptController::new(backend);
        controller.set_prompt("   ");

        assert!(!controller.can_submit());
        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::EmptyPrompt));
        assert!(seen.lock().unwrap().is_empty());
        assert!(!controller.snapshot().loading);
    }

    #[tokio::test]
    async fn test_second_submit_replaces_response() {
        let controller = PromptController::new(MockBackend::ok("second"));
        controller.set_prompt("again");
        controller.submit().await;
        controller.set_prompt("and again");
        controller.submit().await;
        assert_eq!(controller.snapshot().response, "second");
    }

    #[tokio::test]
    async fn test_blocked_while_loading() {
        let (backend, started, release) = gated();
        let controller = Arc::new(PromptController::new(backend));
        controller.select_preset(find("Creative").unwrap());

        let c = controller.clone();
        let pending = tokio::spawn(async move { c.submit().await });
        started.notified().await;

        assert!(controller.snapshot().loading);
        assert!(!controller.can_submit());
        assert_eq!(
            controller.submit().await,
            SubmitOutcome::Blocked(SubmitBlocked::Loading)
        );

        release.notify_one();
        let outcome = pending.await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Completed("late".to_string()));
        assert!(!controller.snapshot().loading);
    }

    #[tokio::test]
    async fn test_closed_session_discards_result() {
        let (backend, started, release) = gated();
        let controller = Arc::new(PromptController::new(backend));
        controller.set_prompt("slow question");
        let session = controller.session();

        let c = controller.clone();
        let pending = tokio::spawn(async move { c.submit().await });
        started.notified().await;

        session.close();
        release.notify_one();

        assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
        assert_eq!(controller.snapshot().response, "");
        assert!(session.is_closed());
        assert_eq!(controller.submit().await, SubmitOutcome::Discarded);
    }

    #[tokio::test]
    async fn test_with_form_submits_prefilled_fields() {
        let backend = MockBackend::ok("ok");
        let seen = backend.seen.clone();
        let mut form = FormState::new();
        form.select_preset(find("Factual").unwrap());
        form.set_top_p(0.2);

        let controller = PromptController::with_form(backend, form);
        controller.submit().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].label, "Factual");
        assert_eq!(seen[0].top_p, 0.2);
        assert_eq!(seen[0].max_new_tokens, 140);
    }

    #[tokio::test]
    async fn test_hover_does_not_touch_fields() {
        let controller = PromptController::new(MockBackend::ok(""));
        let technical = find("Technical").unwrap();

        controller.hover_preset(Some(technical.prompt));
        let form = controller.snapshot();
        assert_eq!(form.hovered_preset.as_deref(), Some(technical.prompt));
        assert_eq!(form.label, "");
        assert_eq!(form.prompt, "");

        controller.hover_preset(None);
        assert_eq!(controller.snapshot(), FormState::new());
    }
}
