use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag for one form instance.
///
/// Clones share the flag. Once closed, `if_open` stops running its closure,
/// so a response that arrives after teardown is never written anywhere.
#[derive(Debug, Clone)]
pub struct Session(Arc<AtomicBool>);

impl Session {
    pub fn open() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn close(&self) {
        if self.0.swap(false, Ordering::AcqRel) {
            tracing::debug!("Form session closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn if_open<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_open().then(f)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompletionResponse, FormState};

    #[test]
    fn test_clones_share_state() {
        let session = Session::open();
        let pending = session.clone();
        assert!(pending.is_open());

        session.close();
        assert!(!pending.is_open());
        session.close();
        assert!(!session.is_open());
    }

    #[test]
    fn test_late_result_dropped_after_close() {
        let mut form = FormState::new();
        form.set_prompt("slow question");
        form.begin_submit().unwrap();

        let session = Session::open();
        let pending = session.clone();
        session.close();

        let written = pending.if_open(|| {
            form.finish_submit(Ok(CompletionResponse {
                completion: "late".to_string(),
            }))
        });

        assert_eq!(written, None);
        assert_eq!(form.response, "");
    }

    #[test]
    fn test_result_written_while_open() {
        let mut form = FormState::new();
        form.set_prompt("quick question");
        form.begin_submit().unwrap();

        let session = Session::open();
        session.if_open(|| {
            form.finish_submit(Ok(CompletionResponse {
                completion: "Hello".to_string(),
            }))
        });

        assert_eq!(form.response, "Hello");
        assert!(!form.loading);
    }
}
