//! Transient notices shown inside a form (validation failures, results).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMessage {
    pub kind: NoticeKind,
    pub text: String,
}

/// A single-slot notice that clears itself after a timeout.
///
/// A newer message restarts the countdown; the older timer leaves it alone.
#[derive(Clone, Copy)]
pub struct Notice {
    message: RwSignal<Option<NoticeMessage>>,
    generation: RwSignal<u64>,
    timeout_ms: u32,
}

impl Notice {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
            timeout_ms,
        }
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn clear(&self) {
        self.message.set(None);
    }

    pub fn get(&self) -> Option<NoticeMessage> {
        self.message.get()
    }

    fn show(&self, kind: NoticeKind, text: String) {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.message.set(Some(NoticeMessage { kind, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.timeout_ms).await;
            // The owning form may be gone by now.
            if timer_owns_message(generation, this.generation.try_get_untracked()) {
                let _ = this.message.try_set(None);
            }
        });
    }
}

/// Whether the timer started for message `scheduled` may clear the slot.
/// `latest` is the current generation, `None` once the notice is disposed.
fn timer_owns_message(scheduled: u64, latest: Option<u64>) -> bool {
    latest == Some(scheduled)
}

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    move || {
        notice.get().map(|m| {
            let (class, mark) = match m.kind {
                NoticeKind::Error => ("warning-box warning-box--error", "⚠"),
                NoticeKind::Success => ("warning-box warning-box--success", "✓"),
            };
            view! {
                <div class=class role="alert">
                    <span class="warning-box__icon">{mark}</span>
                    <span class="warning-box__text">{m.text}</span>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_timer_clears() {
        assert!(timer_owns_message(3, Some(3)));
    }

    #[test]
    fn test_older_timer_leaves_newer_message() {
        // first message at 1, second at 2; the first timer fires afterwards
        assert!(!timer_owns_message(1, Some(2)));
        assert!(timer_owns_message(2, Some(2)));
    }

    #[test]
    fn test_disposed_notice_is_left_alone() {
        assert!(!timer_owns_message(1, None));
    }
}
