use dioxus::prelude::*;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// At most one toast on screen; a new one replaces the old
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastState {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast { id, kind, message });
        id
    }

    /// Remove toast `id` if it is still the one on screen
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Transient notification surface shared through context
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub state: Signal<ToastState>,
    duration: Duration,
}

impl ToastContext {
    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut state = self.state;
        state.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, message: String) {
        debug!("Showing toast: {}", message);
        let mut state = self.state;
        let id = state.write().show(kind, message);
        let duration = self.duration;

        spawn(async move {
            tokio::time::sleep(duration).await;
            state.write().dismiss(id);
        });
    }
}

/// Provider component to make the toast surface available throughout the app
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let config = crate::config::use_config();
    let state = use_signal(ToastState::default);

    use_context_provider(|| ToastContext {
        state,
        duration: config.toast_duration,
    });

    rsx! {
        {children}
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}
