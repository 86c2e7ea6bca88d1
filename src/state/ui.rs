#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A transient notification shown by `ToastHost`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts. Failures surface here (or in the console),
/// never as a crashed page.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Oldest toasts are dropped beyond this many.
    const MAX_VISIBLE: usize = 4;

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(Toast {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
        });
        if self.toasts.len() > Self::MAX_VISIBLE {
            let overflow = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
