use std::sync::{Arc, Mutex};

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    /// Rejected user action (validation)
    Warning,
    /// Backend failure
    Error,
}

/// Toast-style notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Receives user-facing notifications.
///
/// Implement this trait to surface toasts in a UI. The default
/// implementation drops them.
///
/// # Example
///
/// ```ignore
/// struct Console;
///
/// impl Notifier for Console {
///     fn notify(&self, toast: &Toast) {
///         println!("[{:?}] {}", toast.level, toast.message);
///     }
/// }
/// ```
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast) {
        let _ = toast;
    }
}

/// Writes toasts to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toast) {
        match toast.level {
            ToastLevel::Success => tracing::info!(message = %toast.message, "toast"),
            ToastLevel::Warning => tracing::warn!(message = %toast.message, "toast"),
            ToastLevel::Error => tracing::error!(message = %toast.message, "toast"),
        }
    }
}

/// Keeps every toast, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().ok()?.last().cloned()
    }

    pub fn clear(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast.clone());
        }
    }
}
