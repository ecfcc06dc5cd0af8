use std::fmt;
use std::time::Duration;

use crate::Effect;

pub type DismissToken = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// Identifies the auto-dismiss timer scheduled for this notification.
    pub token: DismissToken,
}

/// Single-slot notification holder.
///
/// Showing a message replaces the current one and restarts the auto-dismiss
/// timer. Timers are identified by token; an expiry only clears the slot when
/// its token still matches the visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenter {
    current: Option<Notification>,
    last_token: DismissToken,
    auto_dismiss: Duration,
}

impl NotificationCenter {
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            current: None,
            last_token: 0,
            auto_dismiss,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = self.current.take() {
            effects.push(Effect::CancelDismiss {
                token: previous.token,
            });
        }
        self.last_token += 1;
        let token = self.last_token;
        self.current = Some(Notification {
            message: message.into(),
            severity,
            token,
        });
        effects.push(Effect::ScheduleDismiss {
            token,
            after: self.auto_dismiss,
        });
        effects
    }

    /// Manual dismissal. Idempotent when nothing is shown.
    pub fn dismiss(&mut self) -> Vec<Effect> {
        match self.current.take() {
            Some(previous) => vec![Effect::CancelDismiss {
                token: previous.token,
            }],
            None => Vec::new(),
        }
    }

    /// Timer expiry. Returns whether the visible notification was cleared.
    pub fn expire(&mut self, token: DismissToken) -> bool {
        match &self.current {
            Some(current) if current.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_AUTO_DISMISS)
    }
}
