//! Developer-facing failure channel.
//!
//! Failures reported here never reach the user and never touch state.

/// A failure worth telling a developer about.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The initial cause fetch failed
    CausesUnavailable { reason: String },
    /// A donation was applied locally but could not be logged
    DonationLogFailed {
        cause_title: String,
        amount: f64,
        reason: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::CausesUnavailable { reason } => {
                write!(f, "Error fetching causes: {reason}")
            }
            Diagnostic::DonationLogFailed {
                cause_title,
                amount,
                reason,
            } => write!(
                f,
                "Error logging donation of {amount} to \"{cause_title}\": {reason}"
            ),
        }
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that emits diagnostics as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::CausesUnavailable { reason } => {
                tracing::error!(%reason, "error fetching causes");
            }
            Diagnostic::DonationLogFailed {
                cause_title,
                amount,
                reason,
            } => {
                tracing::warn!(%cause_title, amount, %reason, "error logging donation");
            }
        }
    }
}
