pub mod http;

use crate::lang::LanguageCode;

pub use http::HttpTranslateService;

/// Outcome of one submission. The service boundary never leaks transport
/// faults as errors; callers always get a typed result so a batch can keep
/// going past a bad job.
#[derive(Debug, Clone)]
pub enum TranslationResult {
    Success { output: Vec<u8> },
    Failure(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Service answered with a non-success HTTP status.
    Status(u16),
    /// Request never completed (unreachable, timeout, malformed response).
    Transport(String),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "service returned status {code}"),
            FailureReason::Transport(reason) => write!(f, "transport error: {reason}"),
        }
    }
}

/// The two remote operations the client performs. Kept as a trait so the
/// orchestrator can be driven by a stub in tests.
pub trait TranslateService {
    /// Upload one PDF and fetch the translated bytes.
    fn submit(&self, pdf: &[u8], file_name: &str, lang: LanguageCode) -> TranslationResult;

    /// Ask the server to drop its temporary rendering state. Best-effort;
    /// implementations log failures and swallow them.
    fn clear_temp(&self);
}
