//! Audit trail of bank operations.
//!
//! Operations that should leave a trace are wrapped explicitly with [`audited`] at the call site.
use chrono::Utc;
use tracing::info;

/// Runs `operation` and records an audit line for `name` once it has executed, regardless of its
/// outcome. The result of `operation` is returned unchanged.
pub fn audited<T, F>(name: &'static str, operation: F) -> T
where
    F: FnOnce() -> T,
{
    let result = operation();
    info!(operation = name, executed_at = %Utc::now(), "operation executed");
    result
}
