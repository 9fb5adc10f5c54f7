use mandate_core::{Capability, MandateError};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with `crate::core::with_request_deadline`.
/// On timeout, the inner helper returns `MandateError::RequestTimeout("request")` which
/// call sites can remap to a more specific capability label as needed.
///
/// # Errors
/// Returns `RequestTimeout` when the deadline elapses before every task completes.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, MandateError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}

/// Collapse a set of provider errors into a uniform `MandateError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - A single remaining error is returned as-is.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    mut errors: Vec<MandateError>,
    not_found_what: Option<String>,
) -> MandateError {
    if !attempted_any {
        return MandateError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, MandateError::ProviderTimeout { .. }))
    {
        return MandateError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, MandateError::NotFound { .. }))
    {
        return MandateError::not_found(what);
    }
    if errors.len() == 1
        && let Some(only) = errors.pop()
    {
        return only;
    }
    MandateError::AllProvidersFailed(errors)
}
