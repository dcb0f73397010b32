//! Per-call request options.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;

/// Content type requested when the caller does not override it.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Options recognised by [`Client::call`](crate::Client::call).
///
/// Endpoint wrappers merge their own options (for example the bulk profile
/// endpoint asks for `text/csv` and ignores HTTP 400) into the caller's.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Overrides the `Accept` header. `None` means JSON.
    pub content_type: Option<String>,
    /// Non-2xx statuses returned to the caller as a [`RawResponse`](crate::RawResponse)
    /// instead of an error.
    pub ignored_status_codes: HashSet<StatusCode>,
    /// Deadline for this call, overriding the client-wide timeout.
    pub timeout: Option<Duration>,
    /// Aborts the in-flight call with [`Error::Cancelled`](crate::Error::Cancelled) when fired.
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub fn with_ignored_status_code(mut self, status: StatusCode) -> Self {
        self.ignored_status_codes.insert(status);
        self
    }

    pub fn with_ignored_status_codes(mut self, statuses: &[StatusCode]) -> Self {
        self.ignored_status_codes.extend(statuses.iter().copied());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Returns the content type to request.
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Whether `status` was declared as a non-error by the caller.
    pub fn ignores(&self, status: StatusCode) -> bool {
        self.ignored_status_codes.contains(&status)
    }

    /// Layers `other` on top of `self`: scalar options from `other` win when
    /// set, ignored status codes are unioned.
    pub fn merged_with(&self, other: RequestOptions) -> RequestOptions {
        let mut ignored_status_codes = self.ignored_status_codes.clone();
        ignored_status_codes.extend(other.ignored_status_codes);
        RequestOptions {
            content_type: other.content_type.or_else(|| self.content_type.clone()),
            ignored_status_codes,
            timeout: other.timeout.or(self.timeout),
            cancel: other.cancel.or_else(|| self.cancel.clone()),
        }
    }
}
