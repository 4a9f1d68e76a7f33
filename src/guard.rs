//! Navigation guard for the protected dashboard area.
//!
//! The decision itself is a pure function so it can be tested without a
//! router; pages run it inside an `Effect` and navigate on `Redirect`.
//! Root-level and nested transitions go through the same decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Target the caller should navigate to instead.
    Redirect(String),
}

/// Allow the navigation iff the user is authenticated; otherwise redirect to
/// the restricted page, carrying the originally requested path so a later
/// login could return the user there.
pub fn decide(authenticated: bool, requested_path: &str) -> GuardDecision {
    if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(restricted_target(requested_path))
    }
}

/// `/restricted?redirect=<path>`, omitting the parameter for an empty path.
fn restricted_target(requested_path: &str) -> String {
    if requested_path.is_empty() {
        "/restricted".to_owned()
    } else {
        format!("/restricted?redirect={}", encode_query_value(requested_path))
    }
}

/// Percent-encode a query parameter value (RFC 3986 unreserved set kept).
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
