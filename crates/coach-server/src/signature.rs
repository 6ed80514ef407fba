//! Slack request signature verification.
//!
//! Slack signs every request with HMAC-SHA256 over `v0:{timestamp}:{body}`
//! keyed by the app's signing secret, and sends `v0={hex}` in
//! `X-Slack-Signature`. Requests with a stale timestamp are rejected to
//! block replays.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;
use crate::state::AppState;

pub const SIGNATURE_HEADER: &str = "x-slack-signature";
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Slash-command payloads are small; anything bigger is not from Slack.
const MAX_BODY_BYTES: usize = 64 * 1024;

type HmacSha256 = Hmac<Sha256>;

/// Check `signature` against the body and timestamp.
///
/// `now` is the current unix time in seconds.
pub fn verify_signature(
    signing_secret: &str,
    timestamp: &str,
    body: &[u8],
    signature: &str,
    max_age_secs: i64,
    now: i64,
) -> bool {
    let Ok(ts) = timestamp.parse::<i64>() else {
        return false;
    };
    if (now - ts).abs() > max_age_secs {
        return false;
    }
    let Some(expected) = signature
        .strip_prefix("v0=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(signing_secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("v0:{timestamp}:").as_bytes());
    mac.update(body);
    // verify_slice compares in constant time.
    mac.verify_slice(&expected).is_ok()
}

/// Compute the `v0={hex}` signature Slack would send for this request.
pub fn compute_signature(signing_secret: &str, timestamp: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("infallible: HMAC accepts keys of any length");
    mac.update(format!("v0:{timestamp}:").as_bytes());
    mac.update(body);
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}

/// Axum middleware that rejects requests without a valid Slack signature.
///
/// The body is buffered to verify it and then handed on unchanged, so the
/// downstream `Form` extractor still works.
pub async fn require_slack_signature(
    State(app): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::bad_request(format!("could not read request body: {e}")))?;

    let timestamp = header_str(&parts.headers, TIMESTAMP_HEADER);
    let signature = header_str(&parts.headers, SIGNATURE_HEADER);
    let now = chrono::Utc::now().timestamp();

    if !verify_signature(
        &app.config.signing_secret,
        timestamp,
        &bytes,
        signature,
        app.config.max_request_age_secs,
        now,
    ) {
        return Err(AppError::unauthorized("invalid request signature"));
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const BODY: &[u8] = b"token=x&user_id=U1&channel_id=C1&text=";

    #[test]
    fn valid_signature() {
        let sig = compute_signature(SECRET, "1700000000", BODY);
        assert!(verify_signature(SECRET, "1700000000", BODY, &sig, 300, 1700000010));
    }

    #[test]
    fn wrong_secret_fails() {
        let sig = compute_signature("other-secret", "1700000000", BODY);
        assert!(!verify_signature(SECRET, "1700000000", BODY, &sig, 300, 1700000000));
    }

    #[test]
    fn tampered_body_fails() {
        let sig = compute_signature(SECRET, "1700000000", BODY);
        let tampered = b"token=x&user_id=U2&channel_id=C1&text=";
        assert!(!verify_signature(SECRET, "1700000000", tampered, &sig, 300, 1700000000));
    }

    #[test]
    fn stale_or_future_timestamp_fails() {
        let sig = compute_signature(SECRET, "1700000000", BODY);
        assert!(!verify_signature(SECRET, "1700000000", BODY, &sig, 300, 1700000301));
        assert!(!verify_signature(SECRET, "1700000000", BODY, &sig, 300, 1699999699));
    }

    #[test]
    fn malformed_headers_fail() {
        let sig = compute_signature(SECRET, "1700000000", BODY);
        assert!(!verify_signature(SECRET, "soon", BODY, &sig, 300, 1700000000));
        assert!(!verify_signature(SECRET, "1700000000", BODY, "", 300, 1700000000));
        assert!(!verify_signature(
            SECRET,
            "1700000000",
            BODY,
            &sig.replace("v0=", "v1="),
            300,
            1700000000
        ));
        assert!(!verify_signature(SECRET, "1700000000", BODY, "v0=zz", 300, 1700000000));
    }

    #[test]
    fn signature_format() {
        let sig = compute_signature(SECRET, "1", b"");
        assert!(sig.starts_with("v0="));
        assert_eq!(sig.len(), 3 + 64);
    }
}
