use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{error, warn};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Checks `signature` against the base64 HMAC-SHA256 of the raw body.
///
/// The body must be the exact bytes received; any re-serialization breaks
/// the digest. The comparison runs in constant time.
pub fn verify_line_signature(request_body: &[u8], signature: &str, channel_secret: &str) -> bool {
    if signature.is_empty() {
        warn!("Missing {} header", SIGNATURE_HEADER);
        return false;
    }

    let Ok(declared) = BASE64.decode(signature) else {
        warn!(
            signature_length = signature.len(),
            "Signature header is not valid base64"
        );
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return false;
        }
    };
    mac.update(request_body);

    if mac.verify_slice(&declared).is_ok() {
        true
    } else {
        warn!(
            body_length = request_body.len(),
            "Signature verification failed"
        );
        false
    }
}

pub fn compute_signature(request_body: &[u8], channel_secret: &str) -> String {
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(request_body);
    BASE64.encode(mac.finalize().into_bytes())
}
