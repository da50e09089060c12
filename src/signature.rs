//! Razorpay checkout signature: lowercase hex of
//! HMAC-SHA256(key_secret, "{order_id}|{payment_id}").

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_HEX_LEN: usize = 64;

fn mac_for(secret: &str, order_id: &str, payment_id: &str) -> Result<HmacSha256, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    Ok(mac)
}

pub fn payment_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
) -> Result<String, InvalidLength> {
    let mac = mac_for(secret, order_id, payment_id)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time check of `signature` against the expected value. Only the
/// exact lowercase hex rendering is accepted.
pub fn verify_payment_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
    signature: &str,
) -> Result<bool, InvalidLength> {
    let mac = mac_for(secret, order_id, payment_id)?;

    let well_formed = signature.len() == SIGNATURE_HEX_LEN
        && signature
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !well_formed {
        return Ok(false);
    }

    match hex::decode(signature) {
        Ok(raw) => Ok(mac.verify_slice(&raw).is_ok()),
        Err(_) => Ok(false),
    }
}
