use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::shared::core::errors::ApplicationError;

type HmacSha256 = Hmac<Sha256>;

const SALT_BYTES: usize = 16;

/// HMAC-SHA256 of a PIN keyed by a random salt, stored as "<salt hex>$<mac hex>".
pub fn hash_pin(pin: &str) -> Result<String, ApplicationError> {
    let salt: [u8; SALT_BYTES] = rand::random();
    let mac = keyed(&salt, pin)
        .ok_or_else(|| ApplicationError::Internal("pin hashing failed".into()))?;
    Ok(format!(
        "{}${}",
        hex::encode(salt),
        hex::encode(mac.finalize().into_bytes())
    ))
}

pub fn verify_pin(pin: &str, stored: &str) -> bool {
    let Some((salt_hex, expected_hex)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(expected_hex)) else {
        return false;
    };
    keyed(&salt, pin).is_some_and(|mac| mac.verify_slice(&expected).is_ok())
}

/// PINs are 4 to 12 ASCII digits.
pub fn is_valid_pin(pin: &str) -> bool {
    (4..=12).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit())
}

fn keyed(salt: &[u8], pin: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(salt).ok()?;
    mac.update(pin.as_bytes());
    Some(mac)
}
