//! Validator address derivation: `address = SHA-256(raw_public_key)[0..20]`.

use sha2::{
    Digest,
    Sha256,
};

pub const ADDRESS_LENGTH: usize = 20;

/// Derives a validator address from a raw Ed25519 public key.
#[must_use]
pub fn derive_address(public_key_raw: &[u8; 32]) -> [u8; ADDRESS_LENGTH] {
    let digest = Sha256::digest(public_key_raw);
    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&digest[..ADDRESS_LENGTH]);
    address
}

/// Renders an address as uppercase hex, the canonical form used for map keys
/// and diagnostics throughout this crate.
#[must_use]
pub fn to_hex(address: &[u8; ADDRESS_LENGTH]) -> String {
    hex::encode_upper(address)
}

/// Decodes a hex string into an address, requiring exactly
/// `2 * ADDRESS_LENGTH` hex characters.
pub fn from_hex(s: &str) -> Result<[u8; ADDRESS_LENGTH], FromHexError> {
    if s.len() != 2 * ADDRESS_LENGTH {
        return Err(FromHexError(s.len()));
    }
    let bytes = hex::decode(s).map_err(|_| FromHexError(s.len()))?;
    let mut out = [0u8; ADDRESS_LENGTH];
    out.copy_from_slice(&bytes);
    Ok(out)
}

#[derive(Debug, thiserror::Error)]
#[error("expected an address of {} hex characters, got {0}", 2 * ADDRESS_LENGTH)]
pub struct FromHexError(usize);

#[cfg(test)]
mod tests {
    use base64::{
        engine::general_purpose::STANDARD,
        Engine as _,
    };

    use super::*;

    #[test]
    fn derives_address_from_known_key() {
        let key = STANDARD
            .decode("tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw=")
            .unwrap();
        let key: [u8; 32] = key.try_into().unwrap();
        let address = derive_address(&key);
        assert_eq!(to_hex(&address), "D223B03AE01B4A0296053E01A41AE1E2F9CDEBC9");
    }

    #[test]
    fn round_trips_hex() {
        let address = [0xABu8; ADDRESS_LENGTH];
        let hex_str = to_hex(&address);
        assert_eq!(from_hex(&hex_str).unwrap(), address);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(from_hex("ABCD").is_err());
    }
}
