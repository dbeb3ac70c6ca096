pub(crate) mod geometry;

/// Decode a hex string as produced by `SELECT ST_AsEWKB(...)` into bytes.
pub(crate) fn hex_to_vec(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

pub(crate) fn vec_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}
