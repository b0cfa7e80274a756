use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine as _,
};

const PERMISSIVE: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

/// Standard alphabet, padding optional.
const STANDARD_PERMISSIVE: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PERMISSIVE);

/// URL-safe alphabet, padding optional.
const URL_SAFE_PERMISSIVE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PERMISSIVE);

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes a Base64 string leniently.
///
/// Whitespace is ignored and padding may be present or absent. The standard
/// alphabet is tried first, then the URL-safe one, since links pulled out of
/// web pages are frequently re-encoded with `-` and `_`.
///
/// # Returns
/// The decoded text (invalid UTF-8 is replaced), or the decode error of the
/// standard alphabet attempt. An empty input is rejected.
pub fn base64_decode_permissive(input: &str) -> Result<String, DecodeError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(DecodeError::InvalidLength(0));
    }

    let decoded = match STANDARD_PERMISSIVE.decode(&cleaned) {
        Ok(bytes) => bytes,
        Err(err) => URL_SAFE_PERMISSIVE.decode(&cleaned).map_err(|_| err)?,
    };

    Ok(String::from_utf8_lossy(&decoded).into_owned())
}
