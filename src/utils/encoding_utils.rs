use std::borrow::Cow;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Percent-decodes one URI component.
///
/// Strict: every `%` must be followed by two hex digits and the decoded bytes
/// must form valid UTF-8. `+` is not treated as a space.
pub fn decode_component(raw: &str) -> Result<String, DecodeError> {
    let bytes = raw.as_bytes();
    let mut cursor = 0;
    while let Some(offset) = bytes[cursor..].iter().position(|&b| b == b'%') {
        let position = cursor + offset;
        let well_formed = bytes
            .get(position + 1..position + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodeError::MalformedEscape { position });
        }
        cursor = position + 3;
    }

    Ok(urlencoding::decode(raw).map(Cow::into_owned)?)
}

/// Decodes once, and a second time if a literal `%` survives the first pass.
///
/// Some writers encode the cookie twice before setting it.
pub fn decode_component_twice_if_needed(raw: &str) -> Result<String, DecodeError> {
    let decoded = decode_component(raw)?;
    if decoded.contains('%') {
        return decode_component(&decoded);
    }
    Ok(decoded)
}
