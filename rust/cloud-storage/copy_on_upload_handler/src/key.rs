use std::borrow::Cow;

use crate::error::CopyOnUploadError;

/// Decodes an object key as it appears in an S3 event notification.
/// S3 form-encodes keys, so `+` is a space and must be replaced before percent-decoding,
/// otherwise an encoded `%2B` would be turned into a space as well.
/// Every `%` must start a two hex digit escape.
pub fn decode_object_key(raw: &str) -> Result<String, CopyOnUploadError> {
    let decode_err = || CopyOnUploadError::KeyDecode {
        key: raw.to_string(),
    };

    if !has_valid_escapes(raw) {
        return Err(decode_err());
    }

    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|_| decode_err())
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
