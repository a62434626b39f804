//! Form-style percent encoding (`+` for space).

/// Decodes `%XX` escapes after turning `+` into space.
///
/// Malformed escapes are kept as-is; bytes that are not valid UTF-8 become
/// U+FFFD.
pub fn percent_decode_plus(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let high = bytes.get(i + 1).copied().and_then(hex_digit);
                let low = bytes.get(i + 2).copied().and_then(hex_digit);
                match (high, low) {
                    (Some(h), Some(l)) => {
                        out.push(h << 4 | l);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Encodes `input` as an `application/x-www-form-urlencoded` value.
///
/// Only ASCII letters, digits and `_.-` stay bare; `*` is escaped too.
pub fn percent_encode_plus(input: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(input.as_bytes()).collect();
    encoded.replace('*', "%2A")
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
