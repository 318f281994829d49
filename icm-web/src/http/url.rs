//! URL handling helpers.
//!
//! # Example
//!
//! ```
//! use icm_web::http::decode_component;
//!
//! assert_eq!(decode_component("caf%C3%A9%20bar").unwrap(), "café bar");
//! assert_eq!(decode_component("a+b").unwrap(), "a+b");
//! ```
use crate::Error;

/// Decode a single percent-encoded URI component.
///
/// Every `%XX` escape is turned back into its byte and the bytes must form valid UTF-8.
/// Unlike form decoding, `+` is left alone.
pub fn decode_component(s: &str) -> Result<String, Error> {
    let malformed = || Error::MalformedEncoding(s.to_string());

    let input = s.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        match input[i] {
            b'%' => {
                let hex = input.get(i + 1..i + 3).ok_or_else(malformed)?;
                if !hex.iter().all(u8::is_ascii_hexdigit) {
                    return Err(malformed());
                }
                bytes.push(hex_value(hex[0]) << 4 | hex_value(hex[1]));
                i += 3;
            }

            byte => {
                bytes.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8(bytes).map_err(|_| malformed())
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("abc123").unwrap(), "abc123");
        assert_eq!(decode_component("hello%20world").unwrap(), "hello world");
        assert_eq!(decode_component("id%2Cpath%3Dx").unwrap(), "id,path=x");
        assert_eq!(decode_component("%e2%82%ac").unwrap(), "€");
        assert_eq!(decode_component("").unwrap(), "");
    }

    #[test]
    fn test_decode_component_malformed() {
        assert!(decode_component("%zz").is_err());
        assert!(decode_component("abc%2").is_err());
        assert!(decode_component("%").is_err());
        // Lone continuation byte.
        assert!(decode_component("%80").is_err());
        // %+1 must not parse as a signed number.
        assert!(decode_component("%+1").is_err());
    }
}
