//! Incremental UTF-8 decoding of a streamed response body
//!
//! Network chunks may split a multi-byte character; the trailing partial
//! sequence is held back until the next chunk completes it.

use crate::error::{ChatError, Result};

/// Turns raw body chunks into text deltas
#[derive(Debug, Default)]
pub struct TextStreamDecoder {
    pending: Vec<u8>,
}

impl TextStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning every complete character decoded so far
    pub fn push(&mut self, chunk: &[u8]) -> Result<String> {
        self.pending.extend_from_slice(chunk);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(ChatError::Decode(e.to_string())),
        };

        let rest = self.pending.split_off(valid);
        let done = std::mem::replace(&mut self.pending, rest);
        String::from_utf8(done).map_err(|e| ChatError::Decode(e.to_string()))
    }

    /// End of stream; fails if a character was left incomplete
    pub fn finish(self) -> Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(ChatError::Decode(format!(
                "stream ended inside a character ({} dangling bytes)",
                self.pending.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = TextStreamDecoder::new();
        assert_eq!(decoder.push(b"Hello, ").unwrap(), "Hello, ");
        assert_eq!(decoder.push(b"world").unwrap(), "world");
        decoder.finish().unwrap();
    }

    #[test]
    fn test_split_multibyte_character() {
        let bytes = "héllo".as_bytes();
        let mut decoder = TextStreamDecoder::new();
        // 'é' is two bytes; cut between them
        assert_eq!(decoder.push(&bytes[..2]).unwrap(), "h");
        assert_eq!(decoder.push(&bytes[2..]).unwrap(), "éllo");
        decoder.finish().unwrap();
    }

    #[test]
    fn test_invalid_bytes() {
        let mut decoder = TextStreamDecoder::new();
        let err = decoder.push(&[b'a', 0xff, b'b']).unwrap_err();
        assert!(matches!(err, ChatError::Decode(_)));
    }

    #[test]
    fn test_truncated_stream() {
        let mut decoder = TextStreamDecoder::new();
        assert_eq!(decoder.push(&"€".as_bytes()[..1]).unwrap(), "");
        assert!(decoder.finish().is_err());
    }
}
