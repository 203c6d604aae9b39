//! Chunk-boundary-independent line splitting over a UTF-8 byte stream.

use encoding_rs::{CoderResult, Decoder, UTF_8};

/// Accumulates byte chunks and yields complete `\n`-terminated lines.
///
/// Decoding is stateful: a multi-byte sequence split across two chunks is
/// held in the decoder until its remaining bytes arrive. Malformed input is
/// replaced with U+FFFD and decoding carries on. For any input the emitted
/// lines are the same no matter how the bytes were chunked.
///
/// ```rust
/// use aristotle_core::stream::LineBuffer;
///
/// let mut buffer = LineBuffer::new();
/// assert!(buffer.feed(b"data: {\"type\":").is_empty());
/// assert_eq!(buffer.feed(b"\"info\"}\npart"), vec!["data: {\"type\":\"info\"}"]);
/// assert_eq!(buffer.flush().as_deref(), Some("part"));
/// ```
pub struct LineBuffer {
    decoder: Decoder,
    pending: String,
    replacements: usize,
}

impl std::fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("pending", &self.pending)
            .field("replacements", &self.replacements)
            .finish_non_exhaustive()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            decoder: UTF_8.new_decoder_with_bom_removal(),
            pending: String::new(),
            replacements: 0,
        }
    }

    /// Decode a chunk and return every line it completed, in order.
    ///
    /// Lines exclude the `\n` terminator. A `\r` before it is kept.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.decode(chunk, false);

        let Some(last_newline) = self.pending.rfind('\n') else {
            return Vec::new();
        };

        let tail = self.pending.split_off(last_newline + 1);
        let mut complete = std::mem::replace(&mut self.pending, tail);
        complete.pop();
        complete.split('\n').map(str::to_owned).collect()
    }

    /// Finish the stream and return the unterminated tail, if any.
    ///
    /// An incomplete multi-byte sequence at the very end becomes U+FFFD. The
    /// buffer is reset and can be reused for a new stream.
    pub fn flush(&mut self) -> Option<String> {
        self.decode(&[], true);
        self.decoder = UTF_8.new_decoder_with_bom_removal();

        let residual = std::mem::take(&mut self.pending);
        if residual.is_empty() {
            None
        } else {
            Some(residual)
        }
    }

    /// Text decoded but not yet terminated by a newline.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Number of decode steps that had to substitute U+FFFD.
    pub const fn replacements(&self) -> usize {
        self.replacements
    }

    fn decode(&mut self, mut src: &[u8], last: bool) {
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(src.len())
                .unwrap_or_else(|| src.len().saturating_mul(3).saturating_add(16));
            self.pending.reserve(needed);

            let (result, read, replaced) = self.decoder.decode_to_string(src, &mut self.pending, last);
            if replaced {
                self.replacements += 1;
                tracing::debug!(
                    total = self.replacements,
                    "Replaced malformed UTF-8 in event stream"
                );
            }
            src = &src[read..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => {},
            }
        }
    }
}
