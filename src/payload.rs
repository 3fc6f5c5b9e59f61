//! Compress-or-passthrough codec for large article bodies.
//!
//! Article bodies are stored and shipped as JSON. Long technical posts run
//! to tens of kilobytes of markup, which compresses well; short posts don't
//! compress enough to pay for the codec overhead. [`encode`] therefore
//! applies DEFLATE + base64 only when the body is long enough to plausibly
//! benefit **and** the encoded form comes out strictly smaller — otherwise
//! the body passes through untouched.
//!
//! The two shapes are mutually exclusive on the wire: a payload is either
//! `{"plain": ...}` or `{"encoded": ..., "encoding": "deflate-base64"}`,
//! never both. Consumers check which variant they received.
//!
//! Decoding is best-effort display text. A payload with an unknown encoding
//! tag, corrupt base64, or an undecodable stream yields an empty string, not
//! an error — callers treat an empty body as "no content available". A
//! genuinely empty article and an undecodable payload are indistinguishable
//! at this layer.

use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use serde::{Deserialize, Serialize};

/// Encoding tag for the one reversible transform this codec defines.
pub const PAYLOAD_ENCODING: &str = "deflate-base64";

/// Bodies shorter than this never go through the transform. Below this
/// size the base64 expansion eats the compression win on real article text.
const MIN_COMPRESSIBLE_LEN: usize = 24_000;

/// An article body ready for storage or transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodedPayload {
    Encoded { encoded: String, encoding: String },
    Plain { plain: String },
}

/// Encode `text` for storage, compressing only when it helps.
///
/// Returns the plain passthrough form when the text is below the size
/// threshold, when the transform fails, or when the encoded form would not
/// be strictly smaller than the original.
pub fn encode(text: &str) -> EncodedPayload {
    if text.len() < MIN_COMPRESSIBLE_LEN {
        return EncodedPayload::Plain {
            plain: text.to_string(),
        };
    }

    let Some(compressed) = deflate(text) else {
        return EncodedPayload::Plain {
            plain: text.to_string(),
        };
    };
    let encoded = BASE64.encode(&compressed);
    if encoded.len() >= text.len() {
        return EncodedPayload::Plain {
            plain: text.to_string(),
        };
    }

    EncodedPayload::Encoded {
        encoded,
        encoding: PAYLOAD_ENCODING.to_string(),
    }
}

/// Recover the original text from a payload.
///
/// `decode(encode(text)) == text` for every `text`. Malformed or
/// unrecognized payloads yield an empty string.
pub fn decode(payload: &EncodedPayload) -> String {
    match payload {
        EncodedPayload::Plain { plain } => plain.clone(),
        EncodedPayload::Encoded { encoded, encoding } if encoding == PAYLOAD_ENCODING => {
            BASE64
                .decode(encoded)
                .ok()
                .and_then(|bytes| inflate(&bytes))
                .unwrap_or_default()
        }
        EncodedPayload::Encoded { .. } => String::new(),
    }
}

fn deflate(text: &str) -> Option<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).ok()?;
    encoder.finish().ok()
}

fn inflate(bytes: &[u8]) -> Option<String> {
    let mut decoder = DeflateDecoder::new(bytes);
    let mut out = String::new();
    decoder.read_to_string(&mut out).ok()?;
    Some(out)
}
