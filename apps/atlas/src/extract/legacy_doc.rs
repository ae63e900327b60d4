//! Legacy compound-binary (`.doc`) text scraping.
//!
//! This is not a real OLE2 parser. Text runs are located heuristically: every
//! `00 00 00` marker is assumed to be followed by a little-endian u32 byte length
//! and that many bytes of UTF-16LE text.

use super::decode_utf8_dropping_invalid;

/// Compound File Binary signature.
pub const DOC_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const CHUNK_MARKER: [u8; 3] = [0x00, 0x00, 0x00];

/// Reads a `.doc` payload: signature present → chunk scan, otherwise lossy UTF-8.
pub fn read_doc(bytes: &[u8]) -> String {
    if bytes.starts_with(&DOC_SIGNATURE) {
        extract_text_from_doc(bytes)
    } else {
        decode_utf8_dropping_invalid(bytes)
    }
}

/// Scans for marker/length/UTF-16LE chunks, returning everything decoded before
/// the first failed step. Never fails.
pub fn extract_text_from_doc(bytes: &[u8]) -> String {
    let mut text = String::new();
    let mut pos = 0usize;

    while let Some(found) = find_marker(bytes, pos) {
        pos = found + CHUNK_MARKER.len();

        let Some(len_bytes) = bytes.get(pos..pos + 4) else {
            break;
        };
        let chunk_len = u32::from_le_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]);
        pos += 4;

        // Length past EOF truncates the chunk, like a slice would.
        let end = pos.saturating_add(chunk_len as usize).min(bytes.len());
        text.push_str(&decode_utf16le_dropping_invalid(&bytes[pos..end]));
        pos = pos.saturating_add(chunk_len as usize);
    }

    text
}

fn find_marker(bytes: &[u8], from: usize) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(CHUNK_MARKER.len())
        .position(|w| w == CHUNK_MARKER)
        .map(|offset| from + offset)
}

/// Invalid surrogates and a dangling odd byte are dropped.
fn decode_utf16le_dropping_invalid(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units).filter_map(Result::ok).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    fn with_signature(body: &[u8]) -> Vec<u8> {
        let mut bytes = DOC_SIGNATURE.to_vec();
        bytes.extend_from_slice(body);
        bytes
    }

    #[test]
    fn test_no_marker_returns_empty_string() {
        let bytes = with_signature(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(read_doc(&bytes), "");
    }

    #[test]
    fn test_single_chunk_decodes_exactly() {
        let payload = utf16le("Python");
        let mut body = vec![0x00, 0x00, 0x00];
        body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        body.extend_from_slice(&payload);

        assert_eq!(extract_text_from_doc(&with_signature(&body)), "Python");
    }

    #[test]
    fn test_multiple_chunks_are_concatenated() {
        let mut body = Vec::new();
        for word in ["Rust ", "Docker"] {
            let payload = utf16le(word);
            body.push(0x01);
            body.extend_from_slice(&[0x00, 0x00, 0x00]);
            body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            body.extend_from_slice(&payload);
        }
        assert_eq!(read_doc(&with_signature(&body)), "Rust Docker");
    }

    #[test]
    fn test_truncated_length_stops_and_keeps_accumulated_text() {
        let payload = utf16le("Go");
        let mut body = vec![0x00, 0x00, 0x00];
        body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        body.extend_from_slice(&payload);
        // Marker followed by only two length bytes.
        body.extend_from_slice(&[0x00, 0x00, 0x00, 0x05, 0x00]);

        assert_eq!(read_doc(&with_signature(&body)), "Go");
    }

    #[test]
    fn test_length_past_eof_truncates_chunk() {
        let payload = utf16le("SQL");
        let mut body = vec![0x00, 0x00, 0x00];
        body.extend_from_slice(&1000u32.to_le_bytes());
        body.extend_from_slice(&payload);

        assert_eq!(read_doc(&with_signature(&body)), "SQL");
    }

    #[test]
    fn test_invalid_utf16_is_dropped() {
        // Lone high surrogate, then "A", then a dangling odd byte.
        let mut payload = vec![0x00, 0xD8, 0x41, 0x00, 0x42];
        let mut body = vec![0x00, 0x00, 0x00];
        body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        body.append(&mut payload);

        assert_eq!(read_doc(&with_signature(&body)), "A");
    }

    #[test]
    fn test_without_signature_falls_back_to_utf8() {
        assert_eq!(read_doc(b"plain Kotlin resume\xFF"), "plain Kotlin resume");
    }
}
