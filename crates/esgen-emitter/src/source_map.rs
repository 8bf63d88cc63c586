//! Source map assembly: the version-3 map object, the VLQ codec for its
//! `mappings` field, and the base64 form used for inline data URIs.

use serde::Serialize;

/// One raw mapping entry: `[generated_column, source_index, source_line,
/// source_column]`, all 0-based. Entries are grouped per generated line.
pub type Segment = [u32; 4];

/// A version-3 source map. `sources` always has exactly one entry here;
/// the emitter maps a single file per print.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMap {
    pub version: u32,
    pub names: Vec<String>,
    pub sources: Vec<Option<String>>,
    #[serde(rename = "sourcesContent")]
    pub sources_content: Vec<Option<String>>,
    pub mappings: Mappings,
}

/// The `mappings` field, either in its compact serialized form or as the
/// raw per-line entry lists.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Mappings {
    Encoded(String),
    Raw(Vec<Vec<Segment>>),
}

impl SourceMap {
    /// JSON form of the map.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("source map serialization does not fail")
    }

    /// `data:` URI form of the map, for inline embedding after a
    /// `sourceMappingURL=` marker.
    pub fn to_url(&self) -> String {
        format!(
            "data:application/json;charset=utf-8;base64,{}",
            base64_encode(self.to_json().as_bytes())
        )
    }
}

impl std::fmt::Display for SourceMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// Encode raw per-line segments into the compact `mappings` string:
/// lines separated by `;`, segments by `,`, each segment a run of VLQ
/// deltas. The generated column resets per line; the source fields are
/// relative across the whole map.
pub fn encode_mappings(lines: &[Vec<Segment>]) -> String {
    let mut out = String::new();
    let mut previous_source_index: i64 = 0;
    let mut previous_source_line: i64 = 0;
    let mut previous_source_column: i64 = 0;

    for (line_index, line) in lines.iter().enumerate() {
        if line_index > 0 {
            out.push(';');
        }
        let mut previous_generated_column: i64 = 0;
        for (segment_index, segment) in line.iter().enumerate() {
            if segment_index > 0 {
                out.push(',');
            }
            let [generated_column, source_index, source_line, source_column] =
                segment.map(i64::from);
            vlq::encode_into(generated_column - previous_generated_column, &mut out);
            vlq::encode_into(source_index - previous_source_index, &mut out);
            vlq::encode_into(source_line - previous_source_line, &mut out);
            vlq::encode_into(source_column - previous_source_column, &mut out);
            previous_generated_column = generated_column;
            previous_source_index = source_index;
            previous_source_line = source_line;
            previous_source_column = source_column;
        }
    }

    out
}

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 with padding.
pub fn base64_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = chunk.get(1).copied().unwrap_or(0) as u32;
        let b2 = chunk.get(2).copied().unwrap_or(0) as u32;
        let triple = (b0 << 16) | (b1 << 8) | b2;

        out.push(BASE64_ALPHABET[(triple >> 18) as usize & 0x3f] as char);
        out.push(BASE64_ALPHABET[(triple >> 12) as usize & 0x3f] as char);
        out.push(if chunk.len() > 1 {
            BASE64_ALPHABET[(triple >> 6) as usize & 0x3f] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            BASE64_ALPHABET[triple as usize & 0x3f] as char
        } else {
            '='
        });
    }
    out
}

/// Base64 VLQ codec used by the `mappings` encoding: five value bits per
/// digit, continuation in the sixth, sign in the lowest value bit.
pub mod vlq {
    use super::BASE64_ALPHABET;

    pub fn encode(value: i64) -> String {
        let mut out = String::new();
        encode_into(value, &mut out);
        out
    }

    pub(crate) fn encode_into(value: i64, out: &mut String) {
        let mut rest = if value < 0 {
            ((value.unsigned_abs()) << 1) | 1
        } else {
            (value as u64) << 1
        };
        loop {
            let mut digit = (rest & 0b11111) as usize;
            rest >>= 5;
            if rest > 0 {
                digit |= 0b100000;
            }
            out.push(BASE64_ALPHABET[digit] as char);
            if rest == 0 {
                break;
            }
        }
    }

    /// Decode the first VLQ value in `text`, returning it together with
    /// the number of bytes consumed. `None` on a malformed digit or a
    /// truncated run.
    pub fn decode(text: &str) -> Option<(i64, usize)> {
        let mut value: u64 = 0;
        let mut shift = 0;
        for (index, byte) in text.bytes().enumerate() {
            let digit = BASE64_ALPHABET.iter().position(|&c| c == byte)? as u64;
            value |= (digit & 0b11111) << shift;
            if digit & 0b100000 == 0 {
                let magnitude = (value >> 1) as i64;
                let decoded = if value & 1 == 1 { -magnitude } else { magnitude };
                return Some((decoded, index + 1));
            }
            shift += 5;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vlq_encode_positive() {
        assert_eq!(vlq::encode(0), "A");
        assert_eq!(vlq::encode(1), "C");
        assert_eq!(vlq::encode(15), "e");
        assert_eq!(vlq::encode(16), "gB");
    }

    #[test]
    fn vlq_encode_negative() {
        assert_eq!(vlq::encode(-1), "D");
        assert_eq!(vlq::encode(-15), "f");
    }

    #[test]
    fn vlq_round_trips() {
        for value in [-1000, -100, -1, 0, 1, 100, 1000] {
            let encoded = vlq::encode(value);
            let (decoded, consumed) = vlq::decode(&encoded).unwrap();
            assert_eq!(decoded, value, "failed for {value}");
            assert_eq!(consumed, encoded.len());
        }
    }

    #[test]
    fn base64_encodes_with_padding() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn mappings_deltas_reset_generated_column_per_line() {
        let lines = vec![
            vec![[0, 0, 0, 0], [5, 0, 0, 3]],
            vec![[0, 0, 1, 0]],
        ];
        assert_eq!(encode_mappings(&lines), "AAAA,KAAG;AACH");
    }
}
