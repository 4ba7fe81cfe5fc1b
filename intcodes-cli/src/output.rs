//! Rendering of command results, as text lines or as JSON.

use intcodes::BitString;
use intcodes::CodingKind;
use intcodes::SequenceEntry;
use serde::Serialize;

/// Shown in place of an integer for the undecodable remainder.
const UNPARSED: &str = "(unparsed)";

/// The codeword of one encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedValue {
    pub integer: u64,
    pub code: BitString,
}

/// Result of the `encode` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    /// All codewords concatenated.
    pub bits: BitString,
    pub codes: Vec<EncodedValue>,
}

impl EncodeReport {
    pub fn new(codes: Vec<EncodedValue>) -> Self {
        let bits = codes
            .iter()
            .fold(BitString::empty(), |bits, value| bits.concat(&value.code));
        Self { bits, codes }
    }

    pub fn to_text(&self) -> String {
        self.bits.to_string()
    }
}

/// One line per entry: the codeword, a tab, then the integer.
pub fn entries_to_text(entries: &[SequenceEntry]) -> String {
    entries
        .iter()
        .map(|entry| match entry.integer {
            Some(integer) => format!("{}\t{integer}", entry.code),
            None => format!("{}\t{UNPARSED}", entry.code),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn codings_to_text() -> String {
    CodingKind::ALL
        .into_iter()
        .map(CodingKind::name)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(text: &str) -> BitString {
        text.parse().unwrap()
    }

    #[test]
    fn test_entries_to_text() {
        let entries = vec![
            SequenceEntry { integer: Some(42), code: bits("11110010") },
            SequenceEntry { integer: None, code: bits("1111") },
        ];
        assert_eq!(entries_to_text(&entries), "11110010\t42\n1111\t(unparsed)");
        assert_eq!(entries_to_text(&[]), "");
    }

    #[test]
    fn test_encode_report() {
        let report = EncodeReport::new(vec![
            EncodedValue { integer: 1, code: bits("1") },
            EncodedValue { integer: 2, code: bits("010") },
        ]);
        assert_eq!(report.to_text(), "1010");
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"bits":"1010","codes":[{"integer":1,"code":"1"},{"integer":2,"code":"010"}]}"#
        );
    }

    #[test]
    fn test_codings_to_text() {
        let text = codings_to_text();
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("unary\nbinary\nvlq\n"));
        assert!(text.ends_with("golomb-rice"));
    }
}
