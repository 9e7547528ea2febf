//! Text, stream and serde round trips for BitSequence.

use bitseq::{BitSeqError, BitSequence};
use std::io::{self, BufRead, BufReader, Cursor, Read};

// =============================================================================
// Stream Reading
// =============================================================================

#[test]
fn test_read_consecutive_runs() {
    let mut reader = Cursor::new("1100 , 01\n111x");
    let mut s = BitSequence::new();

    let mut runs = Vec::new();
    while s.read_from(&mut reader).is_ok() {
        runs.push(s.to_string());
    }
    assert_eq!(runs, vec!["1100", "01", "111"]);
}

#[test]
fn test_read_leaves_terminator_unread() {
    let mut reader = Cursor::new("0110;rest");
    let mut s = BitSequence::new();
    s.read_from(&mut reader).unwrap();

    let mut rest = String::new();
    reader.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, ";rest");
}

#[test]
fn test_read_across_small_buffers() {
    let text = format!("   {}   ", "10".repeat(50));
    let mut reader = BufReader::with_capacity(3, text.as_bytes());
    let mut s = BitSequence::new();
    s.read_from(&mut reader).unwrap();
    assert_eq!(s.len(), 100);
    assert_eq!(s.to_string(), "10".repeat(50));
}

#[test]
fn test_read_end_of_data_keeps_contents() {
    let mut reader = Cursor::new("   \n");
    let mut s: BitSequence = "101".parse().unwrap();
    assert!(matches!(
        s.read_from(&mut reader),
        Err(BitSeqError::EndOfData)
    ));
    assert_eq!(s.to_string(), "101");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "source closed"))
    }
}

#[test]
fn test_read_reports_io_errors() {
    let mut reader = BufReader::new(FailingReader);
    assert!(reader.fill_buf().is_err());
    let mut s = BitSequence::new();
    assert!(matches!(s.read_from(&mut reader), Err(BitSeqError::Io(_))));
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn test_write_then_read_round_trip() {
    let original: BitSequence = "0010111010001".parse().unwrap();
    let mut buf = Vec::new();
    original.write_to(&mut buf).unwrap();
    buf.push(b'\n');

    let mut restored = BitSequence::new();
    restored.read_from(&mut buf.as_slice()).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_display_in_format_strings() {
    let s: BitSequence = "101".parse().unwrap();
    assert_eq!(format!("[{}]", s), "[101]");
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn test_serde_json_round_trip() {
    let s: BitSequence = "1001101".parse().unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "\"1001101\"");

    let back: BitSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn test_serde_rejects_invalid_text() {
    let result: Result<BitSequence, _> = serde_json::from_str("\"10a\"");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid bit character 'a'"));

    let result: Result<BitSequence, _> = serde_json::from_str("[1, 0]");
    assert!(result.is_err());
}

#[test]
fn test_serde_with_custom_word_type() {
    let s: BitSequence<u64> = "1".repeat(70).parse().unwrap();
    let json = serde_json::to_string(&s).unwrap();
    let back: BitSequence<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.num_words(), 2);
    assert_eq!(back, s);
}
