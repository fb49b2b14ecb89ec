use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MatcherError, Result};
use crate::matcher::{MacSet, WriteableMatcher};
use crate::types::{MacAddr, MAC_LEN};

/// Regex pattern for hardware address literals.
/// Formats: aa:bb:cc:dd:ee:ff, aa-bb-cc-dd-ee-ff, aabb.ccdd.eeff
/// (any number of groups; the byte length is checked after decoding)
static MAC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[0-9a-fA-F]{2}(?::[0-9a-fA-F]{2})+|[0-9a-fA-F]{2}(?:-[0-9a-fA-F]{2})+|[0-9a-fA-F]{4}(?:\.[0-9a-fA-F]{4})+)$",
    )
    .expect("MAC_PATTERN: hardcoded regex is invalid")
});

/// Parse a hardware address literal into a 6-byte MAC address.
///
/// Literals in a valid notation that describe another length (EUI-64,
/// 20-byte InfiniBand, a truncated 5-pair form) are rejected.
pub fn parse_mac(text: &str) -> Result<MacAddr> {
    let text = text.trim();
    if !MAC_PATTERN.is_match(text) {
        return Err(MatcherError::InvalidFormat(text.to_string()));
    }

    let digits: Vec<u8> = text
        .bytes()
        .filter(u8::is_ascii_hexdigit)
        .map(hex_value)
        .collect();

    let len = digits.len() / 2;
    if len != MAC_LEN {
        return Err(MatcherError::InvalidFormat(format!(
            "{}: MAC address must be {} bytes, got {}",
            text, MAC_LEN, len
        )));
    }

    let mut bytes = [0u8; MAC_LEN];
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        bytes[i] = (pair[0] << 4) | pair[1];
    }
    Ok(MacAddr::new(bytes))
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

/// Load a single literal into the matcher. Blank input is ignored.
pub fn load<M: WriteableMatcher + ?Sized>(m: &mut M, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }
    m.add(text)
}

/// Load multiple literals into the matcher, stopping at the first bad one.
pub fn batch_load<M, S>(m: &mut M, entries: &[S]) -> Result<()>
where
    M: WriteableMatcher + ?Sized,
    S: AsRef<str>,
{
    for entry in entries {
        load(m, entry.as_ref())?;
    }
    Ok(())
}

/// Load newline-delimited literals from text.
///
/// Blank lines and lines starting with `#` are skipped. The first malformed
/// line aborts the load with a 1-based line number.
pub fn load_from_text<M: WriteableMatcher + ?Sized>(m: &mut M, text: &str) -> Result<()> {
    load_from_reader(m, text.as_bytes())
}

/// Load newline-delimited literals from a reader.
pub fn load_from_reader<M, R>(m: &mut M, mut reader: R) -> Result<()>
where
    M: WriteableMatcher + ?Sized,
    R: BufRead,
{
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;

        // Skip empty lines and comments before decoding, comments may hold
        // arbitrary bytes
        let raw = buf.trim_ascii();
        if raw.is_empty() || raw.starts_with(b"#") {
            continue;
        }

        let line = std::str::from_utf8(raw).map_err(|_| MatcherError::ParseFailure {
            line: line_num,
            source: Box::new(MatcherError::InvalidFormat("invalid UTF-8".to_string())),
        })?;

        load(m, line).map_err(|e| MatcherError::ParseFailure {
            line: line_num,
            source: Box::new(e),
        })?;
    }

    Ok(())
}

/// Build a static set from raw text bytes.
///
/// This is the producer bound to provider-backed reloadable matchers.
pub fn parse_text_mac_file(data: &[u8]) -> Result<MacSet> {
    let mut set = MacSet::new();
    load_from_reader(&mut set, data)?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::matcher::MacMatcher;

    #[test]
    fn test_mac_pattern_regex_compiles() {
        assert!(MAC_PATTERN.is_match("00:11:22:33:44:55"));
    }

    #[test]
    fn test_parse_notations() {
        let expected = MacAddr::new([0x00, 0x11, 0x22, 0xaa, 0xbb, 0xcc]);
        assert_eq!(parse_mac("00:11:22:aa:bb:cc").unwrap(), expected);
        assert_eq!(parse_mac("00-11-22-AA-BB-CC").unwrap(), expected);
        assert_eq!(parse_mac("0011.22Aa.bBcc").unwrap(), expected);
        assert_eq!(parse_mac("  00:11:22:aa:bb:cc\t").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_mixed_separators() {
        assert!(parse_mac("00:11-22:33:44:55").is_err());
        assert!(parse_mac("0011.2233:4455").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_literals() {
        for s in [
            "",
            "not a mac",
            "00:11:22:33:44:5",
            "00:11:22:33:44:gg",
            "001122334455",
            "00:11:22:33:44:55:",
            "0:11:22:33:44:55",
        ] {
            let err = parse_mac(s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input: {:?}", s);
        }
    }

    #[test]
    fn test_parse_rejects_other_lengths() {
        // EUI-64 is a valid notation but not 6 bytes
        let err = parse_mac("00:11:22:33:44:55:66:77").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(format!("{}", err).contains("got 8"), "got: {}", err);

        let err = parse_mac("00:11:22:33:44").unwrap_err();
        assert!(format!("{}", err).contains("got 5"), "got: {}", err);

        assert!(parse_mac("0011.2233.4455.6677").is_err());
    }

    #[test]
    fn test_load_skips_blank() {
        let mut set = MacSet::new();
        load(&mut set, "   ").unwrap();
        assert_eq!(set.len(), 0);
        load(&mut set, " 00:11:22:33:44:55 ").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_batch_load_stops_at_first_error() {
        let mut set = MacSet::new();
        let result = batch_load(
            &mut set,
            &["00:11:22:33:44:55", "bogus", "66:77:88:99:aa:bb"],
        );
        assert!(result.is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_text_with_comments() {
        let set = parse_text_mac_file(b"# comment\n\n00:11:22:33:44:55\n").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.matches(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));
    }

    #[test]
    fn test_parse_text_indented_comment_and_crlf() {
        let text = b"   # indented comment\r\naa:bb:cc:dd:ee:ff\r\n\r\n11-22-33-44-55-66";
        let set = parse_text_mac_file(text).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_text_reports_line() {
        let err = parse_text_mac_file(b"00:11:22:33:44\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert_eq!(err.line(), Some(1));

        let err = parse_text_mac_file(b"# header\n00:11:22:33:44:55\n\nxx\n").unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_parse_text_invalid_utf8() {
        let err = parse_text_mac_file(b"00:11:22:33:44:55\n\xff\xfe\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_parse_text_skips_non_utf8_comment() {
        // Latin-1 encoded "# café devices"
        let set = parse_text_mac_file(b"# caf\xe9 devices\n00:11:22:33:44:55\n").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.matches(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));

        let set = parse_text_mac_file(b"   #\xff\xfe\n\t\n66:77:88:99:aa:bb").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_load_from_text() {
        let mut set = MacSet::new();
        load_from_text(&mut set, "00:11:22:33:44:55\n66:77:88:99:aa:bb\n").unwrap();
        assert_eq!(set.len(), 2);
    }
}
