#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use linexml::error::{ParseErrorKind, SecurityError};
use linexml::parser::config::{DEFAULT_MAX_ATTRIBUTES, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LINE_LENGTH};
use linexml::{from_str, ParserConfig, Reader};

#[test]
fn test_stack_overflow_prevention() {
    // One more level of nesting than the default allows
    let depth = DEFAULT_MAX_DEPTH + 1;
    let mut xml = String::new();
    for i in 0..depth {
        xml.push_str(&format!("<n{}>\n", i));
    }
    for i in (0..depth).rev() {
        xml.push_str(&format!("</n{}>\n", i));
    }

    let result = from_str(&xml);
    assert!(
        result.is_err(),
        "Expected error for excessive nesting, got {:?}",
        result
    );
    if let Err(e) = result {
        assert!(
            matches!(
                e.kind(),
                ParseErrorKind::Security(SecurityError::MaxDepthExceeded(_))
            ),
            "Expected MaxDepthExceeded, got {:?}",
            e.kind()
        );
        assert_eq!(e.location().map(|l| l.line), Some(depth));
    }
}

#[test]
fn test_max_depth_is_inclusive() {
    let mut xml = String::new();
    for _ in 0..DEFAULT_MAX_DEPTH {
        xml.push_str("<n>");
    }
    for _ in 0..DEFAULT_MAX_DEPTH {
        xml.push_str("</n>");
    }
    assert!(from_str(&xml).is_ok());
}

#[test]
fn test_max_line_length() {
    let long_content = "x".repeat(DEFAULT_MAX_LINE_LENGTH + 1);
    let xml = format!("<a>\n{}\n</a>", long_content);

    let result = from_str(&xml);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(
            e.kind(),
            ParseErrorKind::Security(SecurityError::MaxLineLengthExceeded(_))
        ));
        assert_eq!(e.location().map(|l| l.line), Some(2));
    }
}

#[test]
fn test_max_attributes() {
    let attributes: Vec<String> = (0..=DEFAULT_MAX_ATTRIBUTES)
        .map(|i| format!("a{}=\"{}\"", i, i))
        .collect();
    let xml = format!("<tag {}></tag>", attributes.join(" "));

    let result = from_str(&xml);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(
            e.kind(),
            ParseErrorKind::Security(SecurityError::MaxAttributesExceeded(_))
        ));
    }
}

#[test]
fn test_custom_limits() {
    let config = ParserConfig {
        max_depth: 1,
        ..ParserConfig::default()
    };
    let mut reader = Reader::with_config("<a>\n<b></b>\n</a>".as_bytes(), config);
    let err = reader.read().unwrap_err();
    assert_eq!(
        err.kind(),
        &ParseErrorKind::Security(SecurityError::MaxDepthExceeded(1))
    );
}
