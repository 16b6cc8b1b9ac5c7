//! Lexical scanner operations over the current line.
//!
//! Each function either consumes the whole token it recognizes or leaves the
//! cursor where it found it, so the reader can classify a token with one
//! token of lookahead and never backtrack across lines.

use crate::error::{ParseErrorKind, Result};
use crate::parser::cursor::Cursor;
use crate::parser::stack::TagStack;
use crate::structure::Structure;

/// Bytes allowed in tag and attribute names
pub fn is_name_char(b: u8) -> bool {
    !matches!(
        b,
        b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'=' | b'/' | b'<' | b'"'
    )
}

/// Removes leading spaces and tabs; trailing and interior spacing is kept
pub fn trim_leading(cursor: &mut Cursor<'_>) {
    cursor.skip_blanks();
}

/// Trims the line and fails with `EmptyLine` if nothing is left
pub fn skip_if_blank(cursor: &mut Cursor<'_>) -> Result<()> {
    trim_leading(cursor);
    if cursor.is_eol() {
        return Err(cursor.error_here(ParseErrorKind::EmptyLine));
    }
    Ok(())
}

/// Whether the cursor sits on `<name`, i.e. an opening tag
pub fn is_opening_tag(cursor: &Cursor<'_>) -> bool {
    cursor.current() == Some(b'<') && cursor.peek(1) != Some(b'/')
}

/// Consumes `</name>` if it closes the innermost open tag.
///
/// Returns `Ok(false)` without moving when the cursor is not on a closing tag.
/// A closing tag for any other name is `UnexpectedClosingTag`.
pub fn is_closing_tag(cursor: &mut Cursor<'_>, stack: &TagStack) -> Result<bool> {
    if !cursor.starts_with("</") {
        return Ok(false);
    }

    let start = cursor.pos();
    cursor.advance_by(2);
    let name = cursor.take_while(is_name_char);
    if name.is_empty() || !cursor.consume(b'>') {
        let found = cursor.remaining().to_string();
        cursor.reset(start);
        return Err(cursor.error_here(ParseErrorKind::MalformedTag(format!(
            "expected `</name>`, found `</{found}`"
        ))));
    }

    match stack.peek() {
        Some(open) if open == name => Ok(true),
        expected => {
            let err = ParseErrorKind::UnexpectedClosingTag {
                expected: expected.map(str::to_string),
                found: name.to_string(),
            };
            cursor.reset(start);
            Err(cursor.error_here(err))
        }
    }
}

/// Whether an attribute list follows before the end of the opening tag
pub fn has_attributes(cursor: &Cursor<'_>) -> bool {
    let rest = cursor.remaining().trim_start_matches(|c: char| c == ' ' || c == '\t');
    !(rest.is_empty() || rest.starts_with('>') || rest.starts_with("/>"))
}

/// Consumes `<` and the tag name into `dest.key` and pushes it on the stack.
///
/// Returns true if the tag carries no attributes.
pub fn extract_key(
    cursor: &mut Cursor<'_>,
    dest: &mut Structure,
    stack: &mut TagStack,
) -> Result<bool> {
    let start = cursor.pos();
    if !cursor.consume(b'<') {
        return Err(cursor.error_here(ParseErrorKind::MalformedTag(
            "expected `<`".to_string(),
        )));
    }

    let name = cursor.take_while(is_name_char);
    if name.is_empty() {
        cursor.reset(start);
        return Err(cursor.error_here(ParseErrorKind::MalformedTag(
            "missing tag name".to_string(),
        )));
    }

    dest.key = name.to_string();
    stack.push(name);
    Ok(!has_attributes(cursor))
}

/// Consumes one `name="value"` pair into `dest.attributes`
pub fn extract_attribute(cursor: &mut Cursor<'_>, dest: &mut Structure) -> Result<()> {
    let start = cursor.pos();
    trim_leading(cursor);

    let name = cursor.take_while(is_name_char);
    let problem = if name.is_empty() {
        Some(format!(
            "expected an attribute name, found `{}`",
            cursor.remaining()
        ))
    } else if !cursor.consume(b'=') {
        Some(format!("attribute `{name}` is missing `=`"))
    } else if !cursor.consume(b'"') {
        Some(format!("value of `{name}` must be double-quoted"))
    } else {
        None
    };
    if let Some(problem) = problem {
        cursor.reset(start);
        return Err(cursor.error_here(ParseErrorKind::MalformedAttribute(problem)));
    }

    let value = cursor.take_while(|b| b != b'"');
    if !cursor.consume(b'"') {
        cursor.reset(start);
        return Err(cursor.error_here(ParseErrorKind::MalformedAttribute(format!(
            "value of `{name}` is not terminated"
        ))));
    }

    if dest.attributes.contains_key(name) {
        cursor.reset(start);
        return Err(cursor.error_here(ParseErrorKind::MalformedAttribute(format!(
            "duplicate attribute `{name}`"
        ))));
    }

    dest.attributes.insert(name.to_string(), value.to_string());
    Ok(())
}

/// Consumes the `>` or `/>` ending an opening tag.
///
/// Returns true for the self-closing form.
pub fn finish_opening_tag(cursor: &mut Cursor<'_>, key: &str) -> Result<bool> {
    let start = cursor.pos();
    trim_leading(cursor);

    if cursor.consume(b'>') {
        return Ok(false);
    }
    if cursor.starts_with("/>") {
        cursor.advance_by(2);
        return Ok(true);
    }

    let problem = if cursor.is_eol() {
        format!("opening tag <{key}> must end on the same line")
    } else {
        format!("unexpected `{}` in opening tag <{key}>", cursor.remaining())
    };
    cursor.reset(start);
    Err(cursor.error_here(ParseErrorKind::MalformedTag(problem)))
}

/// Consumes text up to the next `<` or the end of the line
pub fn text_run<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    cursor.take_while(|b| b != b'<')
}
