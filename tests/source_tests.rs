use tinyc::config::source::MAX_LINE_LENGTH;
use tinyc::errors::{TinyError, TinyResult};
use tinyc::frontend::source::SourceCursor;

#[test]
fn test_skips_blank_lines_and_counts_them() -> TinyResult<()> {
    let mut cursor = SourceCursor::new("\n  \t\r\n   read x\n".as_bytes());
    assert_eq!(cursor.line_number(), 0);
    assert_eq!(cursor.next_token_text()?, Some("read x\n"));
    assert_eq!(cursor.line_number(), 3);
    Ok(())
}

#[test]
fn test_advance_consumes_bytes() -> TinyResult<()> {
    let mut cursor = SourceCursor::new("read x".as_bytes());
    assert_eq!(cursor.next_token_text()?, Some("read x"));
    cursor.advance(4);
    assert_eq!(cursor.next_token_text()?, Some("x"));
    cursor.advance(1);
    assert_eq!(cursor.next_token_text()?, None);
    assert!(cursor.is_exhausted());
    Ok(())
}

#[test]
fn test_skip_to_crosses_lines() -> TinyResult<()> {
    let mut cursor = SourceCursor::new("a comment\nstill going } x := 1".as_bytes());
    cursor.skip_to("}")?;
    assert_eq!(cursor.line_number(), 2);
    assert_eq!(cursor.next_token_text()?, Some("x := 1"));
    Ok(())
}

#[test]
fn test_skip_to_without_delimiter() {
    let mut cursor = SourceCursor::new("x\n never closed\n".as_bytes());
    let result = cursor.skip_to("}");
    if let Err(TinyError::UnterminatedComment { line }) = result {
        // The search started before any line was fetched.
        assert_eq!(line, 0);
    } else {
        panic!("Expected an UnterminatedComment error, but got: {:?}", result);
    }
    assert!(cursor.is_exhausted());
}

#[test]
fn test_skip_to_handles_multibyte_text() -> TinyResult<()> {
    let mut cursor = SourceCursor::new("ünïcödé } done".as_bytes());
    cursor.skip_to("}")?;
    assert_eq!(cursor.next_token_text()?, Some("done"));
    Ok(())
}

#[test]
fn test_line_too_long_is_queued_and_skipped() -> TinyResult<()> {
    let source = format!("{}\nwrite x\n", "a".repeat(MAX_LINE_LENGTH + 1));
    let mut cursor = SourceCursor::new(source.as_bytes());
    assert_eq!(cursor.next_token_text()?, Some("write x\n"));
    assert_eq!(cursor.line_number(), 2);
    let errors = cursor.take_errors();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        TinyError::LineTooLong { line, length } => {
            assert_eq!(*line, 1);
            assert_eq!(*length, MAX_LINE_LENGTH + 1);
        }
        other => panic!("Expected a LineTooLong error, but got: {:?}", other),
    }
    assert!(cursor.take_errors().is_empty());
    Ok(())
}

#[test]
fn test_skip_to_continues_past_long_line() -> TinyResult<()> {
    let source = format!("start\n{}\nstill }} x := 1\n", "b".repeat(MAX_LINE_LENGTH + 1));
    let mut cursor = SourceCursor::new(source.as_bytes());
    cursor.skip_to("}")?;
    assert_eq!(cursor.line_number(), 3);
    assert_eq!(cursor.next_token_text()?, Some("x := 1\n"));
    assert!(matches!(
        cursor.take_errors().as_slice(),
        [TinyError::LineTooLong { line: 2, .. }]
    ));
    Ok(())
}

#[test]
fn test_line_at_length_limit_is_accepted() -> TinyResult<()> {
    let line = "a".repeat(MAX_LINE_LENGTH);
    let source = format!("{}\r\n", line);
    let mut cursor = SourceCursor::new(source.as_bytes());
    let text = cursor.next_token_text()?.map(str::to_string);
    assert_eq!(text, Some(format!("{}\r\n", line)));
    Ok(())
}

#[test]
fn test_invalid_utf8_is_queued_and_decoded_lossily() -> TinyResult<()> {
    let bytes: &[u8] = &[b'x', b' ', 0xff, b'\n', b'y', b'\n'];
    let mut cursor = SourceCursor::new(bytes);
    assert_eq!(cursor.next_token_text()?, Some("x \u{FFFD}\n"));
    assert!(matches!(
        cursor.take_errors().as_slice(),
        [TinyError::LexerError { line: 1, .. }]
    ));
    cursor.advance(5);
    assert_eq!(cursor.next_token_text()?, Some("y\n"));
    assert!(!cursor.is_exhausted());
    assert!(cursor.take_errors().is_empty());
    Ok(())
}
