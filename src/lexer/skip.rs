use super::cursor::Cursor;

/// Skips whitespace and `//` line comments, in any interleaving.
pub(super) fn skip_whitespace_and_comments(cursor: &mut Cursor) {
    loop {
        match cursor.current() {
            Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                cursor.advance();
            }
            Some(b'/') if cursor.peek_at(1) == Some(b'/') => {
                skip_line_comment(cursor);
            }
            _ => break,
        }
    }
}

fn skip_line_comment(cursor: &mut Cursor) {
    while let Some(ch) = cursor.current() {
        if ch == b'\n' {
            break;
        }
        cursor.advance();
    }
}
