//! Hand-rolled CSV tokenizer for published-spreadsheet exports.
//!
//! The exports are small (hundreds of rows) and almost-RFC4180: quoted
//! fields with `""` escapes, embedded commas and newlines, and an
//! occasional UTF-8 BOM. A character scan covers all of it without
//! pulling in a CSV dependency for one fixed input shape.

/// Split raw CSV text into rows of trimmed cells.
///
/// Rules, in scan order:
/// - `"` toggles quote mode; `""` inside quotes is one literal quote
/// - `,` outside quotes ends a cell
/// - `\n`, `\r\n` or a bare `\r` outside quotes ends a row
/// - a row is only emitted if it has at least one cell, so blank lines
///   disappear (a line of just `,` still yields two empty cells)
/// - a trailing row without a final newline is kept
/// - an unterminated quote is closed implicitly at end of input
///
/// After splitting, every cell is stripped of a leading BOM and trimmed.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
            }
            '\n' | '\r' if !in_quotes => {
                if !cell.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut cell));
                }
                if !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows.iter_mut()
        .for_each(|r| r.iter_mut().for_each(|c| *c = clean_cell(c)));
    rows
}

/// Strip one leading BOM and surrounding whitespace.
fn clean_cell(cell: &str) -> String {
    cell.strip_prefix('\u{feff}').unwrap_or(cell).trim().to_string()
}
