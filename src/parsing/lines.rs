//! Line splitting shared by in-memory and streamed input.
//!
//! A line ends at `\n`. One `\r` directly before that `\n`, or at the very
//! end of the input, belongs to the terminator. Any other `\r` is content.

/// Removes a trailing `\n`, `\r\n` or bare `\r` from a raw line.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Splits export text into lines the same way [`MessageStream`] reads them.
///
/// Unlike [`str::lines`], a bare `\r` ending the last line is dropped.
///
/// [`MessageStream`]: crate::streaming::MessageStream
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n').map(strip_terminator)
}
