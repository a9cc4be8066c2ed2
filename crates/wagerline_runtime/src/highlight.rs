//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use wagerline_foundation::is_valid_message;

/// Highlighter for spins, control tokens, meta commands, and bet strings.
pub struct WagerlineHighlighter {}

impl WagerlineHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Cow::Borrowed(line);
        }

        // Control tokens - bold yellow
        if is_valid_message(trimmed) {
            return Cow::Owned(format!("\x1b[1;33m{line}\x1b[0m"));
        }

        // Meta commands - cyan command word
        if trimmed.starts_with(':') {
            let split = line.find(char::is_whitespace).unwrap_or(line.len());
            let (command, rest) = line.split_at(split);
            return Cow::Owned(format!("\x1b[36m{command}\x1b[0m{rest}"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut in_location = false;

        while let Some(c) = chars.next() {
            match c {
                // Separators - bold
                '@' | ',' => {
                    result.push_str("\x1b[1m");
                    result.push(c);
                    result.push_str("\x1b[0m");
                    in_location = c == '@';
                }

                // Numbers outside a location (spins and stakes) - magenta
                c if (c.is_ascii_digit() || c == '-') && !in_location => {
                    result.push_str("\x1b[35m");
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_digit() {
                            result.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                }

                // Locations - green
                c if in_location => {
                    result.push_str("\x1b[32m");
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next == ',' || next.is_whitespace() {
                            break;
                        }
                        result.push(next);
                        chars.next();
                    }
                    result.push_str("\x1b[0m");
                }

                _ => result.push(c),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for WagerlineHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
