// Stopset
//
// Stop-word list loading and lookup for text processing pipelines
// License: Mozilla Public License v2.0 (MPL v2.0)

pub struct LexerLine;

impl LexerLine {
    /// Extracts the significant token from a raw stop-word list line.
    ///
    /// A line carries at most one entry: its first token. Whitespace and the \
    ///   '|' character both act as separators, which makes everything past \
    ///   the first separator a same-line comment. Blank lines and lines \
    ///   opening on a separator carry no entry.
    pub fn first_token(line: &str) -> Option<&str> {
        let trimmed = line.trim();

        // Split on the whole separator class in a single pass; a '|' glued to \
        //   a token ('foo|bar') terminates it the same way a space would.
        let token = trimmed
            .split(|character: char| character.is_whitespace() || character == '|')
            .next()
            .map(str::trim);

        match token {
            Some(token) if !token.is_empty() => Some(token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_extracts_first_token() {
        assert_eq!(LexerLine::first_token("the"), Some("the"));
        assert_eq!(LexerLine::first_token("  the  "), Some("the"));
        assert_eq!(LexerLine::first_token("foo bar | baz"), Some("foo"));
        assert_eq!(LexerLine::first_token("foo\tbar"), Some("foo"));
    }

    #[test]
    fn it_treats_pipe_as_separator() {
        assert_eq!(LexerLine::first_token("foo|bar"), Some("foo"));
        assert_eq!(LexerLine::first_token("foo |bar"), Some("foo"));
        assert_eq!(LexerLine::first_token("foo| bar"), Some("foo"));
        assert_eq!(LexerLine::first_token("foo|bar baz"), Some("foo"));
    }

    #[test]
    fn it_skips_blank_and_comment_lines() {
        assert_eq!(LexerLine::first_token(""), None);
        assert_eq!(LexerLine::first_token("   "), None);
        assert_eq!(LexerLine::first_token("\t"), None);
        assert_eq!(LexerLine::first_token("| a comment line"), None);
        assert_eq!(LexerLine::first_token("|comment"), None);
    }

    #[test]
    fn it_accepts_carriage_returns() {
        assert_eq!(LexerLine::first_token("the\r"), Some("the"));
        assert_eq!(LexerLine::first_token("\r"), None);
    }
}
