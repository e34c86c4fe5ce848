//! Line tokenizer: indentation depth plus whitespace-split tokens.
//!
//! Indentation is the count of leading space characters. A leading tab is
//! counted as a single column like a space; no tab-stop expansion is done.

/// One non-blank physical line after tokenizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedLine {
    /// Number of leading indentation characters.
    pub indent: usize,
    /// The remainder of the line split on runs of whitespace.
    pub tokens: Vec<String>,
}

/// Tokenize a single physical line.
///
/// Returns `None` for a line that is empty or whitespace-only.
pub fn tokenize_line(line: &str) -> Option<TokenizedLine> {
    let indent = line
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();
    let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    if tokens.is_empty() {
        return None;
    }
    Some(TokenizedLine { indent, tokens })
}

/// Tokenize a multi-line text blob, skipping blank lines.
pub fn tokenize(text: &str) -> impl Iterator<Item = TokenizedLine> + '_ {
    text.lines().filter_map(tokenize_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_leading_spaces() {
        let line = tokenize_line("   ip address 10.0.0.1 255.0.0.0").unwrap();
        assert_eq!(line.indent, 3);
        assert_eq!(line.tokens, vec!["ip", "address", "10.0.0.1", "255.0.0.0"]);
    }

    #[test]
    fn collapses_inner_whitespace_runs() {
        let line = tokenize_line("description   WAN \t link  ").unwrap();
        assert_eq!(line.indent, 0);
        assert_eq!(line.tokens, vec!["description", "WAN", "link"]);
    }

    #[test]
    fn blank_and_whitespace_only_lines_are_skipped() {
        assert_eq!(tokenize_line(""), None);
        assert_eq!(tokenize_line("     "), None);
        assert_eq!(tokenize_line(" \t "), None);
    }

    #[test]
    fn tab_is_one_column() {
        let line = tokenize_line("\t shutdown").unwrap();
        assert_eq!(line.indent, 2);
        assert_eq!(line.tokens, vec!["shutdown"]);
    }

    #[test]
    fn tokenize_drops_blank_lines_and_handles_crlf() {
        let lines: Vec<_> =
            tokenize("hostname r1\r\n\r\ninterface Gi0/1\r\n shutdown\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].tokens, vec!["hostname", "r1"]);
        assert_eq!(lines[2].indent, 1);
        assert_eq!(lines[2].tokens, vec!["shutdown"]);
    }
}
