use crate::fsa::{Description, Transition};

/// Parse a whole input text into a raw [`Description`].
///
/// The first five lines are the five fields: states, alphabet, initial
/// state, accepting states, transitions. Missing lines read as empty
/// fields. Any non-blank line after the fifth sets `extra_content`, which
/// validation reports as malformed input. Parsing itself never fails.
pub fn parse_description(input: &str) -> Description {
    let mut lines = input.lines();

    let states = field_tokens(lines.next());
    let alphabet = field_tokens(lines.next());
    // The third field holds zero or one label; anything after the first
    // token is dead data.
    let initial = field_tokens(lines.next()).into_iter().next();
    let accepting = field_tokens(lines.next());
    let transitions = field_tokens(lines.next())
        .iter()
        .map(|token| parse_transition(token))
        .collect();

    let extra_content = lines.any(|line| !line.trim().is_empty());

    Description {
        states,
        alphabet,
        initial,
        accepting,
        transitions,
        extra_content,
    }
}

/// Split one bracketed field line into its comma-separated tokens.
///
/// Characters before the first `[` are ignored and the final character of
/// the line is assumed to be the closing `]` and dropped; the rest splits
/// on `,`. Interior empty tokens survive, one trailing empty token (from a
/// trailing comma or a bare `[]`) is dropped, and tokens are kept verbatim,
/// whitespace included.
fn field_tokens(line: Option<&str>) -> Vec<String> {
    let line = match line {
        Some(line) => line,
        None => return Vec::new(),
    };

    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut inside = false;

    let mut chars = line.chars();
    chars.next_back();

    for ch in chars {
        if !inside {
            inside = ch == '[';
        } else if ch == ',' {
            tokens.push(std::mem::take(&mut buffer));
        } else {
            buffer.push(ch);
        }
    }

    if !buffer.is_empty() {
        tokens.push(buffer);
    }

    tokens
}

/// Split a transition token of the form `from>label>to` into its parts.
///
/// Only the first two `>` separators split; the `to` part keeps any further
/// `>` characters verbatim. Missing parts read as empty strings, which
/// validation then rejects as undeclared symbols or states.
fn parse_transition(token: &str) -> Transition {
    let mut parts = token.splitn(3, '>');
    Transition {
        from: parts.next().unwrap_or_default().to_string(),
        label: parts.next().unwrap_or_default().to_string(),
        to: parts.next().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_bracketed_list() {
        assert_eq!(field_tokens(Some("[s0,s1,s2]")), vec!["s0", "s1", "s2"]);
    }

    #[test]
    fn test_empty_list_yields_no_tokens() {
        assert_eq!(field_tokens(Some("[]")), Vec::<String>::new());
        assert_eq!(field_tokens(Some("")), Vec::<String>::new());
        assert_eq!(field_tokens(None), Vec::<String>::new());
    }

    #[test]
    fn test_interior_empty_tokens_survive() {
        assert_eq!(field_tokens(Some("[a,,b]")), vec!["a", "", "b"]);
    }

    #[test]
    fn test_trailing_empty_token_is_dropped() {
        assert_eq!(field_tokens(Some("[a,]")), vec!["a"]);
    }

    #[test]
    fn test_tokens_keep_whitespace_verbatim() {
        assert_eq!(field_tokens(Some("[a, b]")), vec!["a", " b"]);
    }

    #[test]
    fn test_text_before_bracket_is_ignored() {
        assert_eq!(field_tokens(Some("states: [x,y]")), vec!["x", "y"]);
    }

    #[test]
    fn test_transition_splits_on_first_two_separators() {
        assert_eq!(parse_transition("s0>a>s1"), Transition::new("s0", "a", "s1"));
        assert_eq!(parse_transition("p>x>q>r"), Transition::new("p", "x", "q>r"));
        assert_eq!(parse_transition("s0>a"), Transition::new("s0", "a", ""));
        assert_eq!(parse_transition(""), Transition::new("", "", ""));
    }

    #[test]
    fn test_five_fields_parse_in_order() {
        let desc = parse_description("[s0,s1]\n[a,b]\n[s0]\n[s1]\n[s0>a>s1,s1>b>s0]\n");

        assert_eq!(desc.states, vec!["s0", "s1"]);
        assert_eq!(desc.alphabet, vec!["a", "b"]);
        assert_eq!(desc.initial.as_deref(), Some("s0"));
        assert_eq!(desc.accepting, vec!["s1"]);
        assert_eq!(desc.transitions.len(), 2);
        assert_eq!(desc.transitions[1], Transition::new("s1", "b", "s0"));
        assert!(!desc.extra_content);
    }

    #[test]
    fn test_initial_field_keeps_first_token_only() {
        let desc = parse_description("[s0,s1]\n[a]\n[s1,s0]\n[]\n[]\n");
        assert_eq!(desc.initial.as_deref(), Some("s1"));
    }

    #[test]
    fn test_missing_lines_read_as_empty_fields() {
        let desc = parse_description("[s0]\n[a]");

        assert_eq!(desc.states, vec!["s0"]);
        assert_eq!(desc.alphabet, vec!["a"]);
        assert_eq!(desc.initial, None);
        assert!(desc.accepting.is_empty());
        assert!(desc.transitions.is_empty());
    }

    #[test]
    fn test_trailing_blank_lines_are_not_extra_content() {
        let desc = parse_description("[s0]\n[a]\n[s0]\n[s0]\n[]\n\n   \n");
        assert!(!desc.extra_content);
    }

    #[test]
    fn test_sixth_nonblank_line_flags_extra_content() {
        let desc = parse_description("[s0]\n[a]\n[s0]\n[s0]\n[]\nleftover\n");
        assert!(desc.extra_content);
    }
}
