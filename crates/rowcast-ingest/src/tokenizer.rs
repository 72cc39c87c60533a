//! Row tokenizer.
//!
//! Splits one raw delimited record into ordered field strings with an
//! explicit finite-state scanner over the character sequence. Splitting is
//! strictly linear, so the scanner keeps exactly three states and its
//! behavior can be checked against a state-transition table:
//!
//! | state         | char        | action                          | next        |
//! |---------------|-------------|---------------------------------|-------------|
//! | `Outside`     | escape      | (consume)                       | `AfterEscape` |
//! | `Outside`     | quote       | (consume)                       | `InQuote`   |
//! | `Outside`     | delimiter   | end field                       | `Outside`   |
//! | `Outside`     | other       | push                            | `Outside`   |
//! | `InQuote`     | escape      | (consume)                       | `AfterEscape` |
//! | `InQuote`     | quote       | (consume)                       | `Outside`   |
//! | `InQuote`     | other       | push                            | `InQuote`   |
//! | `AfterEscape` | any         | push literally                  | prior state |
//!
//! Quote characters toggle a quoted span and are consumed, which is what
//! strips the quotes bounding a field. The escape character, when
//! configured, marks the next character as literal, suppressing its role as
//! delimiter or quote terminator. Every field is trimmed of surrounding
//! whitespace once its boundary is known, so spaces around values and
//! around the delimiter never change results.

/// Delimiter, quote and escape characters of one transformer stage.
///
/// `escape: None` disables escape processing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub delimiter: char,
    pub quote: char,
    pub escape: Option<char>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            escape: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InQuote,
    AfterEscape { quoted: bool },
}

/// Splits one raw record into ordered, trimmed field strings.
///
/// The input is a single record; line framing is the caller's concern. An
/// unterminated quoted span or a trailing escape character consumes to the
/// end of the input.
pub fn tokenize(raw: &str, options: &TokenizerOptions) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = State::Outside;

    for ch in raw.chars() {
        state = match state {
            State::AfterEscape { quoted } => {
                current.push(ch);
                if quoted {
                    State::InQuote
                } else {
                    State::Outside
                }
            }
            State::Outside if options.escape == Some(ch) => State::AfterEscape { quoted: false },
            State::Outside if ch == options.quote => State::InQuote,
            State::Outside if ch == options.delimiter => {
                fields.push(take_field(&mut current));
                State::Outside
            }
            State::Outside => {
                current.push(ch);
                State::Outside
            }
            State::InQuote if options.escape == Some(ch) => State::AfterEscape { quoted: true },
            State::InQuote if ch == options.quote => State::Outside,
            State::InQuote => {
                current.push(ch);
                State::InQuote
            }
        };
    }
    fields.push(take_field(&mut current));
    fields
}

fn take_field(current: &mut String) -> String {
    let field = current.trim().to_string();
    current.clear();
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(delimiter: char, quote: char, escape: Option<char>) -> TokenizerOptions {
        TokenizerOptions {
            delimiter,
            quote,
            escape,
        }
    }

    #[test]
    fn splits_on_delimiter() {
        let fields = tokenize("1,hello", &TokenizerOptions::default());
        assert_eq!(fields, vec!["1", "hello"]);
    }

    #[test]
    fn empty_input_is_one_empty_field() {
        assert_eq!(tokenize("", &TokenizerOptions::default()), vec![""]);
    }

    #[test]
    fn trailing_delimiter_yields_trailing_empty_field() {
        assert_eq!(tokenize("a,b,", &TokenizerOptions::default()), vec!["a", "b", ""]);
    }

    #[test]
    fn fields_are_trimmed() {
        let fields = tokenize("3     ,foo   ", &TokenizerOptions::default());
        assert_eq!(fields, vec!["3", "foo"]);
    }

    #[test]
    fn quoted_delimiter_stays_literal() {
        let fields = tokenize("\"a,b\",c", &TokenizerOptions::default());
        assert_eq!(fields, vec!["a,b", "c"]);
    }

    #[test]
    fn bounding_quotes_are_stripped() {
        let fields = tokenize("\"hello\",\"world\"", &TokenizerOptions::default());
        assert_eq!(fields, vec!["hello", "world"]);
    }

    #[test]
    fn spaces_outside_quotes_are_trimmed() {
        let fields = tokenize("  \"hello\"  ,x", &TokenizerOptions::default());
        assert_eq!(fields, vec!["hello", "x"]);
    }

    #[test]
    fn escape_suppresses_delimiter() {
        let fields = tokenize("a\\,b,c", &options(',', '"', Some('\\')));
        assert_eq!(fields, vec!["a,b", "c"]);
    }

    #[test]
    fn escape_suppresses_quote_terminator() {
        let fields = tokenize("'it\\'s',ok", &options(',', '\'', Some('\\')));
        assert_eq!(fields, vec!["it's", "ok"]);
    }

    #[test]
    fn no_escape_passes_backslash_through() {
        let fields = tokenize("test\\default", &options(',', '\'', None));
        assert_eq!(fields, vec!["test\\default"]);
    }

    #[test]
    fn custom_delimiter_and_quote() {
        let fields = tokenize("'a|b'|c", &options('|', '\'', None));
        assert_eq!(fields, vec!["a|b", "c"]);
    }

    #[test]
    fn unterminated_quote_consumes_to_end() {
        let fields = tokenize("\"a,b", &TokenizerOptions::default());
        assert_eq!(fields, vec!["a,b"]);
    }

    #[test]
    fn trailing_escape_is_consumed() {
        let fields = tokenize("a\\", &options(',', '"', Some('\\')));
        assert_eq!(fields, vec!["a"]);
    }
}
