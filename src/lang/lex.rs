use super::token::Word;

pub fn lex(s: &str) -> (Option<Word>, &str, &str) {
    BasicLexer::new(s).split()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// ## Statement splitter
///
/// Yields the keyword (the first whitespace delimited token, if it
/// names one), the raw keyword text, and the argument text trimmed on
/// both ends.
struct BasicLexer<'a> {
    s: &'a str,
}

impl<'a> BasicLexer<'a> {
    fn new(s: &'a str) -> BasicLexer<'a> {
        BasicLexer {
            s: s.trim_matches(is_basic_whitespace),
        }
    }

    fn split(&self) -> (Option<Word>, &'a str, &'a str) {
        let (keyword, args) = match self.s.find(is_basic_whitespace) {
            Some(pos) => (&self.s[..pos], &self.s[pos..]),
            None => (self.s, ""),
        };
        (
            Word::from_keyword(keyword),
            keyword,
            args.trim_matches(is_basic_whitespace),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_and_args() {
        assert_eq!(lex("PRINT \"HI\""), (Some(Word::Print), "PRINT", "\"HI\""));
        assert_eq!(lex("  goto\t100  "), (Some(Word::Goto), "goto", "100"));
        assert_eq!(lex("RETURN"), (Some(Word::Return), "RETURN", ""));
    }

    #[test]
    fn test_not_a_keyword() {
        assert_eq!(lex("A=5"), (None, "A=5", ""));
        assert_eq!(lex(""), (None, "", ""));
    }
}
