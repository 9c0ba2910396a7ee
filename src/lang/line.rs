use super::error::*;
use super::LineNumber;

/// ## A numbered program line

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    /// Parses `"<number> <content>"`. The content is upper-cased and
    /// must not be blank.
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_start();
        let (digits, text) = match s.find(|c: char| c == ' ' || c == '\t') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => return Err(error!(SyntaxError)),
        };
        if text.trim().is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(error!(SyntaxError));
        }
        match digits.parse::<LineNumber>() {
            Ok(number) if number > 0 => Ok(Line {
                number,
                text: text.trim().to_ascii_uppercase(),
            }),
            _ => Err(error!(SyntaxError)),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the text begins with a line number.
    pub fn is_numbered(s: &str) -> bool {
        s.trim_start().starts_with(|c: char| c.is_ascii_digit())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}
