//! Restricted parser for the numeric sequence literal at the end of each
//! progress line, e.g. `[1.0, 2.5, -3]`.
//!
//! Grammar (whitespace allowed between any two tokens):
//!
//! ```text
//! list   := '[' items? ']' | '(' items? ')'
//! items  := number (',' number)* ','?
//! number := sign? (digits ('.' digits?)? | '.' digits) exponent?
//! sign   := '+' | '-'
//! exponent := ('e' | 'E') sign? digits
//! ```
//!
//! Nothing else is accepted: identifiers, calls, attribute access, operators
//! and nested sequences are all rejected.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    Unexpected {
        offset: usize,
        found: char,
        expected: &'static str,
    },
    #[error("literal ends early, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("'{text}' at offset {offset} is not a number")]
    InvalidNumber { offset: usize, text: String },
}

/// Parse a bracketed list of numbers into `f64` values.
pub fn parse_number_list(text: &str) -> Result<Vec<f64>, LiteralError> {
    let mut parser = Parser::new(text);
    parser.skip_ws();
    if parser.at_end() {
        return Err(LiteralError::Empty);
    }
    let values = parser.list()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(values),
        Some(c) => Err(parser.unexpected(c, "end of literal")),
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn unexpected(&self, found: char, expected: &'static str) -> LiteralError {
        LiteralError::Unexpected {
            offset: self.pos,
            found,
            expected,
        }
    }

    fn expect_more(&self, expected: &'static str) -> Result<char, LiteralError> {
        self.peek().ok_or(LiteralError::UnexpectedEnd { expected })
    }

    fn list(&mut self) -> Result<Vec<f64>, LiteralError> {
        let close = match self.expect_more("'[' or '('")? {
            '[' => ']',
            '(' => ')',
            c => return Err(self.unexpected(c, "'[' or '('")),
        };
        self.bump();

        let mut values = Vec::new();
        loop {
            self.skip_ws();
            let c = self.expect_more("a number or closing bracket")?;
            if c == close {
                self.bump();
                return Ok(values);
            }
            values.push(self.number()?);

            self.skip_ws();
            match self.expect_more("',' or closing bracket")? {
                ',' => self.bump(),
                c if c == close => {
                    self.bump();
                    return Ok(values);
                }
                c => return Err(self.unexpected(c, "',' or closing bracket")),
            }
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        self.pos - start
    }

    fn number(&mut self) -> Result<f64, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }

        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.peek() == Some('.') {
            self.bump();
            frac_digits = self.digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            return match self.peek() {
                Some(c) => Err(self.unexpected(c, "a number")),
                None => Err(LiteralError::UnexpectedEnd {
                    expected: "a number",
                }),
            };
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.digits() == 0 {
                return Err(LiteralError::InvalidNumber {
                    offset: start,
                    text: self.text[start..self.pos].to_string(),
                });
            }
        }

        let token = &self.text[start..self.pos];
        token.parse::<f64>().map_err(|_| LiteralError::InvalidNumber {
            offset: start,
            text: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_number_list("[1.0, 2.0, 3.0]"), Ok(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_parse_mixed_forms() {
        let values = parse_number_list("  [ -3, +2.5, .5, 7., 1e3, -2.5E-1 ] ").unwrap();
        assert_eq!(values, vec![-3.0, 2.5, 0.5, 7.0, 1000.0, -0.25]);
    }

    #[test]
    fn test_parse_empty_and_tuple() {
        assert_eq!(parse_number_list("[]"), Ok(vec![]));
        assert_eq!(parse_number_list("(1, 2,)"), Ok(vec![1.0, 2.0]));
    }

    #[test]
    fn test_rejects_code() {
        for text in [
            "__import__('os').system('rm -rf /')",
            "[1, os.getpid()]",
            "[1, abs(-2)]",
            "[x.real]",
            "[1 + 2]",
            "[1, 2] + [3]",
            "[[1, 2]]",
            "[1, 2)",
            "[1 2]",
            "[1,,2]",
            "[1e]",
            "[-]",
            "[1, 2",
            "",
            "   ",
        ] {
            assert!(parse_number_list(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_error_position() {
        let err = parse_number_list("[1, foo]").unwrap_err();
        assert_eq!(
            err,
            LiteralError::Unexpected {
                offset: 4,
                found: 'f',
                expected: "a number",
            }
        );
    }
}
