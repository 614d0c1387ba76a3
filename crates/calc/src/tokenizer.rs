use std::{fmt::Display, str::CharIndices};

use tracing::trace;

use crate::{error::LexError, operator::Operator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brace {
    Open,
    Close,
}

impl Brace {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }
}

/// A lexical unit of an arithmetic expression. Never changes after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Number(i64),
    Brace(Brace),
    Operator(Operator),
}

/// Category tag of a token, for callers that format tokens by kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Number,
    Brace,
    Operator,
}

impl Token {
    pub const fn category(&self) -> TokenCategory {
        match self {
            Self::Number(_) => TokenCategory::Number,
            Self::Brace(_) => TokenCategory::Brace,
            Self::Operator(_) => TokenCategory::Operator,
        }
    }

    /// Literal value of the token as it would appear in source
    pub fn lexeme(&self) -> String {
        self.to_string()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Brace(brace) => write!(f, "{}", brace.symbol()),
            Self::Operator(operator) => write!(f, "{operator}"),
        }
    }
}

/// Yields tokens in source order and stops after the first error.
///
/// Tokens read before an error have already been yielded; use [`tokenize`] to get all
/// of them or none.
pub struct Tokenizer<'a> {
    code: &'a str,
    char_indices: CharIndices<'a>,
    /// Set once an error has been yielded; the tokenizer yields nothing after that
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            char_indices: code.char_indices(),
            failed: false,
        }
    }

    /// 1-based column of a byte index, counted in chars
    fn column(&self, index: usize) -> usize {
        self.code[..index].chars().count() + 1
    }

    fn consume_while<C>(&mut self, condition: C) -> Option<(usize, &'a str)>
    where
        C: Fn(char) -> bool,
    {
        if let Some((first_index, end_index, it)) =
            Tokenizer::consume_while_it(&self.char_indices, condition)
        {
            self.char_indices = it;
            return Some((first_index, &self.code[first_index..end_index]));
        }
        None
    }

    /// @returns Option<(first, end, iterator)>
    /// [first, end) are the consumed bytes
    /// if None is returned that means nothing was matched
    fn consume_while_it<C>(
        it: &CharIndices<'a>,
        condition: C,
    ) -> Option<(usize, usize, CharIndices<'a>)>
    where
        C: Fn(char) -> bool,
    {
        let mut it_clone = it.clone();

        let (first_index, first_char) = it_clone.next()?;
        if !condition(first_char) {
            return None;
        }

        let mut end_index = first_index + first_char.len_utf8();
        loop {
            let mut peeker = it_clone.clone();
            match peeker.next() {
                Some((i, c)) if condition(c) => {
                    end_index = i + c.len_utf8();
                    it_clone = peeker;
                }
                _ => break,
            }
        }

        Some((first_index, end_index, it_clone))
    }

    fn consume_whitespace(&mut self) {
        self.consume_while(is_blank);
    }

    fn try_consume_number(&mut self) -> Option<Result<Token, LexError>> {
        let (first_index, digits) = self.consume_while(|c| c.is_ascii_digit())?;
        let token = digits
            .parse::<i64>()
            .map(Token::Number)
            .map_err(|_| LexError::NumberOutOfRange {
                literal: digits.to_string(),
                column: self.column(first_index),
            });
        Some(token)
    }

    fn try_consume_symbol(&mut self) -> Option<Token> {
        let mut it_clone = self.char_indices.clone();
        let (_, c) = it_clone.next()?;
        let token = Operator::from_char(c)
            .map(Token::Operator)
            .or_else(|| Brace::from_char(c).map(Token::Brace))?;
        self.char_indices = it_clone;
        Some(token)
    }

    fn consume_unknown(&mut self) -> Option<LexError> {
        let (index, character) = self.char_indices.next()?;
        Some(LexError::InvalidCharacter {
            character,
            column: self.column(index),
        })
    }
}

/// Only these four are skipped, any other whitespace is an invalid character
const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.consume_whitespace();
        let item = self
            .try_consume_number()
            .or_else(|| self.try_consume_symbol().map(Ok))
            .or_else(|| self.consume_unknown().map(Err))?;
        if item.is_err() {
            self.failed = true;
        }
        trace!(?item, "token");
        Some(item)
    }
}

/// Tokenizes the whole input. On the first error every token read so far is dropped.
///
/// # Errors
/// Returns the first [`LexError`] met in `code`.
pub fn tokenize(code: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(code).collect()
}

#[cfg(test)]
mod tests {
    use crate::{error::LexError, operator::Operator};
    use pretty_assertions::assert_eq;

    use super::{tokenize, Brace, Token, TokenCategory, Tokenizer};

    #[test]
    fn it_should_tokenize() {
        let tokens = tokenize("12+3").expect("should tokenize");
        assert_eq!(
            tokens,
            vec![
                Token::Number(12),
                Token::Operator(Operator::Add),
                Token::Number(3)
            ]
        );
    }

    #[test]
    fn it_should_tokenize_with_ws() {
        let code = "
 ( 10\t-2 )\r\n*  345 /7
        ";
        let expected = vec![
            Token::Brace(Brace::Open),
            Token::Number(10),
            Token::Operator(Operator::Subtract),
            Token::Number(2),
            Token::Brace(Brace::Close),
            Token::Operator(Operator::Multiply),
            Token::Number(345),
            Token::Operator(Operator::Divide),
            Token::Number(7),
        ];
        assert_eq!(tokenize(code), Ok(expected));
    }

    #[test]
    fn minus() {
        let mut tokenizer = Tokenizer::new("-1");
        assert_eq!(
            tokenizer.next(),
            Some(Ok(Token::Operator(Operator::Subtract)))
        );
        assert_eq!(tokenizer.next(), Some(Ok(Token::Number(1))));
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(tokenize("007"), Ok(vec![Token::Number(7)]));
    }

    #[test]
    fn invalid_character() {
        let error = tokenize("1 + 2 # 3").expect_err("should fail");
        assert_eq!(
            error,
            LexError::InvalidCharacter {
                character: '#',
                column: 7
            }
        );
        assert_eq!(error.character(), Some('#'));
    }

    #[test]
    fn stops_after_error() {
        let mut tokenizer = Tokenizer::new("1x2");
        assert_eq!(tokenizer.next(), Some(Ok(Token::Number(1))));
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn other_whitespace_is_invalid() {
        for (code, character) in [
            ("1\u{0B}+ 2", '\u{0B}'),
            ("1\u{0C}+ 2", '\u{0C}'),
            ("1\u{A0}+ 2", '\u{A0}'),
            ("1\u{2003}+ 2", '\u{2003}'),
        ] {
            assert_eq!(
                tokenize(code),
                Err(LexError::InvalidCharacter {
                    character,
                    column: 2
                }),
                "{code:?}"
            );
        }
    }

    #[test]
    fn multi_byte_after_blanks() {
        let error = tokenize("  \t\u{A0}1").expect_err("should fail");
        assert_eq!(error.character(), Some('\u{A0}'));
        assert_eq!(error.column(), 4);
        assert_eq!(tokenize("\r\n12 \n"), Ok(vec![Token::Number(12)]));
    }

    #[test]
    fn column_counts_chars() {
        let error = tokenize("1 + ü").expect_err("should fail");
        assert_eq!(error.column(), 5);
    }

    #[test]
    fn number_out_of_range() {
        let error = tokenize("1 + 99999999999999999999").expect_err("should fail");
        assert_eq!(
            error,
            LexError::NumberOutOfRange {
                literal: "99999999999999999999".to_string(),
                column: 5
            }
        );
    }

    #[test]
    fn empty() {
        assert_eq!(tokenize(""), Ok(vec![]));
        assert_eq!(tokenize(" \t\r\n "), Ok(vec![]));
    }

    #[test]
    fn categories_and_lexemes() {
        let tokens = tokenize("(42*").expect("should tokenize");
        let actual = tokens
            .iter()
            .map(|t| (t.category(), t.lexeme()))
            .collect::<Vec<_>>();
        assert_eq!(
            actual,
            vec![
                (TokenCategory::Brace, "(".to_string()),
                (TokenCategory::Number, "42".to_string()),
                (TokenCategory::Operator, "*".to_string()),
            ]
        );
    }
}
