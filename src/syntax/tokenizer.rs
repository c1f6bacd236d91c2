use super::token::{Token, TokenKind};

/// Single-use cursor scanner that turns raw input into tokens left to right.
pub(crate) struct Tokenizer {
    chars: Vec<char>,
    position: usize,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Scans the whole input. Empty input yields an empty sequence, and an
    /// unscannable character ends the scan silently instead of raising.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.scan_token() {
            tokens.push(token);
        }

        tokens
    }

    // First match wins: identifier, literal, operator, separator.
    fn scan_token(&mut self) -> Option<Token> {
        self.trim_spaces();
        self.peek()?;

        self.scan_identifier()
            .or_else(|| self.scan_literal())
            .or_else(|| self.scan_operator())
            .or_else(|| self.scan_separator())
    }

    fn trim_spaces(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    // A run of [a-zA-Z_0-9] that doesn't start with a digit.
    fn scan_identifier(&mut self) -> Option<Token> {
        let first = self.peek()?;
        if first.is_ascii_digit() || !Self::is_identifier_char(first) {
            return None;
        }

        let start = self.position;
        while matches!(self.peek(), Some(c) if Self::is_identifier_char(c)) {
            self.position += 1;
        }

        Some(Token::new(TokenKind::Identifier, self.slice(start)))
    }

    fn scan_literal(&mut self) -> Option<Token> {
        let start = self.position;

        match self.scan_number() {
            Some(text) if !text.is_empty() => Some(Token::new(TokenKind::Literal, text)),
            _ => {
                self.position = start;
                None
            }
        }
    }

    // Digits with at most one dot; a second dot invalidates the whole
    // literal, and a trailing whitespace terminates it and is consumed.
    // A `-` is always left to the operator scanner so the parser can decide
    // between negation and subtraction.
    fn scan_number(&mut self) -> Option<String> {
        let mut buffer = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.peek() {
            if c == '.' {
                if seen_dot {
                    return None;
                }
                seen_dot = true;
                buffer.push(c);
                self.position += 1;
            } else if c.is_ascii_digit() {
                buffer.push(c);
                self.position += 1;
            } else if c.is_whitespace() {
                self.position += 1;
                break;
            } else {
                break;
            }
        }

        Some(buffer)
    }

    fn scan_operator(&mut self) -> Option<Token> {
        match self.peek()? {
            c @ ('+' | '-' | '*' | '/' | '^') => {
                self.position += 1;
                Some(Token::new(TokenKind::Operator, c))
            }
            _ => None,
        }
    }

    fn scan_separator(&mut self) -> Option<Token> {
        match self.peek()? {
            c @ ('(' | ')') => {
                self.position += 1;
                Some(Token::new(TokenKind::Separator, c))
            }
            _ => None,
        }
    }

    fn slice(&self, start: usize) -> String {
        self.chars[start..self.position].iter().collect()
    }

    fn is_identifier_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

#[cfg(test)]
mod test {
    use super::super::token::{Token, TokenKind};
    use super::Tokenizer;

    fn tokenize_str(input: &str) -> Vec<Token> {
        Tokenizer::new(input).tokenize()
    }

    #[test]
    fn read_numbers() {
        let tokens = tokenize_str("48 1024 \n9\n8");
        let expected = &[
            Token::new(TokenKind::Literal, "48"),
            Token::new(TokenKind::Literal, "1024"),
            Token::new(TokenKind::Literal, "9"),
            Token::new(TokenKind::Literal, "8"),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_decimal_number() {
        let tokens = tokenize_str("3.14");

        assert_eq!(tokens, &[Token::new(TokenKind::Literal, "3.14")]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize_str("").is_empty());
        assert!(tokenize_str("   ").is_empty());
    }

    #[test]
    fn minus_is_always_an_operator() {
        let tokens = tokenize_str("13-4");
        let expected = &[
            Token::new(TokenKind::Literal, "13"),
            Token::new(TokenKind::Operator, "-"),
            Token::new(TokenKind::Literal, "4"),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_identifier_and_separators() {
        let tokens = tokenize_str("sqrt(9)");
        let expected = &[
            Token::new(TokenKind::Identifier, "sqrt"),
            Token::new(TokenKind::Separator, "("),
            Token::new(TokenKind::Literal, "9"),
            Token::new(TokenKind::Separator, ")"),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_operators() {
        let tokens = tokenize_str("1+2*3/4^5");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        let expected = &[
            TokenKind::Literal,
            TokenKind::Operator,
            TokenKind::Literal,
            TokenKind::Operator,
            TokenKind::Literal,
            TokenKind::Operator,
            TokenKind::Literal,
            TokenKind::Operator,
            TokenKind::Literal,
        ];

        assert_eq!(kinds, expected);
    }

    #[test]
    fn stops_at_unscannable_characters() {
        let tokens = tokenize_str("2+$3");
        let expected = &[
            Token::new(TokenKind::Literal, "2"),
            Token::new(TokenKind::Operator, "+"),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn second_dot_invalidates_the_literal() {
        assert!(tokenize_str("1.2.3").is_empty());
    }

    #[test]
    fn whitespace_terminates_a_number() {
        let tokens = tokenize_str("1 2");
        let expected = &[
            Token::new(TokenKind::Literal, "1"),
            Token::new(TokenKind::Literal, "2"),
        ];

        assert_eq!(tokens, expected);
    }
}
