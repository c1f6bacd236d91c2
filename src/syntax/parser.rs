use crate::error::{CalcResult, ErrorKind};

use super::node::{Function, Operator, SyntaxNode};
use super::token::{Token, TokenKind};

/// Recursive-descent parser over a scanned token sequence.
///
/// The only state is a three-token window (previous, current, next) plus a
/// parenthesis-depth counter; one parser is built per calculation. Chained
/// operators of the same precedence associate to the right because every
/// binary tail recurses into `parse_expression` for its right-hand side.
pub(crate) struct Parser {
    tokens: Vec<Token>,
    position: usize,
    previous: Option<Token>,
    current: Option<Token>,
    next: Option<Token>,
    parentheses_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let current = tokens.first().cloned();
        let next = tokens.get(1).cloned();

        Self {
            tokens,
            position: 0,
            previous: None,
            current,
            next,
            parentheses_depth: 0,
        }
    }

    /// Parses the whole token sequence into a single tree root. Everything
    /// must be consumed, except well-formed trailing redundant `)` tokens.
    pub fn parse(mut self) -> CalcResult<SyntaxNode> {
        let ast = self.parse_expression()?;
        self.skip_redundant_parentheses()?;

        if self.current.is_some() {
            return Err(ErrorKind::Syntax("expected end of input".into()));
        }

        ast.ok_or_else(|| ErrorKind::Syntax("expected an expression".into()))
    }

    fn parse_expression(&mut self) -> CalcResult<Option<SyntaxNode>> {
        let token = match self.current.clone() {
            Some(token) => token,
            None => return Ok(None),
        };

        match token.kind {
            TokenKind::Separator if token.text == "(" => self.parse_parenthesized().map(Some),
            TokenKind::Operator if token.text == "-" => self.parse_unary().map(Some),
            TokenKind::Operator => Err(ErrorKind::Syntax(
                "unexpected operator before a unary expression".into(),
            )),
            TokenKind::Identifier if token.text != "pi" => {
                if Function::from_name(&token.text).is_none() {
                    return Err(ErrorKind::Syntax(format!(
                        "{} is not a valid function",
                        token.text
                    )));
                }

                let identifier = SyntaxNode::Identifier { name: token.text };
                self.advance();
                self.parse_call(identifier).map(Some)
            }
            // Literal tokens and the symbolic constant; anything else is no match
            _ => self.parse_literal(),
        }
    }

    // A parenthesized binary expression chains onto a following operator as
    // its left operand; a parenthesized literal or call takes no tail.
    fn parse_parenthesized(&mut self) -> CalcResult<SyntaxNode> {
        self.advance();
        self.parentheses_depth += 1;

        let inner = match self.parse_expression()? {
            Some(expression) => expression,
            None => {
                return Err(ErrorKind::Syntax(
                    "expected an expression after an opening parenthesis".into(),
                ))
            }
        };

        if !self.consume(TokenKind::Separator, ")") {
            return Err(ErrorKind::Syntax("unclosed parentheses".into()));
        }
        self.parentheses_depth -= 1;

        if matches!(inner, SyntaxNode::Binary { .. }) {
            if let Some(token) = self.current.clone() {
                if token.kind == TokenKind::Operator {
                    let operator = Operator::from_symbol(&token.text)?;
                    self.advance();
                    let right = self.expect_expression()?;

                    return Ok(SyntaxNode::Binary {
                        operator,
                        left: Box::new(inner),
                        right: Box::new(right),
                    });
                }
            }
        }

        Ok(inner)
    }

    // Only `-` reaches this point. A literal whose following token is
    // another operator wraps just that literal, and the binary tail then
    // continues from the unary node instead of swallowing the rest of the
    // expression.
    fn parse_unary(&mut self) -> CalcResult<SyntaxNode> {
        self.advance();

        if let (Some(current), Some(next)) = (self.current.clone(), self.next.clone()) {
            if current.kind == TokenKind::Literal && next.kind == TokenKind::Operator {
                let operator = Operator::from_symbol(&next.text)?;
                let unary = SyntaxNode::Unary {
                    operator: Operator::Minus,
                    operand: Box::new(SyntaxNode::Literal { text: current.text }),
                };
                self.advance();
                self.advance();
                let right = self.expect_expression()?;

                return Ok(SyntaxNode::Binary {
                    operator,
                    left: Box::new(unary),
                    right: Box::new(right),
                });
            }
        }

        let operand = match self.parse_expression()? {
            Some(expression) => expression,
            None => {
                return Err(ErrorKind::Syntax(
                    "expected an expression after a unary operator".into(),
                ))
            }
        };

        Ok(SyntaxNode::Unary {
            operator: Operator::Minus,
            operand: Box::new(operand),
        })
    }

    fn parse_call(&mut self, identifier: SyntaxNode) -> CalcResult<SyntaxNode> {
        if !self.consume(TokenKind::Separator, "(") {
            return Err(ErrorKind::Syntax(
                "expected ( after function identifier".into(),
            ));
        }
        self.parentheses_depth += 1;

        let argument = match self.parse_expression()? {
            Some(expression) => expression,
            None => return Err(self.call_argument_error()),
        };

        if !self.consume(TokenKind::Separator, ")") {
            return Err(ErrorKind::Syntax(
                "expected ) after function arguments".into(),
            ));
        }
        self.parentheses_depth -= 1;

        let call = SyntaxNode::Call {
            identifier: Box::new(identifier),
            argument: Box::new(argument),
        };

        if let Some(token) = self.current.clone() {
            if token.kind == TokenKind::Operator {
                let operator = Operator::from_symbol(&token.text)?;
                self.advance();
                let right = self.expect_expression()?;

                return Ok(SyntaxNode::Binary {
                    operator,
                    left: Box::new(call),
                    right: Box::new(right),
                });
            }
        }

        Ok(call)
    }

    // Distinguishes empty parentheses from input that ran out before the
    // closing parenthesis and from arguments that are no expression at all.
    fn call_argument_error(&self) -> ErrorKind {
        let empty_parentheses = matches!(
            (&self.current, &self.previous),
            (Some(current), Some(previous))
                if current.is(TokenKind::Separator, ")") && previous.is(TokenKind::Separator, "(")
        );

        if empty_parentheses {
            ErrorKind::Syntax("expected at least 1 argument for a function call".into())
        } else if self.current.is_none() {
            ErrorKind::Syntax("expected ) after function arguments".into())
        } else {
            ErrorKind::Syntax("unable to parse function arguments".into())
        }
    }

    fn parse_literal(&mut self) -> CalcResult<Option<SyntaxNode>> {
        let token = match self.current.clone() {
            Some(token) => token,
            None => return Ok(None),
        };
        let is_literal = token.kind == TokenKind::Literal
            || (token.kind == TokenKind::Identifier && token.text == "pi");
        if !is_literal {
            return Ok(None);
        }

        let literal = SyntaxNode::Literal { text: token.text };

        match self.next.clone() {
            Some(next) if next.kind == TokenKind::Literal => Err(ErrorKind::Syntax(
                "invalid token, 2 literals in a row".into(),
            )),
            Some(next) if next.is(TokenKind::Separator, "(") => Err(ErrorKind::Syntax(
                "unexpected open parentheses immediately after a literal".into(),
            )),
            Some(next) if next.kind == TokenKind::Operator => {
                let operator = Operator::from_symbol(&next.text)?;
                self.advance();
                self.advance();
                let right = self.expect_expression()?;

                Ok(Some(SyntaxNode::Binary {
                    operator,
                    left: Box::new(literal),
                    right: Box::new(right),
                }))
            }
            _ => {
                self.advance();
                Ok(Some(literal))
            }
        }
    }

    // Trailing `)` tokens with no matching opener are tolerated once the
    // whole expression has been parsed, as long as nothing else follows.
    fn skip_redundant_parentheses(&mut self) -> CalcResult<()> {
        let at_closer = matches!(&self.current, Some(token) if token.is(TokenKind::Separator, ")"));
        if !at_closer || self.parentheses_depth != 0 {
            return Ok(());
        }

        let only_closers = self.tokens[self.position + 1..]
            .iter()
            .all(|token| token.is(TokenKind::Separator, ")"));
        if !only_closers {
            return Err(ErrorKind::Syntax("unexpected right parentheses".into()));
        }

        self.position = self.tokens.len();
        self.current = None;
        self.next = None;

        Ok(())
    }

    fn expect_expression(&mut self) -> CalcResult<SyntaxNode> {
        match self.parse_expression()? {
            Some(expression) => Ok(expression),
            None => Err(ErrorKind::Syntax(
                "expected an expression after an operator".into(),
            )),
        }
    }

    fn advance(&mut self) {
        self.previous = self.current.take();
        self.position += 1;
        self.current = self.tokens.get(self.position).cloned();
        self.next = self.tokens.get(self.position + 1).cloned();
    }

    fn consume(&mut self, kind: TokenKind, text: &str) -> bool {
        match &self.current {
            Some(token) if token.is(kind, text) => {
                self.advance();
                true
            }
            _ => false,
        }
    }
}
