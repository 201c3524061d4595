use crate::tokenizer::{Lexer, SpannedToken, Token};
use ember_ast::{Identifier, Node, Program};
use ember_errors::ParserError;
use ember_span::Span;

/// Drives the token stream with one token of lookahead (`curr`, `next`),
/// pulling lazily from the [`Lexer`] rather than materializing the whole
/// token vector up front.
pub struct ParserContext<'a> {
    lexer: Lexer<'a>,
    pub(crate) curr: SpannedToken,
    pub(crate) next: SpannedToken,
    pub(crate) errors: Vec<ParserError>,
}

impl<'a> ParserContext<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let curr = lexer.next_token();
        let next = lexer.next_token();
        Self { lexer, curr, next, errors: Vec::new() }
    }

    pub(crate) fn bump(&mut self) {
        self.curr = std::mem::replace(&mut self.next, self.lexer.next_token());
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        &self.curr.token == token
    }

    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Eats `token`, returning its span, or records an `UnexpectedToken`
    /// error and returns `None`.
    pub(crate) fn expect(&mut self, token: &Token) -> Option<Span> {
        if self.check(token) {
            let span = self.curr.span;
            self.bump();
            Some(span)
        } else {
            self.errors.push(ParserError::UnexpectedToken {
                span: self.curr.span,
                expected: token.to_string(),
                got: self.curr.token.to_string(),
            });
            None
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Option<Identifier> {
        if let Token::Ident(name) = self.curr.token.clone() {
            let span = self.curr.span;
            self.bump();
            Some(Identifier::new(name, span))
        } else {
            self.errors.push(ParserError::UnexpectedToken {
                span: self.curr.span,
                expected: "identifier".into(),
                got: self.curr.token.to_string(),
            });
            None
        }
    }

    /// Parses the whole token stream into a (possibly partial) [`Program`].
    /// A statement that fails to parse has already recorded its error; if
    /// the cursor made no progress attempting it, `bump` once to guarantee
    /// forward progress instead of looping forever on the same token.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.check(&Token::Eof) {
            let before = self.curr.span;
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None if self.curr.span == before => self.bump(),
                None => {}
            }
        }
        Program::new(statements)
    }
}

/// Used by statement/expression parsing to fold two spans into one that
/// covers both; shorthand since most node constructors need exactly this.
pub(crate) fn span_through(start: Span, node: &impl Node) -> Span {
    start.merge(node.span())
}
