use super::context::{span_through, ParserContext};
use super::precedence::Precedence;
use crate::tokenizer::Token;
use ember_ast::{Block, ExpressionStatement, Let, Statement};

impl ParserContext<'_> {
    /// Parses either a `let` binding or a bare expression statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr.token {
            Token::Let => self.parse_let_statement().map(Statement::Let),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Let> {
        let start = self.curr.span;
        self.bump(); // `let`
        let name = self.expect_ident()?;
        self.expect(&Token::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat(&Token::Semicolon);
        Some(Let { span: span_through(start, &value), name, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let start = self.curr.span;
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.eat(&Token::Semicolon);
        Some(ExpressionStatement { span: span_through(start, &expression), expression })
    }

    /// Parses `{ stmt* }`. A missing closing brace records an
    /// `UnclosedDelimiter` error.
    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let start = self.expect(&Token::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(&Token::RBrace) && !self.check(&Token::Eof) {
            let before = self.curr.span;
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None if self.curr.span == before => self.bump(),
                None => {}
            }
        }
        let end = if self.check(&Token::RBrace) {
            let span = self.curr.span;
            self.bump();
            span
        } else {
            self.errors.push(ember_errors::ParserError::UnclosedDelimiter { span: self.curr.span, delimiter: "}" });
            self.curr.span
        };
        Some(Block { statements, span: start.merge(end) })
    }
}
