use super::context::{span_through, ParserContext};
use super::precedence::{precedence_of, Precedence};
use crate::tokenizer::Token;
use ember_ast::{
    ArrayLiteral, Assign, Boolean, Call, Expression, FunctionLiteral, HashLiteral, If, Index, Infix,
    InfixOperation, Node, Number, Prefix, PrefixOperation, Return, StringLiteral,
};
use ember_errors::ParserError;
use ember_span::Span;

impl ParserContext<'_> {
    /// The Pratt loop: parse a prefix form, then keep folding infix
    /// operators in as long as their precedence beats `min_prec`.
    pub(crate) fn parse_expression(&mut self, min_prec: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;
        while !self.check(&Token::Semicolon) && min_prec < precedence_of(&self.curr.token) {
            left = self.parse_infix(left)?;
        }
        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.curr.token.clone() {
            Token::Ident(name) => {
                let span = self.curr.span;
                self.bump();
                Some(Expression::Identifier(ember_ast::Identifier::new(name, span)))
            }
            Token::Int(text) => self.parse_number(text),
            Token::StringLit(value) => {
                let span = self.curr.span;
                self.bump();
                Some(Expression::StringLiteral(StringLiteral { value, span }))
            }
            Token::True => {
                let span = self.curr.span;
                self.bump();
                Some(Expression::Boolean(Boolean { value: true, span }))
            }
            Token::False => {
                let span = self.curr.span;
                self.bump();
                Some(Expression::Boolean(Boolean { value: false, span }))
            }
            Token::Bang | Token::Minus => self.parse_prefix_operator(),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::Return => self.parse_return_expression(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            other => {
                self.errors.push(ParserError::NoPrefixParselet { span: self.curr.span, token: other.to_string() });
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.curr.token {
            Token::LParen => self.parse_call_expression(left),
            Token::LBracket => self.parse_index_expression(left),
            Token::Assign => self.parse_assign_expression(left),
            Token::Plus | Token::Minus | Token::Asterisk | Token::Slash | Token::Lt | Token::Gt | Token::Eq | Token::NotEq => {
                self.parse_infix_expression(left)
            }
            ref other => {
                self.errors.push(ParserError::NoInfixParselet { span: self.curr.span, token: other.to_string() });
                None
            }
        }
    }

    fn parse_number(&mut self, text: String) -> Option<Expression> {
        let span = self.curr.span;
        match text.parse::<i64>() {
            Ok(value) => {
                self.bump();
                Some(Expression::Number(Number { value, span }))
            }
            Err(_) => {
                self.errors.push(ParserError::IntegerOverflow { span, text });
                self.bump();
                None
            }
        }
    }

    fn parse_prefix_operator(&mut self) -> Option<Expression> {
        let op_span = self.curr.span;
        let operation = match self.curr.token {
            Token::Bang => PrefixOperation::Not,
            Token::Minus => PrefixOperation::Negate,
            _ => unreachable!("parse_prefix dispatched only Bang/Minus here"),
        };
        self.bump();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(Prefix { span: span_through(op_span, &right), operation, right: Box::new(right) }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.bump(); // `(`
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RParen)?;
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let start = self.curr.span;
        self.bump(); // `if`
        let condition = self.parse_expression(Precedence::Lowest)?;
        let consequence = self.parse_block()?;
        let mut end = consequence.span;
        let alternative = if self.eat(&Token::Else) {
            let alt = self.parse_block()?;
            end = alt.span;
            Some(alt)
        } else {
            None
        };
        Some(Expression::If(If { condition: Box::new(condition), consequence, alternative, span: start.merge(end) }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let start = self.curr.span;
        self.bump(); // `fn`
        self.expect(&Token::LParen)?;
        let mut parameters = Vec::new();
        if !self.check(&Token::RParen) {
            loop {
                parameters.push(self.expect_ident()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect(&Token::RParen)?;
        let body = self.parse_block()?;
        Some(Expression::FunctionLiteral(FunctionLiteral { span: start.merge(body.span), parameters, body }))
    }

    fn parse_return_expression(&mut self) -> Option<Expression> {
        let start = self.curr.span;
        self.bump(); // `return`
        let value = self.parse_expression(Precedence::Lowest)?;
        Some(Expression::Return(Return { span: span_through(start, &value), value: Box::new(value) }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let start = self.curr.span;
        self.bump(); // `[`
        let (elements, end) = self.parse_expression_list(Token::RBracket)?;
        Some(Expression::ArrayLiteral(ArrayLiteral { elements, span: start.merge(end) }))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let start = self.curr.span;
        self.bump(); // `{`
        let mut pairs = Vec::new();
        let end = if self.check(&Token::RBrace) {
            let span = self.curr.span;
            self.bump();
            span
        } else {
            loop {
                let key = self.parse_expression(Precedence::Lowest)?;
                self.expect(&Token::Colon)?;
                let value = self.parse_expression(Precedence::Lowest)?;
                pairs.push((key, value));
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
            self.expect(&Token::RBrace)?
        };
        Some(Expression::HashLiteral(HashLiteral { pairs, span: start.merge(end) }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operation = match self.curr.token {
            Token::Plus => InfixOperation::Add,
            Token::Minus => InfixOperation::Subtract,
            Token::Asterisk => InfixOperation::Multiply,
            Token::Slash => InfixOperation::Divide,
            Token::Lt => InfixOperation::LessThan,
            Token::Gt => InfixOperation::GreaterThan,
            Token::Eq => InfixOperation::Equal,
            Token::NotEq => InfixOperation::NotEqual,
            _ => unreachable!("parse_infix dispatched only binary operator tokens here"),
        };
        let prec = precedence_of(&self.curr.token);
        self.bump();
        let right = self.parse_expression(prec)?;
        let span = left.span().merge(right.span());
        Some(Expression::Infix(Infix { operation, left: Box::new(left), right: Box::new(right), span }))
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        self.bump(); // `(`
        let (arguments, end) = self.parse_expression_list(Token::RParen)?;
        let span = function.span().merge(end);
        Some(Expression::Call(Call { function: Box::new(function), arguments, span }))
    }

    fn parse_index_expression(&mut self, container: Expression) -> Option<Expression> {
        self.bump(); // `[`
        let index = self.parse_expression(Precedence::Lowest)?;
        let end = self.expect(&Token::RBracket)?;
        let span = container.span().merge(end);
        Some(Expression::Index(Index { container: Box::new(container), index: Box::new(index), span }))
    }

    /// The LHS of `=` must be an `Index` expression (`h["k"] = v`); bare
    /// identifiers are never a valid assignment target.
    fn parse_assign_expression(&mut self, target: Expression) -> Option<Expression> {
        self.bump(); // `=`
        if !matches!(target, Expression::Index(_)) {
            self.errors.push(ParserError::InvalidAssignTarget { span: target.span() });
            self.parse_expression(Precedence::Assign);
            return None;
        }
        let value = self.parse_expression(Precedence::Assign)?;
        let span = target.span().merge(value.span());
        Some(Expression::Assign(Assign { target: Box::new(target), value: Box::new(value), span }))
    }

    /// Parses a comma-separated expression list up to (and consuming)
    /// `closing`. Returns the parsed items and the span of `closing`.
    fn parse_expression_list(&mut self, closing: Token) -> Option<(Vec<Expression>, Span)> {
        if self.check(&closing) {
            let span = self.curr.span;
            self.bump();
            return Some((Vec::new(), span));
        }
        let mut items = vec![self.parse_expression(Precedence::Lowest)?];
        while self.eat(&Token::Comma) {
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        let end = self.expect(&closing)?;
        Some((items, end))
    }
}
