//! Maps a document offset to the innermost AST node enclosing it, for
//! `textDocument/hover`. Spans are half-open byte ranges, so "encloses" is a
//! plain `start <= offset < end` containment check walked depth-first.

use ember_ast::{Block, Expression, Node, Program, Statement};
use ember_span::Span;

fn contains(span: Span, offset: u32) -> bool {
    span.start <= offset && offset < span.end
}

/// Converts a zero-based `(line, character)` position into a byte offset
/// into `text`, treating `character` as a UTF-8 byte count within the line.
/// LSP positions are UTF-16 code units; this frontend only targets ASCII
/// source text (per the core lexer's byte-level grammar), so the two
/// coincide for every character this language can actually produce.
pub fn offset_of(text: &str, line: u32, character: u32) -> Option<u32> {
    let mut lines = text.split_inclusive('\n');
    let mut base = 0u32;
    for _ in 0..line {
        base += lines.next()?.len() as u32;
    }
    let line_text = lines.next().unwrap_or("");
    let line_text = line_text.strip_suffix('\n').unwrap_or(line_text).strip_suffix('\r').unwrap_or(line_text);
    Some(base + character.min(line_text.len() as u32))
}

pub fn innermost_at(program: &Program, offset: u32) -> Option<String> {
    let mut best: Option<String> = None;
    for statement in &program.statements {
        visit_statement(statement, offset, &mut best);
    }
    best
}

fn visit_statement(statement: &Statement, offset: u32, best: &mut Option<String>) {
    if !contains(statement.span(), offset) {
        return;
    }
    *best = Some(statement.to_string());
    match statement {
        Statement::Let(stmt) => visit_expression(&stmt.value, offset, best),
        Statement::Expression(stmt) => visit_expression(&stmt.expression, offset, best),
        Statement::Block(block) => visit_block(block, offset, best),
    }
}

fn visit_block(block: &Block, offset: u32, best: &mut Option<String>) {
    if !contains(block.span(), offset) {
        return;
    }
    *best = Some(block.to_string());
    for statement in &block.statements {
        visit_statement(statement, offset, best);
    }
}

fn visit_expression(expression: &Expression, offset: u32, best: &mut Option<String>) {
    if !contains(expression.span(), offset) {
        return;
    }
    *best = Some(expression.to_string());
    match expression {
        Expression::Prefix(n) => visit_expression(&n.right, offset, best),
        Expression::Infix(n) => {
            visit_expression(&n.left, offset, best);
            visit_expression(&n.right, offset, best);
        }
        Expression::If(n) => {
            visit_expression(&n.condition, offset, best);
            visit_block(&n.consequence, offset, best);
            if let Some(alt) = &n.alternative {
                visit_block(alt, offset, best);
            }
        }
        Expression::FunctionLiteral(n) => visit_block(&n.body, offset, best),
        Expression::Call(n) => {
            visit_expression(&n.function, offset, best);
            for arg in &n.arguments {
                visit_expression(arg, offset, best);
            }
        }
        Expression::Return(n) => visit_expression(&n.value, offset, best),
        Expression::ArrayLiteral(n) => {
            for element in &n.elements {
                visit_expression(element, offset, best);
            }
        }
        Expression::Index(n) => {
            visit_expression(&n.container, offset, best);
            visit_expression(&n.index, offset, best);
        }
        Expression::HashLiteral(n) => {
            for (key, value) in &n.pairs {
                visit_expression(key, offset, best);
                visit_expression(value, offset, best);
            }
        }
        Expression::Assign(n) => {
            visit_expression(&n.target, offset, best);
            visit_expression(&n.value, offset, best);
        }
        Expression::Identifier(_) | Expression::Number(_) | Expression::Boolean(_) | Expression::StringLiteral(_) => {}
    }
}
