use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.curr_token_kind()).copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.curr_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.curr_token().clone();
    let name = SymbolExpr {
        value: name_token.value.clone(),
        span: name_token.span,
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    // Trailing semicolons are optional at end of input
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: Span::new(start_token.span.start, parser.curr_token().span.end),
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.curr_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Return(ReturnStmt {
        span: Span::new(start_token.span.start, parser.curr_token().span.end),
        token: start_token,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span::new(expression.get_span().start, parser.curr_token().span.end),
        expression,
    }))
}

/// Parses a braced statement sequence. The current token must be the
/// opening brace; on success the current token is the closing brace.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start_token = parser.curr_token().clone();
    parser.advance();

    let mut body = Vec::new();
    while !parser.curr_token_is(TokenKind::CloseCurly) && !parser.curr_token_is(TokenKind::Eof) {
        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    if !parser.curr_token_is(TokenKind::CloseCurly) {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::CloseCurly,
                found: parser.curr_token_kind(),
            },
            parser.curr_token().span,
        ));
    }

    Ok(BlockStmt {
        span: Span::new(start_token.span.start, parser.curr_token().span.end),
        token: start_token,
        body,
    })
}
