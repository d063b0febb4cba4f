use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, FnExpr, IfExpr, NumberExpr, PrefixExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose operators must outrank `bp`.
///
/// Invokes the NUD rule for the current token, then folds LED rules while
/// the lookahead operator binds strictly tighter than `bp`. On return the
/// current token is the last token of the parsed expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.curr_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixRule {
                token: parser.curr_token().value.clone(),
            },
            parser.curr_token().span,
        ));
    };

    let mut left = nud(parser)?;

    // While a LED exists for the lookahead token and it outranks bp,
    // continue folding into the lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let peek_kind = parser.peek_token_kind();
        let Some(led) = parser.get_led_lookup().get(&peek_kind).copied() else {
            break;
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.curr_token().clone();
    let span = token.span;

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expr::Number(NumberExpr { token, value, span })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    literal: token.value,
                },
                span,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr {
            value: token.value.clone(),
            token,
            span,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
            span,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixRule { token: token.value },
            span,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.curr_token().clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span::new(operator.span.start, right.get_span().end),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.curr_token().clone();

    parser.advance();
    // Parsing the rhs at the operator's own power keeps equal-precedence
    // chains left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span::new(left.get_span().start, right.get_span().end),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// Parses a parenthesized sub-expression. The parentheses exist only to
/// override precedence; no node is produced for them.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start_token = parser.curr_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        span: Span::new(start_token.span.start, parser.curr_token().span.end),
        token: start_token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start_token = parser.curr_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Fn(FnExpr {
        span: Span::new(start_token.span.start, parser.curr_token().span.end),
        token: start_token,
        parameters,
        body,
    }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<SymbolExpr>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.advance();
    parameters.push(parse_fn_parameter(parser)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        parameters.push(parse_fn_parameter(parser)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

fn parse_fn_parameter(parser: &mut Parser) -> Result<SymbolExpr, Error> {
    let token = parser.curr_token().clone();
    if token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Identifier,
                found: token.kind,
            },
            token.span,
        ));
    }

    Ok(SymbolExpr {
        value: token.value.clone(),
        span: token.span,
        token,
    })
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let paren_token = parser.curr_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        span: Span::new(left.get_span().start, parser.curr_token().span.end),
        token: paren_token,
        callee: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(arguments)
}
