//! Recursive-descent parser over the token stream.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr   := term   (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := '-' factor | power
//! power  := atom ('^' factor)?            right-associative
//! atom   := number | 'x' | 'pi' | 'e'
//!         | func '(' expr (',' expr)* ')'
//!         | '(' expr ')'
//! ```
//!
//! `^` binds tighter than unary minus, so `-x^2` parses as `-(x^2)` while
//! `2^-3` keeps the negated exponent.

use super::ast::{Ast, BinOp, Func};
use super::lexer::Token;
use super::ParseError;

pub(crate) fn parse(tokens: &[Token]) -> Result<Ast, ParseError> {
    let mut parser = Parser { tokens, pos: 0 };
    let ast = parser.expr()?;
    match parser.peek() {
        None        => Ok(ast),
        Some(token) => Err(ParseError::UnexpectedToken { got: token.to_string() }),
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos:    usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&'t Token, ParseError> {
        let token = self.tokens.get(self.pos).ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, want: &Token) -> Result<(), ParseError> {
        let token = self.next()?;
        if token == want {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { got: token.to_string() })
        }
    }

    fn expr(&mut self) -> Result<Ast, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus)  => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Ast::Bin(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Ast, ParseError> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star)  => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Ast::Bin(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn factor(&mut self) -> Result<Ast, ParseError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            let inner = self.factor()?;
            return Ok(Ast::Neg(Box::new(inner)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Ast, ParseError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.pos += 1;
            let exponent = self.factor()?;
            return Ok(Ast::Bin(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Ast, ParseError> {
        match self.next()? {
            Token::Number(n) => Ok(Ast::Num(*n)),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(name) => self.ident(name),
            token => Err(ParseError::UnexpectedToken { got: token.to_string() }),
        }
    }

    fn ident(&mut self, name: &str) -> Result<Ast, ParseError> {
        match name {
            "x"  => return Ok(Ast::Var),
            "pi" => return Ok(Ast::Num(std::f64::consts::PI)),
            "e"  => return Ok(Ast::Num(std::f64::consts::E)),
            _    => {}
        }

        let func = Func::from_name(name)
            .ok_or_else(|| ParseError::UnknownIdentifier { name: name.to_string() })?;

        self.expect(&Token::LParen)?;
        let mut args = vec![self.expr()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.pos += 1;
            args.push(self.expr()?);
        }
        self.expect(&Token::RParen)?;

        if args.len() != func.arity() {
            return Err(ParseError::WrongArity {
                name:     func.name(),
                expected: func.arity(),
                got:      args.len(),
            });
        }
        Ok(Ast::Call(func, args))
    }
}
