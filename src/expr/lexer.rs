//! Tokenizer for the expression vocabulary.
//! - numbers   : decimal with optional fraction and exponent (`2`, `0.5`, `1e-6`)
//! - idents    : variable `x`, constants, function names
//! - operators : `+ - * / ^` plus parentheses and the argument comma

use super::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n)  => write!(f, "{n}"),
            Token::Ident(s)   => write!(f, "{s}"),
            Token::Plus       => write!(f, "+"),
            Token::Minus      => write!(f, "-"),
            Token::Star       => write!(f, "*"),
            Token::Slash      => write!(f, "/"),
            Token::Caret      => write!(f, "^"),
            Token::LParen     => write!(f, "("),
            Token::RParen     => write!(f, ")"),
            Token::Comma      => write!(f, ","),
        }
    }
}

/// Splits `text` into tokens, rejecting any character outside the vocabulary.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];
        match ch {
            c if c.is_whitespace() => pos += 1,
            '+' => { tokens.push(Token::Plus);   pos += 1 }
            '-' => { tokens.push(Token::Minus);  pos += 1 }
            '*' => { tokens.push(Token::Star);   pos += 1 }
            '/' => { tokens.push(Token::Slash);  pos += 1 }
            '^' => { tokens.push(Token::Caret);  pos += 1 }
            '(' => { tokens.push(Token::LParen); pos += 1 }
            ')' => { tokens.push(Token::RParen); pos += 1 }
            ',' => { tokens.push(Token::Comma);  pos += 1 }
            c if c.is_ascii_digit() || c == '.' => {
                let (token, next) = scan_number(&chars, pos)?;
                tokens.push(token);
                pos = next;
            }
            c if c.is_ascii_alphabetic() => {
                let start = pos;
                while pos < chars.len()
                    && (chars[pos].is_ascii_alphanumeric() || chars[pos] == '_')
                {
                    pos += 1;
                }
                tokens.push(Token::Ident(chars[start..pos].iter().collect()));
            }
            c => return Err(ParseError::UnexpectedChar { pos, ch: c }),
        }
    }

    Ok(tokens)
}

/// Scans one numeric literal starting at `start`.
/// An exponent suffix (`e`/`E` with optional sign) is consumed only when
/// followed by digits, so `2e` lexes as the number `2` and the ident `e`.
fn scan_number(chars: &[char], start: usize) -> Result<(Token, usize), ParseError> {
    let mut pos = start;
    while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
        pos += 1;
    }

    if pos < chars.len() && (chars[pos] == 'e' || chars[pos] == 'E') {
        let mut exp_end = pos + 1;
        if exp_end < chars.len() && (chars[exp_end] == '+' || chars[exp_end] == '-') {
            exp_end += 1;
        }
        if exp_end < chars.len() && chars[exp_end].is_ascii_digit() {
            pos = exp_end;
            while pos < chars.len() && chars[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }

    let lexeme: String = chars[start..pos].iter().collect();
    match lexeme.parse::<f64>() {
        Ok(n)  => Ok((Token::Number(n), pos)),
        Err(_) => Err(ParseError::BadNumber { lexeme }),
    }
}
