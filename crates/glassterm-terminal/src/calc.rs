//! Arithmetic-only expression evaluator behind `calc`.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! There are no identifiers, calls, or assignments, so nothing a user types
//! can do more than compute a number.

use std::fmt;

/// Maximum nesting depth for parentheses and unary signs.
const MAX_DEPTH: usize = 64;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("malformed number: {0}")]
    BadNumber(String),
    #[error("unexpected token: {0}")]
    UnexpectedToken(Token),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("missing closing parenthesis")]
    UnclosedParen,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not finite")]
    NotFinite,
    #[error("expression too deeply nested")]
    TooDeep,
}

/// A lexical token of the calculator language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(n) => write!(f, "{n}"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// Evaluate `input` to a finite number.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr(0)?;
    if let Some(tok) = parser.peek() {
        return Err(CalcError::UnexpectedToken(tok));
    }
    // `calc` prints only finite numbers; Infinity and NaN are rejected.
    if !value.is_finite() {
        return Err(CalcError::NotFinite);
    }
    Ok(value)
}

/// Render a result: whole numbers without a fractional part.
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            },
            c if c.is_ascii_digit() || c == '.' => {
                let mut num = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        num.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = num.parse().map_err(|_| CalcError::BadNumber(num))?;
                tokens.push(Token::Num(value));
            },
            _ => {
                let tok = match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    other => return Err(CalcError::UnexpectedChar(other)),
                };
                tokens.push(tok);
                chars.next();
            },
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expr(&mut self, depth: usize) -> Result<f64, CalcError> {
        let mut left = self.term(depth)?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let right = self.term(depth)?;
            if op == Token::Plus {
                left += right;
            } else {
                left -= right;
            }
        }
        Ok(left)
    }

    fn term(&mut self, depth: usize) -> Result<f64, CalcError> {
        let mut left = self.unary(depth)?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let right = self.unary(depth)?;
            if op == Token::Star {
                left *= right;
            } else {
                // An error rather than an infinite result.
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                left /= right;
            }
        }
        Ok(left)
    }

    fn unary(&mut self, depth: usize) -> Result<f64, CalcError> {
        if depth >= MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.unary(depth + 1)?)
            },
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary(depth + 1)
            },
            _ => self.primary(depth),
        }
    }

    fn primary(&mut self, depth: usize) -> Result<f64, CalcError> {
        match self.bump() {
            Some(Token::Num(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.expr(depth + 1)?;
                match self.bump() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(CalcError::UnclosedParen),
                }
            },
            Some(tok) => Err(CalcError::UnexpectedToken(tok)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}
