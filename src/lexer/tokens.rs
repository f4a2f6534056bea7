use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("SunBhai", TokenKind::SunBhai);
        map.insert("BolBhai", TokenKind::BolBhai);
        map.insert("bool", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    // One kind for + - * /, the lexeme tells them apart
    BinaryOperator,
    Equals,

    GreaterThan,
    LessThan,

    // Reserved
    Let,
    Var,
    Const,
    If,
    Elif,
    Else,
    While,
    For,
    SunBhai,
    BolBhai,
    Bool,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub label: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {},\nlabel: {}}}",
            self.kind, self.value, self.label
        )
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Number,
            TokenKind::Identifier,
            TokenKind::BinaryOperator,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
