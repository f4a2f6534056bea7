use std::rc::Rc;

use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            // Classification priority: structural, operator, equals,
            // relational, digit run, alpha run, skippables. The classes are
            // disjoint, so only the boundary rules observe the order.
            patterns: vec![
                RegexPattern { regex: Regex::new("[({]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "OpenParen")},
                RegexPattern { regex: Regex::new("[)}]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, "CloseParen")},
                RegexPattern { regex: Regex::new("[+*/-]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BinaryOperator, "BinaryOperator")},
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "EqualOperator")},
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThan, "GreaterThan")},
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThan, "LessThan")},
                RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler},
                RegexPattern { regex: Regex::new("[a-zA-Z]+").unwrap(), handler: symbol_handler},
                // Semicolon is whitespace in this language, not a terminator
                RegexPattern { regex: Regex::new("[ \t\n;]+").unwrap(), handler: skip_handler},
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(TokenKind::Number, matched.clone(), String::from("integer"), Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)) }));
    lexer.advance_n(matched.len() as i32);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let span = Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)) };

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value.clone(), String::from("reserved"), span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value.clone(), String::from("variable"), span));
    }

    lexer.advance_n(value.len() as i32);
}

/// Tokenizes the complete source text in one left-to-right pass.
///
/// Returns the ordered token sequence, or an error identifying the first
/// character that matches no classification rule. No partial token list is
/// returned on the error path; the caller decides whether to halt.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let matched = lex
            .patterns
            .iter()
            .find(|pattern| {
                let match_here = pattern.regex.find(lex.remainder());
                match_here.is_some() && match_here.unwrap().start() == 0
            })
            .cloned();

        match matched {
            Some(pattern) => (pattern.handler)(&mut lex, pattern.regex),
            None => {
                let character = lex.at();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character, code_point: character as u32 },
                    Position(lex.pos as u32, Rc::clone(&lex.file)),
                ));
            }
        }
    }

    Ok(lex.tokens)
}
