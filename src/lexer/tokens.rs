use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Integer,
    String,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Plus,
    Dash,
    Slash,
    Star,

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// The canonical name of the kind, as it appears in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Fn => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EOF, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Short form used by the `--tokens` dump: the kind, plus the literal for
    /// tokens whose text is not implied by their kind.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Illegal,
        ]) {
            format!("{} ({})", self.kind, self.literal)
        } else {
            format!("{}", self.kind)
        }
    }
}

/// Pull-based supplier of tokens.
///
/// Implementations hand out one token per call, in source order, and keep
/// returning an `EOF` token once the input is exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Adapts an already materialised sequence of tokens into a [`TokenSource`].
pub struct TokenStream<I: Iterator<Item = Token>> {
    tokens: I,
    finished: bool,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(tokens: T) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            finished: false,
        }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::eof();
        }

        match self.tokens.next() {
            Some(token) => {
                if token.is(TokenKind::EOF) {
                    self.finished = true;
                }
                token
            }
            None => {
                self.finished = true;
                Token::eof()
            }
        }
    }
}
