use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Turns the matched text into a token, or `None` for text that is skipped
/// (whitespace, comments).
pub type RegexHandler = fn(&str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer pattern must be a valid regex"),
            handler,
        }
    }
}

// Patterns are anchored and tried in order, so longer operators come first.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Integer)),
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^\"(?:[^\"\\\\]|\\\\.)*\"", string_handler),
        RegexPattern::new("^//[^\\n]*", skip_handler),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
    ];
}

/// Single-pass tokenizer over an owned source string.
///
/// Characters no pattern accepts come out as `Illegal` tokens so that the
/// parser, not the lexer, decides what to report.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return Token::eof();
            }

            let remainder = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (found.end(), (pattern.handler)(found.as_str())))
            });

            match matched {
                Some((length, token)) => {
                    self.pos += length;
                    if let Some(token) = token {
                        return token;
                    }
                }
                None => {
                    let ch = match remainder.chars().next() {
                        Some(ch) => ch,
                        None => return Token::eof(),
                    };
                    self.pos += ch.len_utf8();
                    return MK_TOKEN!(TokenKind::Illegal, ch.to_string());
                }
            }
        }
    }
}

fn skip_handler(_matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, matched))
}

fn string_handler(matched: &str) -> Option<Token> {
    let raw = &matched[1..matched.len() - 1];
    Some(MK_TOKEN!(TokenKind::String, unescape(raw)))
}

fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();
                while hex.len() < 2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            // Unknown escapes keep their backslash
            _ => result.push(ch),
        }
    }

    result
}

/// Tokenizes the whole source eagerly. The returned vector always ends with
/// exactly one `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
