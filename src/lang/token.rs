use crate::mach::{Opcode, Val};
use num_bigint::BigInt;
use std::collections::HashMap;

/// Symbols that classify as `Token::Operator`.
pub const OPERATORS: &[(&str, Opcode)] = &[
    ("+", Opcode::Plus),
    ("-", Opcode::Minus),
    ("*", Opcode::Star),
    ("/", Opcode::Slash),
    (".", Opcode::Dot),
];

/// Names that classify as `Token::Word`. Matched without regard to ASCII case.
pub const WORDS: &[(&str, Opcode)] = &[
    (".s", Opcode::DotS),
    ("dup", Opcode::Dup),
    ("drop", Opcode::Drop),
    ("swap", Opcode::Swap),
    ("over", Opcode::Over),
    ("rot", Opcode::Rot),
    ("negate", Opcode::Negate),
    ("abs", Opcode::Abs),
    ("depth", Opcode::Depth),
    ("clear", Opcode::Clear),
    ("words", Opcode::Words),
];

thread_local!(
    static STRING_TO_OPERATOR: HashMap<&'static str, Opcode> = OPERATORS.iter().cloned().collect();
    static STRING_TO_WORD: HashMap<&'static str, Opcode> = WORDS.iter().cloned().collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(Val),
    Operator(Opcode),
    Word(Opcode),
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Operator,
    Word,
    Unknown,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Word(_) => TokenKind::Word,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Token::Operator(op) | Token::Word(op) => Some(*op),
            Token::Number(_) | Token::Unknown(_) => None,
        }
    }
}

fn spelling(table: &[(&'static str, Opcode)], op: Opcode) -> Option<&'static str> {
    table.iter().find(|(_, o)| *o == op).map(|(s, _)| *s)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Operator(op) => match spelling(OPERATORS, *op) {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "{}", op),
            },
            Word(op) => match spelling(WORDS, *op) {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "{}", op),
            },
            Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// ## Token classifier registry
///
/// A word is classified by the first entry, in ascending `priority`,
/// whose predicate accepts it. Numbers come first so that `-5` is a
/// literal and not the `-` operator followed by junk. `Unknown` is last
/// and accepts everything, which makes classification total.
///
/// A new token kind is a new `Token` variant plus an entry here.

pub struct Classifier {
    pub priority: u8,
    pub kind: TokenKind,
    predicate: fn(&str) -> Option<Token>,
}

impl Classifier {
    pub fn classify(&self, word: &str) -> Option<Token> {
        (self.predicate)(word)
    }
}

pub static CLASSIFIERS: [Classifier; 4] = [
    Classifier {
        priority: 10,
        kind: TokenKind::Number,
        predicate: number,
    },
    Classifier {
        priority: 20,
        kind: TokenKind::Operator,
        predicate: operator,
    },
    Classifier {
        priority: 30,
        kind: TokenKind::Word,
        predicate: word,
    },
    Classifier {
        priority: u8::MAX,
        kind: TokenKind::Unknown,
        predicate: unknown,
    },
];

pub fn classify(word: &str) -> Token {
    CLASSIFIERS
        .iter()
        .find_map(|c| c.classify(word))
        .unwrap_or_else(|| Token::Unknown(word.to_string()))
}

fn number(s: &str) -> Option<Token> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = digits.parse::<BigInt>().ok()?;
    let n = if negative { -n } else { n };
    Some(Token::Number(Val::from_integer(n)))
}

fn operator(s: &str) -> Option<Token> {
    STRING_TO_OPERATOR.with(|sto| sto.get(s).map(|op| Token::Operator(*op)))
}

fn word(s: &str) -> Option<Token> {
    let s = s.to_ascii_lowercase();
    STRING_TO_WORD.with(|stw| stw.get(s.as_str()).map(|op| Token::Word(*op)))
}

fn unknown(s: &str) -> Option<Token> {
    Some(Token::Unknown(s.to_string()))
}
