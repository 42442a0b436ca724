use super::{Opcode, Stack, Val, WordTable};
use crate::error;
use crate::lang::{lex_columns, Error, Token};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Shown after a line that ran every token.
pub const OK: &str = "ok";

/// ## Interpreter session
///
/// One stack and one word table live for the whole session.
/// Each call to `execute_line` runs the tokens of one line in order and
/// stops at the first error. Stack changes made before the error stay.

pub struct Runtime {
    stack: Stack<Val>,
    words: WordTable,
    output: String,
    last_error: Option<Error>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(WordTable::default())
    }
}

impl Runtime {
    pub fn new(words: WordTable) -> Runtime {
        Runtime {
            stack: Stack::new(),
            words,
            output: String::new(),
            last_error: None,
        }
    }

    /// Run one line and return the text to display for it.
    pub fn execute_line(&mut self, line: &str) -> String {
        self.output.clear();
        self.last_error = None;
        let tokens = lex_columns(line);
        debug!(line, tokens = tokens.len(), "execute line");
        let mut failure = None;
        for (column, token) in tokens {
            if let Err(error) = self.dispatch(token) {
                failure = Some(error.in_column(&column).word(&line[column.clone()]));
                break;
            }
        }
        match failure {
            None => self.output.push_str(OK),
            Some(error) => {
                debug!(?error, depth = self.stack.len(), "line aborted");
                self.output.push_str(&error.to_string());
                self.last_error = Some(error);
            }
        }
        self.output.clone()
    }

    /// Apply one token to the session.
    pub fn dispatch(&mut self, token: Token) -> Result<()> {
        debug!(%token, "dispatch");
        match token {
            Token::Number(val) => {
                self.stack.push(val);
                Ok(())
            }
            Token::Operator(op) | Token::Word(op) => self.execute(op),
            Token::Unknown(_) => Err(error!(UndefinedWord)),
        }
    }

    /// Run the behavior registered for `op`.
    pub fn execute(&mut self, op: Opcode) -> Result<()> {
        match self.words.lookup(op) {
            Some(behavior) => behavior(self),
            None => Err(error!(UndefinedWord)),
        }
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn words(&self) -> &WordTable {
        &self.words
    }

    /// Display text of the most recent line.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The error that stopped the most recent line, if it stopped.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub(super) fn stack_mut(&mut self) -> &mut Stack<Val> {
        &mut self.stack
    }

    pub(super) fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }
}
