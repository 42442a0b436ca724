use super::Column;

/// ## Interpreter errors
///
/// Every failure a line of user input can cause is one of these codes.
/// Errors are raised at the failure site, travel back through `?`,
/// and are only caught where a whole line is executed.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    column: Column,
    word: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $word:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).word($word)
    };
    ($err:ident, ..$col:expr; $word:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .word($word)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            word: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    /// The text of the word that failed, when known.
    pub fn failed_word(&self) -> Option<&str> {
        if self.word.is_empty() {
            None
        } else {
            Some(&self.word)
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn word(self, word: &str) -> Error {
        debug_assert!(self.word.is_empty());
        Error {
            word: word.to_string(),
            ..self
        }
    }

    pub fn is_located(&self) -> bool {
        self.column != (0..0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Undefined word")]
    UndefinedWord,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {}", self.code)?;
        if self.is_located() {
            write!(f, " ({}..{})", self.column.start, self.column.end)?;
        }
        if !self.word.is_empty() {
            write!(f, "; {}", self.word)?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(error!(StackUnderflow).to_string(), "Stack underflow");
        assert_eq!(error!(DivisionByZero).to_string(), "Division by zero");
        assert_eq!(error!(UndefinedWord).to_string(), "Undefined word");
    }

    #[test]
    fn test_context_stays_out_of_display() {
        let e = error!(UndefinedWord, ..&(4..7); "foo");
        assert_eq!(e.to_string(), "Undefined word");
        assert_eq!(e.column(), &(4..7));
        assert_eq!(e.failed_word(), Some("foo"));
        assert_eq!(format!("{:?}", e), "Error { Undefined word (4..7); foo }");
    }

    #[test]
    fn test_unlocated() {
        let e = error!(StackUnderflow);
        assert!(!e.is_located());
        assert_eq!(e.failed_word(), None);
        assert_eq!(e.code(), ErrorCode::StackUnderflow);
    }
}
