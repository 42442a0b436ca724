/// ## Word table keys
///
/// Every word the interpreter can execute resolves to one of these.
/// Stack effects are written `( before -- after )` with the top on the right.
///
/// Spellings live with the tokens, behavior lives in the word table.
/// An opcode that has no behavior registered executes as an undefined word.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    // *** Arithmetic
    /// `( b a -- b+a )`
    Plus,
    /// `( b a -- b-a )`
    Minus,
    /// `( b a -- b*a )`
    Star,
    /// `( b a -- b/a )` Exact division. Both operands are consumed
    /// even when `a` is zero.
    Slash,
    /// `( a -- -a )`
    Negate,
    /// `( a -- |a| )`
    Abs,

    // *** Inspection
    /// `( a -- )` Print `a`.
    Dot,
    /// `( -- )` Print the whole stack without consuming it.
    DotS,
    /// `( -- n )`
    Depth,
    /// `( -- )` Print every known word.
    Words,

    // *** Stack manipulation
    /// `( a -- a a )`
    Dup,
    /// `( a -- )`
    Drop,
    /// `( a b -- b a )`
    Swap,
    /// `( a b -- a b a )`
    Over,
    /// `( a b c -- b c a )`
    Rot,
    /// `( ... -- )`
    Clear,
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Plus => write!(f, "plus"),
            Minus => write!(f, "minus"),
            Star => write!(f, "star"),
            Slash => write!(f, "slash"),
            Negate => write!(f, "negate"),
            Abs => write!(f, "abs"),
            Dot => write!(f, "dot"),
            DotS => write!(f, "dotS"),
            Depth => write!(f, "depth"),
            Words => write!(f, "words"),
            Dup => write!(f, "dup"),
            Drop => write!(f, "drop"),
            Swap => write!(f, "swap"),
            Over => write!(f, "over"),
            Rot => write!(f, "rot"),
            Clear => write!(f, "clear"),
        }
    }
}
