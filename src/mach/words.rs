use super::{Opcode, Operation, Runtime, Val};
use crate::lang::{token, Error};
use num_bigint::BigInt;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Native code behind an opcode.
pub type Behavior = fn(&mut Runtime) -> Result<()>;

/// ## Opcode to behavior mapping
///
/// Lookup is total: an opcode with nothing registered comes back as `None`
/// and the runtime reports it as an undefined word.

#[derive(Clone)]
pub struct WordTable {
    words: HashMap<Opcode, Behavior>,
}

impl std::fmt::Debug for WordTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WordTable {:?}", self.opcodes())
    }
}

impl Default for WordTable {
    fn default() -> Self {
        let mut table = WordTable::new();
        table.insert(Opcode::Plus, plus);
        table.insert(Opcode::Minus, minus);
        table.insert(Opcode::Star, star);
        table.insert(Opcode::Slash, slash);
        table.insert(Opcode::Negate, negate);
        table.insert(Opcode::Abs, abs);
        table.insert(Opcode::Dot, dot);
        table.insert(Opcode::DotS, dot_s);
        table.insert(Opcode::Depth, depth);
        table.insert(Opcode::Words, words);
        table.insert(Opcode::Dup, dup);
        table.insert(Opcode::Drop, drop);
        table.insert(Opcode::Swap, swap);
        table.insert(Opcode::Over, over);
        table.insert(Opcode::Rot, rot);
        table.insert(Opcode::Clear, clear);
        table
    }
}

impl WordTable {
    /// A table with no words at all.
    pub fn new() -> WordTable {
        WordTable {
            words: HashMap::new(),
        }
    }

    pub fn insert(&mut self, op: Opcode, behavior: Behavior) {
        self.words.insert(op, behavior);
    }

    pub fn lookup(&self, op: Opcode) -> Option<Behavior> {
        self.words.get(&op).copied()
    }

    pub fn contains(&self, op: Opcode) -> bool {
        self.words.contains_key(&op)
    }

    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops: Vec<Opcode> = self.words.keys().copied().collect();
        ops.sort();
        ops
    }

    /// Spellings that currently execute something, operators first.
    pub fn spellings(&self) -> Vec<&'static str> {
        token::OPERATORS
            .iter()
            .chain(token::WORDS.iter())
            .filter(|(_, op)| self.contains(*op))
            .map(|(s, _)| *s)
            .collect()
    }
}

fn binary(r: &mut Runtime, f: fn(Val, Val) -> Val) -> Result<()> {
    let (b, a) = r.stack_mut().pop_2()?;
    r.stack_mut().push(f(b, a));
    Ok(())
}

fn unary(r: &mut Runtime, f: fn(Val) -> Val) -> Result<()> {
    let a = r.stack_mut().pop()?;
    r.stack_mut().push(f(a));
    Ok(())
}

fn plus(r: &mut Runtime) -> Result<()> {
    binary(r, Operation::sum)
}

fn minus(r: &mut Runtime) -> Result<()> {
    binary(r, Operation::subtract)
}

fn star(r: &mut Runtime) -> Result<()> {
    binary(r, Operation::multiply)
}

fn slash(r: &mut Runtime) -> Result<()> {
    // Operands are gone before the zero check; a failed divide does not restore them.
    let (b, a) = r.stack_mut().pop_2()?;
    let quotient = Operation::divide(b, a)?;
    r.stack_mut().push(quotient);
    Ok(())
}

fn negate(r: &mut Runtime) -> Result<()> {
    unary(r, Operation::negate)
}

fn abs(r: &mut Runtime) -> Result<()> {
    unary(r, Operation::abs)
}

fn dot(r: &mut Runtime) -> Result<()> {
    let a = r.stack_mut().pop()?;
    r.print(&format!("{} ", a));
    Ok(())
}

fn dot_s(r: &mut Runtime) -> Result<()> {
    let rendered = r.stack().render();
    r.print(&rendered);
    Ok(())
}

fn depth(r: &mut Runtime) -> Result<()> {
    let n = r.stack().len();
    r.stack_mut().push(Val::from_integer(BigInt::from(n)));
    Ok(())
}

fn words(r: &mut Runtime) -> Result<()> {
    let mut s = r.words().spellings().join(" ");
    s.push(' ');
    r.print(&s);
    Ok(())
}

fn dup(r: &mut Runtime) -> Result<()> {
    let a = r.stack().peek(0)?.clone();
    r.stack_mut().push(a);
    Ok(())
}

fn drop(r: &mut Runtime) -> Result<()> {
    r.stack_mut().pop()?;
    Ok(())
}

fn swap(r: &mut Runtime) -> Result<()> {
    let (a, b) = r.stack_mut().pop_2()?;
    r.stack_mut().push(b);
    r.stack_mut().push(a);
    Ok(())
}

fn over(r: &mut Runtime) -> Result<()> {
    let a = r.stack().peek(1)?.clone();
    r.stack_mut().push(a);
    Ok(())
}

fn rot(r: &mut Runtime) -> Result<()> {
    let mut abc = r.stack_mut().pop_n(3)?;
    abc.rotate_left(1);
    for val in abc {
        r.stack_mut().push(val);
    }
    Ok(())
}

fn clear(r: &mut Runtime) -> Result<()> {
    r.stack_mut().clear();
    Ok(())
}
