use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Underflow checked vector
///
/// The top of the stack is the end of the vector.
/// Every removal checks depth first so a failed pop removes nothing.

pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    fn depth_check(&self, len: usize) -> Result<()> {
        if self.vec.len() < len {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops two values and returns them in stack order, top last.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        self.depth_check(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Pops `len` values and returns them in stack order, top last.
    pub fn pop_n(&mut self, len: usize) -> Result<Vec<T>> {
        self.depth_check(len)?;
        let range = (self.vec.len() - len)..;
        Ok(self.vec.drain(range).collect())
    }
    /// Reference to the value `depth` places below the top.
    pub fn peek(&self, depth: usize) -> Result<&T> {
        self.depth_check(depth + 1)?;
        Ok(&self.vec[self.vec.len() - 1 - depth])
    }
}

impl<T: std::fmt::Display> Stack<T> {
    /// `<N> v1 v2 ... vN ` with the bottom of the stack first.
    pub fn render(&self) -> String {
        let mut s = format!("<{}> ", self.vec.len());
        for val in &self.vec {
            s.push_str(&format!("{} ", val));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_push_pop() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_underflow() {
        let mut s: Stack<i32> = Stack::new();
        let e = s.pop().unwrap_err();
        assert_eq!(e.code(), ErrorCode::StackUnderflow);
        assert!(s.is_empty());
        s.push(9);
        assert_eq!(s.pop(), Ok(9));
        assert!(s.pop().is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn test_pop_2_leaves_stack_on_underflow() {
        let mut s = Stack::new();
        s.push(5);
        assert!(s.pop_2().is_err());
        assert_eq!(s.len(), 1);
        s.push(6);
        assert_eq!(s.pop_2(), Ok((5, 6)));
    }

    #[test]
    fn test_pop_n() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert!(s.pop_n(4).is_err());
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop_n(2), Ok(vec![2, 3]));
        assert_eq!(s.pop_n(0), Ok(vec![]));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_peek() {
        let mut s = Stack::new();
        s.push('a');
        s.push('b');
        assert_eq!(s.peek(0), Ok(&'b'));
        assert_eq!(s.peek(1), Ok(&'a'));
        assert!(s.peek(2).is_err());
    }

    #[test]
    fn test_render() {
        let mut s = Stack::new();
        assert_eq!(s.render(), "<0> ");
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.render(), "<3> 1 2 3 ");
        assert_eq!(s.len(), 3);
    }
}
