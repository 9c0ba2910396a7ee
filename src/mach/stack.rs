use super::MAX_STACK_LEN;
use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Popping an empty stack is a BASIC error, not a machine fault, so each
/// stack knows which error its underflow reports.

pub struct Stack<T> {
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow: ErrorCode) -> Stack<T> {
        Stack {
            underflow,
            vec: vec![],
        }
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() >= MAX_STACK_LEN {
            Err(error!(OutOfMemory))
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
    pub fn last(&self) -> Result<&T> {
        match self.vec.last() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.overflow_check()?;
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
    /// Drops the newest entry matching `f` and everything pushed after it.
    pub fn unwind<F: Fn(&T) -> bool>(&mut self, f: F) {
        if let Some(pos) = self.vec.iter().rposition(f) {
            self.vec.truncate(pos);
        }
    }
}
