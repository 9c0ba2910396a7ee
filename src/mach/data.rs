use crate::error;
use crate::lang::{parse_number, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## DATA literals and the READ cursor

#[derive(Debug, Default)]
pub struct Data {
    values: Vec<String>,
    cursor: usize,
}

impl Data {
    pub fn new() -> Data {
        Data::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn declare<I: IntoIterator<Item = String>>(&mut self, tokens: I) {
        self.values.extend(tokens)
    }

    pub fn read(&mut self) -> Result<&str> {
        match self.values.get(self.cursor) {
            Some(s) => {
                self.cursor += 1;
                Ok(s)
            }
            None => Err(error!(OutOfData)),
        }
    }

    /// The cursor moves past a literal even when it is not a number.
    pub fn read_number(&mut self) -> Result<f64> {
        let s = self.read()?;
        parse_number(s).ok_or_else(|| error!(TypeMismatch))
    }

    pub fn restore(&mut self) {
        self.cursor = 0;
    }
}
