use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Arrays used before `DIM` get one dimension of this size.
const DEFAULT_DIM: usize = 11;

/// Elements in one array, across all of its dimensions.
const MAX_ARRAY_LEN: usize = u16::max_value() as usize;

/// ## Variable memory
///
/// Numbers, strings and arrays live in separate namespaces so `A`,
/// `A$`, and `A(1)` never collide. Names are matched case-insensitively.

#[derive(Debug, Default)]
pub struct Var {
    numbers: HashMap<String, f64>,
    strings: HashMap<String, String>,
    arrays: HashMap<String, Array>,
}

#[derive(Debug)]
struct Array {
    dims: Vec<usize>,
    values: Vec<f64>,
}

impl Array {
    fn new(dims: Vec<usize>) -> Array {
        let len: usize = dims.iter().product();
        Array {
            dims,
            values: vec![0.0; len],
        }
    }

    fn offset(&self, indices: &[i64]) -> Result<usize> {
        if indices.len() != self.dims.len() {
            return Err(error!(SubscriptOutOfRange));
        }
        let mut offset = 0;
        for (&index, &dim) in indices.iter().zip(&self.dims) {
            if index < 0 || index as usize >= dim {
                return Err(error!(SubscriptOutOfRange));
            }
            offset = offset * dim + index as usize;
        }
        Ok(offset)
    }
}

fn key(name: &str) -> String {
    name.to_ascii_uppercase()
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
        self.strings.clear();
        self.arrays.clear();
    }

    pub fn get_numeric(&self, name: &str) -> f64 {
        self.numbers.get(&key(name)).copied().unwrap_or(0.0)
    }

    pub fn set_numeric(&mut self, name: &str, value: f64) {
        self.numbers.insert(key(name), value);
    }

    pub fn get_string(&self, name: &str) -> &str {
        match self.strings.get(&key(name)) {
            Some(s) => s,
            None => "",
        }
    }

    pub fn set_string(&mut self, name: &str, value: &str) {
        self.strings.insert(key(name), value.to_string());
    }

    pub fn dim_array(&mut self, name: &str, dims: &[usize]) -> Result<()> {
        if dims.is_empty() || dims.len() > 3 || dims.contains(&0) {
            return Err(error!(SyntaxError));
        }
        let len = dims
            .iter()
            .try_fold(1usize, |len, &dim| len.checked_mul(dim));
        match len {
            Some(len) if len <= MAX_ARRAY_LEN => {}
            _ => return Err(error!(OutOfMemory)),
        }
        self.arrays.insert(key(name), Array::new(dims.to_vec()));
        Ok(())
    }

    pub fn array_get(&mut self, name: &str, indices: &[i64]) -> Result<f64> {
        let array = self.array(name);
        let offset = array.offset(indices)?;
        Ok(array.values[offset])
    }

    pub fn array_set(&mut self, name: &str, indices: &[i64], value: f64) -> Result<()> {
        let array = self.array(name);
        let offset = array.offset(indices)?;
        array.values[offset] = value;
        Ok(())
    }

    fn array(&mut self, name: &str) -> &mut Array {
        self.arrays
            .entry(key(name))
            .or_insert_with(|| Array::new(vec![DEFAULT_DIM]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_undefined_defaults() {
        let var = Var::new();
        assert_eq!(var.get_numeric("X"), 0.0);
        assert_eq!(var.get_string("X$"), "");
    }

    #[test]
    fn test_namespaces_and_case() {
        let mut var = Var::new();
        var.set_numeric("a", 1.5);
        var.set_string("A$", "HI");
        assert_eq!(var.get_numeric("A"), 1.5);
        assert_eq!(var.get_string("a$"), "HI");
        var.clear();
        assert_eq!(var.get_numeric("A"), 0.0);
    }

    #[test]
    fn test_array_row_major() {
        let mut var = Var::new();
        var.dim_array("M", &[2, 3]).unwrap();
        var.array_set("M", &[1, 2], 9.0).unwrap();
        var.array_set("M", &[0, 2], 4.0).unwrap();
        assert_eq!(var.array_get("M", &[1, 2]).unwrap(), 9.0);
        assert_eq!(var.array_get("M", &[0, 2]).unwrap(), 4.0);
        assert_eq!(var.array_get("M", &[1, 0]).unwrap(), 0.0);
    }

    #[test]
    fn test_array_bounds() {
        let mut var = Var::new();
        var.dim_array("A", &[3]).unwrap();
        let e = var.array_get("A", &[3]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SubscriptOutOfRange);
        assert!(var.array_set("A", &[-1], 1.0).is_err());
        assert!(var.array_get("A", &[0, 0]).is_err());
    }

    #[test]
    fn test_redim_overwrites() {
        let mut var = Var::new();
        var.dim_array("A", &[3]).unwrap();
        var.array_set("A", &[2], 5.0).unwrap();
        var.dim_array("A", &[2, 2, 2]).unwrap();
        assert_eq!(var.array_get("A", &[1, 1, 1]).unwrap(), 0.0);
        assert!(var.array_get("A", &[2]).is_err());
        assert!(var.dim_array("A", &[1, 1, 1, 1]).is_err());
        assert!(var.dim_array("A", &[0]).is_err());
    }

    #[test]
    fn test_dim_too_large() {
        let mut var = Var::new();
        let e = var.dim_array("A", &[usize::max_value(), 2]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        let e = var.dim_array("A", &[100, 100, 100]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        var.dim_array("A", &[40, 40, 40]).unwrap();
        assert_eq!(var.array_get("A", &[39, 39, 39]).unwrap(), 0.0);
    }

    #[test]
    fn test_undimensioned_array() {
        let mut var = Var::new();
        var.array_set("Z", &[10], 3.0).unwrap();
        assert_eq!(var.array_get("Z", &[10]).unwrap(), 3.0);
        assert!(var.array_get("Z", &[11]).is_err());
    }
}
