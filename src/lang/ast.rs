use super::LineNumber;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Beep,
    Circle(i32, i32, i32),
    Cls,
    Cont,
    Data(Vec<String>),
    Dim(String, Vec<usize>),
    End,
    Exit,
    For(String, f64, f64, f64),
    Gosub(LineNumber),
    Goto(LineNumber),
    Help,
    /// Variable, literal, and the unparsed statement after THEN.
    If(String, f64, String),
    Input(Variable),
    Let(Variable, Value),
    Line(i32, i32, i32, i32),
    List,
    Load(String),
    New,
    Next(Option<String>),
    Play(String),
    Print(Printable),
    Read(Variable),
    Rem,
    Restore,
    Return,
    Rnd(i64),
    Run,
    Save(String),
    Stop,
    Troff,
    Tron,
    Ver,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Numeric(String),
    String(String),
    Element(String, Vec<Index>),
}

impl Variable {
    pub fn is_string(&self) -> bool {
        matches!(self, Variable::String(_))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Index {
    Literal(i64),
    Variable(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Number(f64),
    String(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Printable {
    Blank,
    Literal(String),
    Variable(Variable),
    /// Not a variable reference; printed as typed.
    Echo(String),
}
