use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: Some(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Break,
    CannotOpenFile,
    CantContinue,
    FileNotFound,
    IllegalDirect,
    NextWithoutFor,
    OutOfData,
    OutOfMemory,
    ReturnWithoutGosub,
    SubscriptOutOfRange,
    SyntaxError,
    TypeMismatch,
    UndefinedLine,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            Break => "BREAK",
            CannotOpenFile => "CANNOT OPEN FILE",
            CantContinue => "CAN'T CONTINUE",
            FileNotFound => "FILE NOT FOUND",
            IllegalDirect => "ILLEGAL DIRECT",
            NextWithoutFor => "NEXT WITHOUT FOR",
            OutOfData => "OUT OF DATA",
            OutOfMemory => "OUT OF MEMORY",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            SyntaxError => "SYNTAX ERROR",
            TypeMismatch => "TYPE MISMATCH",
            UndefinedLine => "UNDEFINED LINE NUMBER",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "Error {{ {} IN {} }}", self, line),
            None => write!(f, "Error {{ {} }}", self),
        }
    }
}

// The diagnostic text is matched by users verbatim so the line number stays out.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "?{}", self.code.as_str())
    }
}
