/// Statement keywords understood by the dispatcher.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Beep,
    Circle,
    Cls,
    Cont,
    Data,
    Dim,
    End,
    Exit,
    For,
    Gosub,
    Goto,
    Help,
    If,
    Input,
    Let,
    Line,
    List,
    Load,
    New,
    Next,
    Play,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Rnd,
    Run,
    Save,
    Stop,
    Troff,
    Tron,
    Ver,
}

impl Word {
    pub const ALL: [Word; 33] = [
        Word::Help,
        Word::Cls,
        Word::Ver,
        Word::Run,
        Word::Cont,
        Word::List,
        Word::New,
        Word::Exit,
        Word::Let,
        Word::Print,
        Word::Input,
        Word::Goto,
        Word::Gosub,
        Word::Return,
        Word::For,
        Word::Next,
        Word::If,
        Word::Rem,
        Word::Data,
        Word::Read,
        Word::Restore,
        Word::Dim,
        Word::Rnd,
        Word::Beep,
        Word::Save,
        Word::Load,
        Word::Line,
        Word::Circle,
        Word::Play,
        Word::Tron,
        Word::Troff,
        Word::Stop,
        Word::End,
    ];

    pub fn from_keyword(s: &str) -> Option<Word> {
        let s = s.to_ascii_uppercase();
        Word::ALL.iter().copied().find(|w| w.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Beep => "BEEP",
            Circle => "CIRCLE",
            Cls => "CLS",
            Cont => "CONT",
            Data => "DATA",
            Dim => "DIM",
            End => "END",
            Exit => "EXIT",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            Help => "HELP",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            Line => "LINE",
            List => "LIST",
            Load => "LOAD",
            New => "NEW",
            Next => "NEXT",
            Play => "PLAY",
            Print => "PRINT",
            Read => "READ",
            Rem => "REM",
            Restore => "RESTORE",
            Return => "RETURN",
            Rnd => "RND",
            Run => "RUN",
            Save => "SAVE",
            Stop => "STOP",
            Troff => "TROFF",
            Tron => "TRON",
            Ver => "VER",
        }
    }

    /// One line of HELP output.
    pub fn summary(self) -> &'static str {
        use Word::*;
        match self {
            Beep => "Make a beep sound",
            Circle => "Draw a circle (CIRCLE X,Y,R)",
            Cls => "Clear screen",
            Cont => "Continue after STOP or break",
            Data => "Define data values",
            Dim => "Dimension an array (DIM A(10))",
            End => "End program",
            Exit => "Exit to system",
            For => "FOR loop (FOR I=1 TO 10)",
            Gosub => "Call subroutine at line",
            Goto => "Jump to line number",
            Help => "Show this help",
            If => "Conditional (IF X=10 THEN PRINT X)",
            Input => "Input value",
            Let => "Assign value (LET A=10)",
            Line => "Draw a line (LINE X1,Y1,X2,Y2)",
            List => "List program",
            Load => "Load program (LOAD FILE)",
            New => "Clear program and variables",
            Next => "End FOR loop",
            Play => "Play notes (PLAY \"CDE\")",
            Print => "Print value (PRINT A)",
            Read => "Read from DATA",
            Rem => "Comment line",
            Restore => "Reset DATA pointer",
            Return => "Return from subroutine",
            Rnd => "Random number (RND 100)",
            Run => "Run program",
            Save => "Save program (SAVE FILE)",
            Stop => "Break program",
            Troff => "Trace off",
            Tron => "Trace on",
            Ver => "Show version",
        }
    }

    /// Statements that move the instruction pointer and therefore only
    /// make sense inside a running program.
    pub fn is_indirect_only(self) -> bool {
        matches!(
            self,
            Word::Goto | Word::Gosub | Word::Return | Word::For | Word::Next
        )
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
