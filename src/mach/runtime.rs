use super::{Address, Data, Listing, Stack, Var};
use crate::error;
use crate::lang::ast::{Index, Printable, Statement, Value, Variable};
use crate::lang::token::Word;
use crate::lang::{lex, parse, parse_number, Error, ErrorCode, Line, LineNumber};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

const INPUT_PROMPT: &str = "? ";

/// ## Execution state
///
/// `Halted` is a stopped program that CONT can resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Stopped,
    Running,
    Halted,
}

/// ## Events for the user interface
///
/// The runtime never touches the terminal or the file system. Everything
/// it needs from the outside world is requested with one of these.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Input(String),
    Print(String),
    Error(Error),
    Beep,
    Cls,
    Line(i32, i32, i32, i32),
    Circle(i32, i32, i32),
    Play(String),
    Load(String),
    Save(String),
    Exit,
}

#[derive(Debug)]
struct ForFrame {
    var: String,
    end: f64,
    step: f64,
    addr: Address,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Direct,
    Indirect,
}

enum Flow {
    Advance,
    Jump(Address),
    End,
    Halt,
    Wait,
}

/// ## Statement engine
///
/// Owns the program store, every variable, the DATA queue and both
/// control stacks. Drive it by alternating `enter` and `execute`.
pub struct Runtime {
    listing: Listing,
    vars: Var,
    data: Data,
    state: State,
    ip: Address,
    for_stack: Stack<ForFrame>,
    gosub_stack: Stack<Address>,
    pending: Option<(Variable, Mode)>,
    events: VecDeque<Event>,
    interrupted: Arc<AtomicBool>,
    tron: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            listing: Listing::default(),
            vars: Var::new(),
            data: Data::new(),
            state: State::Stopped,
            ip: 0,
            for_stack: Stack::new(ErrorCode::NextWithoutFor),
            gosub_stack: Stack::new(ErrorCode::ReturnWithoutGosub),
            pending: None,
            events: VecDeque::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
            tron: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn instruction_pointer(&self) -> Address {
        self.ip
    }

    pub fn get_listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = listing;
        self.state = State::Stopped;
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.gather_data();
    }

    /// Setting this flag breaks a running program before its next statement.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&mut self) {
        self.pending = None;
        if self.state == State::Running {
            let line_number = self.listing.get(self.ip).map(Line::number);
            self.halt(line_number);
        }
    }

    /// Accepts a line from the user. Returns true if the line is
    /// worth keeping in the history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Some((var, mode)) = self.pending.take() {
            self.complete_input(var, mode, s);
            return false;
        }
        let s = s.trim();
        if s.is_empty() {
            return false;
        }
        if Line::is_numbered(s) {
            match self.listing.load_str(s) {
                Ok(()) => {
                    if self.state == State::Halted {
                        self.state = State::Stopped;
                    }
                    self.gather_data();
                    self.ok(Mode::Direct);
                }
                Err(error) => self.events.push_back(Event::Error(error)),
            }
            return true;
        }
        if let Err(error) = self.dispatch(&s.to_ascii_uppercase(), Mode::Direct) {
            self.fail(error, Mode::Direct);
        }
        true
    }

    /// Runs at most `cycles` statements, stopping early whenever there
    /// is something to report.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if self.pending.is_none() {
            for _ in 0..cycles {
                if self.state != State::Running {
                    break;
                }
                if self.interrupted.swap(false, Ordering::SeqCst) {
                    self.interrupt();
                    break;
                }
                self.step();
                if !self.events.is_empty() || self.pending.is_some() {
                    break;
                }
            }
        }
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if self.pending.is_some() {
            return Event::Input(INPUT_PROMPT.to_string());
        }
        match self.state {
            State::Running => Event::Running,
            State::Stopped | State::Halted => Event::Stopped,
        }
    }

    fn step(&mut self) {
        let listing = self.listing.clone();
        let line = match listing.get(self.ip) {
            Some(line) => line,
            None => {
                self.state = State::Stopped;
                return;
            }
        };
        if self.tron {
            self.print(&format!("[{}]", line.number()));
        }
        match self.dispatch(line.text(), Mode::Indirect) {
            Ok(Flow::Advance) => self.ip += 1,
            Ok(Flow::Jump(addr)) => self.ip = addr,
            Ok(Flow::Wait) => {}
            Ok(Flow::End) => self.state = State::Stopped,
            Ok(Flow::Halt) => {
                self.ip += 1;
                self.halt(Some(line.number()));
            }
            Err(error) => self.fail(error, Mode::Indirect),
        }
        if self.state == State::Running && self.ip >= self.listing.len() {
            self.state = State::Stopped;
        }
    }

    fn dispatch(&mut self, text: &str, mode: Mode) -> Result<Flow> {
        if let (Some(word), _, _) = lex(text) {
            if mode == Mode::Direct && word.is_indirect_only() {
                return Err(error!(IllegalDirect));
            }
        }
        match parse(text)? {
            Statement::Beep => self.events.push_back(Event::Beep),
            Statement::Circle(x, y, r) => self.events.push_back(Event::Circle(x, y, r)),
            Statement::Cls => self.events.push_back(Event::Cls),
            Statement::Cont => return self.cont(mode),
            Statement::Data(tokens) => {
                if mode == Mode::Direct {
                    self.data.declare(tokens)
                }
            }
            Statement::Dim(name, dims) => self.vars.dim_array(&name, &dims)?,
            Statement::End => return Ok(Flow::End),
            Statement::Exit => {
                self.print("SYSTEM HALTED\n");
                self.events.push_back(Event::Exit);
                return Ok(Flow::End);
            }
            Statement::For(var, start, end, step) => {
                self.vars.set_numeric(&var, start);
                self.for_stack.unwind(|frame| frame.var == var);
                self.for_stack.push(ForFrame {
                    var,
                    end,
                    step,
                    addr: self.ip,
                })?;
            }
            Statement::Gosub(number) => {
                let addr = self.listing.find(number)?;
                self.gosub_stack.push(self.ip)?;
                return Ok(Flow::Jump(addr));
            }
            Statement::Goto(number) => return Ok(Flow::Jump(self.listing.find(number)?)),
            Statement::Help => self.help(),
            Statement::If(var, value, rest) => {
                if self.vars.get_numeric(&var) == value {
                    return self.dispatch(&rest, mode);
                }
            }
            Statement::Input(var) => {
                self.pending = Some((var, mode));
                return Ok(Flow::Wait);
            }
            Statement::Let(var, value) => {
                self.store(&var, value)?;
                self.ok(mode);
            }
            Statement::Line(x1, y1, x2, y2) => {
                self.events.push_back(Event::Line(x1, y1, x2, y2))
            }
            Statement::List => {
                for line in self.listing.lines() {
                    self.events.push_back(Event::Print(format!("{}\n", line)));
                }
            }
            Statement::Load(filename) => {
                self.events.push_back(Event::Load(filename));
                return Ok(Flow::End);
            }
            Statement::New => {
                self.new_program();
                return Ok(Flow::End);
            }
            Statement::Next(_) => return self.next(),
            Statement::Play(notes) => self.events.push_back(Event::Play(notes)),
            Statement::Print(printable) => self.print_value(printable)?,
            Statement::Read(var) => self.read(&var)?,
            Statement::Rem => self.ok(mode),
            Statement::Restore => {
                self.data.restore();
                self.ok(mode);
            }
            Statement::Return => return Ok(Flow::Jump(self.gosub_stack.pop()? + 1)),
            Statement::Rnd(n) => {
                let r = rand::thread_rng().gen_range(1..=n);
                self.print(&format!("{}\n", r));
            }
            Statement::Run => return Ok(self.run()),
            Statement::Save(filename) => self.events.push_back(Event::Save(filename)),
            Statement::Stop => return Ok(Flow::Halt),
            Statement::Troff => self.tron = false,
            Statement::Tron => self.tron = true,
            Statement::Ver => self.print(&format!(
                "\nZUIX-DOS Version {}\nBASIC Mode Enhanced\n",
                env!("CARGO_PKG_VERSION")
            )),
        }
        Ok(Flow::Advance)
    }

    fn run(&mut self) -> Flow {
        if self.listing.is_empty() {
            self.print("NO PROGRAM\n");
            return Flow::End;
        }
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.interrupted.store(false, Ordering::SeqCst);
        self.ip = 0;
        self.state = State::Running;
        Flow::Jump(0)
    }

    fn cont(&mut self, mode: Mode) -> Result<Flow> {
        if mode == Mode::Indirect || self.state != State::Halted {
            return Err(error!(CantContinue));
        }
        self.interrupted.store(false, Ordering::SeqCst);
        self.state = State::Running;
        if self.ip >= self.listing.len() {
            self.state = State::Stopped;
        }
        Ok(Flow::Advance)
    }

    fn next(&mut self) -> Result<Flow> {
        let frame = self.for_stack.last()?;
        let value = self.vars.get_numeric(&frame.var) + frame.step;
        if (frame.step > 0.0 && value <= frame.end) || (frame.step < 0.0 && value >= frame.end) {
            self.vars.set_numeric(&frame.var, value);
            return Ok(Flow::Jump(frame.addr + 1));
        }
        self.for_stack.pop()?;
        Ok(Flow::Advance)
    }

    /// The DATA queue holds every DATA literal in the program, in line
    /// order. Rebuilt whenever the program changes; the cursor starts over.
    fn gather_data(&mut self) {
        self.data.clear();
        for line in self.listing.lines() {
            if let (Some(Word::Data), _, _) = lex(line.text()) {
                if let Ok(Statement::Data(tokens)) = parse(line.text()) {
                    self.data.declare(tokens);
                }
            }
        }
    }

    fn new_program(&mut self) {
        self.listing.clear();
        self.vars.clear();
        self.data.clear();
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.pending = None;
        self.state = State::Stopped;
        self.ip = 0;
    }

    fn halt(&mut self, line_number: Option<LineNumber>) {
        self.state = State::Halted;
        let error = match line_number {
            Some(number) => error!(Break, number),
            None => error!(Break),
        };
        self.events.push_back(Event::Error(error));
    }

    fn fail(&mut self, error: Error, mode: Mode) {
        let error = match (mode, self.listing.get(self.ip)) {
            (Mode::Indirect, Some(line)) if error.is_direct() => error.in_line_number(line.number()),
            _ => error,
        };
        self.events.push_back(Event::Error(error));
        if mode == Mode::Indirect {
            self.state = State::Stopped;
        }
    }

    fn complete_input(&mut self, var: Variable, mode: Mode, s: &str) {
        let value = if var.is_string() {
            Value::String(s.to_string())
        } else {
            match parse_number(s) {
                Some(n) => Value::Number(n),
                None => {
                    self.print("?REDO FROM START\n");
                    self.pending = Some((var, mode));
                    return;
                }
            }
        };
        match self.store(&var, value) {
            Ok(()) => {
                if mode == Mode::Indirect && self.state == State::Running {
                    self.ip += 1;
                    if self.ip >= self.listing.len() {
                        self.state = State::Stopped;
                    }
                }
            }
            Err(error) => self.fail(error, mode),
        }
    }

    fn print(&mut self, s: &str) {
        self.events.push_back(Event::Print(s.to_string()));
    }

    fn ok(&mut self, mode: Mode) {
        if mode == Mode::Direct {
            self.print("OK\n");
        }
    }

    fn help(&mut self) {
        let mut s = String::from("\nZUIX-DOS Commands:\n");
        for word in Word::ALL.iter() {
            s.push_str(&format!("{:<8}- {}\n", word.as_str(), word.summary()));
        }
        self.print(&s);
    }

    fn print_value(&mut self, printable: Printable) -> Result<()> {
        let s = match printable {
            Printable::Blank => String::new(),
            Printable::Literal(s) | Printable::Echo(s) => s,
            Printable::Variable(Variable::String(name)) => self.vars.get_string(&name).to_string(),
            Printable::Variable(var) => format_number(self.fetch(&var)?),
        };
        self.print(&format!("{}\n", s));
        Ok(())
    }

    fn read(&mut self, var: &Variable) -> Result<()> {
        let value = if var.is_string() {
            Value::String(self.data.read()?.to_string())
        } else {
            Value::Number(self.data.read_number()?)
        };
        self.store(var, value)
    }

    fn indices(&self, indices: &[Index]) -> Vec<i64> {
        indices
            .iter()
            .map(|index| match index {
                Index::Literal(n) => *n,
                Index::Variable(name) => self.vars.get_numeric(name) as i64,
            })
            .collect()
    }

    fn fetch(&mut self, var: &Variable) -> Result<f64> {
        match var {
            Variable::Numeric(name) => Ok(self.vars.get_numeric(name)),
            Variable::Element(name, indices) => {
                let indices = self.indices(indices);
                self.vars.array_get(name, &indices)
            }
            Variable::String(_) => Err(error!(TypeMismatch)),
        }
    }

    fn store(&mut self, var: &Variable, value: Value) -> Result<()> {
        match (var, value) {
            (Variable::Numeric(name), Value::Number(n)) => self.vars.set_numeric(name, n),
            (Variable::String(name), Value::String(s)) => self.vars.set_string(name, &s),
            (Variable::Element(name, indices), Value::Number(n)) => {
                let indices = self.indices(indices);
                self.vars.array_set(name, &indices, n)?
            }
            _ => return Err(error!(TypeMismatch)),
        }
        Ok(())
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}
