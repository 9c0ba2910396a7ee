extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
extern crate mortal;
use ansi_term::Style;
use basic::error;
use basic::lang::{Error, LineNumber};
use basic::mach::{Event, Listing, Runtime};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

const CYCLES: usize = 5000;
const PROMPT: &str = "A> ";
const NOTES: &str = "CDEFGAB";

pub fn main() {
    let mut runtime = Runtime::default();
    let interrupted = runtime.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Some(filename) = std::env::args().nth(1) {
        match load(&filename) {
            Ok(listing) => {
                runtime.set_listing(listing);
                runtime.enter("RUN");
            }
            Err(error) => eprintln!("{}", error),
        }
    }
    if let Err(error) = main_loop(runtime) {
        eprintln!("{}", error);
    }
}

fn main_loop(mut runtime: Runtime) -> std::io::Result<()> {
    let command = Interface::new("ZUIX")?;
    command.set_prompt(PROMPT)?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    clear_screen()?;
    command.write_fmt(format_args!(
        "ZUIX-DOS Version {} - BASIC Mode\nMemory Size: 64K\nEnter HELP for commands\n\n",
        env!("CARGO_PKG_VERSION")
    ))?;

    loop {
        match runtime.execute(CYCLES) {
            Event::Stopped => {
                command.write_fmt(format_args!("READY.\n"))?;
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.get_listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Error(error) => report(&command, &error)?,
            Event::Beep => command.write_fmt(format_args!("\x07"))?,
            Event::Cls => clear_screen()?,
            Event::Line(x1, y1, x2, y2) => {
                command.write_fmt(format_args!(
                    "Drawing line from ({},{}) to ({},{})\n*****\n",
                    x1, y1, x2, y2
                ))?;
            }
            Event::Circle(x, y, radius) => {
                command.write_fmt(format_args!(
                    "Drawing circle at ({},{}) with radius {}\n *** \n*   *\n *** \n",
                    x, y, radius
                ))?;
            }
            Event::Play(notes) => {
                for note in notes.chars().filter(|c| NOTES.contains(*c)) {
                    command.write_fmt(format_args!("{}\x07", note))?;
                    std::thread::sleep(Duration::from_millis(500));
                }
                command.write_fmt(format_args!("\n"))?;
            }
            Event::Load(filename) => match load(&filename) {
                Ok(listing) => {
                    runtime.set_listing(listing);
                    command.write_fmt(format_args!("OK\n"))?;
                }
                Err(error) => report(&command, &error)?,
            },
            Event::Save(filename) => match save(&runtime.get_listing(), &filename) {
                Ok(_) => command.write_fmt(format_args!("OK\n"))?,
                Err(error) => report(&command, &error)?,
            },
            Event::Exit => break,
        }
    }
    Ok(())
}

fn report<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

fn clear_screen() -> std::io::Result<()> {
    mortal::Terminal::new()?.clear_screen()
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(num) = prompter.buffer().trim().parse::<LineNumber>() {
            if let Some(s) = self.listing.line(num) {
                let mut comp = Completion::simple(s);
                comp.suffix = linefeed::complete::Suffix::None;
                return Some(vec![comp]);
            }
        }
        None
    }
}

fn load(filename: &str) -> Result<Listing, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Err(error!(FileNotFound)),
            _ => return Err(error!(CannotOpenFile)),
        },
    };
    Listing::read_from(reader).map_err(|_| error!(CannotOpenFile))
}

fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    let file = match File::create(filename) {
        Ok(file) => file,
        Err(_) => return Err(error!(CannotOpenFile)),
    };
    listing
        .write_to(BufWriter::new(file))
        .map_err(|_| error!(CannotOpenFile))
}
