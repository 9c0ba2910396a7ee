mod common;
use basic::mach::{Event, State};
use common::*;

#[test]
fn test_input_number() {
    let mut r = program(&["10 INPUT A", "20 PRINT A"]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "? ");
    r.enter("42");
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_input_string_keeps_case() {
    let mut r = program(&["10 INPUT N$", "20 PRINT N$"]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "? ");
    r.enter("Ada Lovelace");
    assert_eq!(exec(&mut r), "Ada Lovelace\n");
}

#[test]
fn test_input_redo_from_start() {
    let mut r = program(&["10 INPUT A", "20 PRINT A"]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "? ");
    r.enter("lots");
    assert_eq!(exec(&mut r), "?REDO FROM START\n? ");
    r.enter("-1.5");
    assert_eq!(exec(&mut r), "-1.5\n");
}

#[test]
fn test_input_array_element() {
    let mut r = program(&["10 DIM A(3)", "20 I=1", "30 INPUT A(I)", "40 PRINT A(1)"]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "? ");
    r.enter("8");
    assert_eq!(exec(&mut r), "8\n");
}

#[test]
fn test_input_in_direct_mode() {
    let mut r = basic::mach::Runtime::default();
    r.enter("INPUT X");
    assert_eq!(r.execute(10), Event::Input("? ".to_string()));
    r.enter("3");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_input_as_last_line() {
    let mut r = program(&["10 INPUT A"]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "? ");
    r.enter("1");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.state(), State::Stopped);
}
