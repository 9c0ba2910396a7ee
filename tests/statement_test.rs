mod common;
use basic::mach::{Event, Runtime, State};
use common::*;

#[test]
fn test_print_literal_is_upper_case() {
    let mut r = Runtime::default();
    r.enter(r#"print "hello world""#);
    assert_eq!(exec(&mut r), "HELLO WORLD\n");
}

#[test]
fn test_print_echoes_what_it_cannot_evaluate() {
    let mut r = Runtime::default();
    r.enter("PRINT 2+2");
    assert_eq!(exec(&mut r), "2+2\n");
    r.enter("PRINT");
    assert_eq!(exec(&mut r), "\n");
}

#[test]
fn test_let_and_implicit_let() {
    let mut r = Runtime::default();
    r.enter("LET A=5");
    assert_eq!(exec(&mut r), "OK\n");
    r.enter("b=2.5");
    assert_eq!(exec(&mut r), "OK\n");
    r.enter("PRINT A");
    r.enter("PRINT B");
    assert_eq!(exec(&mut r), "5\n2.5\n");
    r.enter("PRINT C");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_string_variables() {
    let mut r = Runtime::default();
    r.enter(r#"LET N$="zuix""#);
    r.enter("PRINT N$");
    assert_eq!(exec(&mut r), "OK\nZUIX\n");
    r.enter("LET N$=5");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
}

#[test]
fn test_let_in_program_is_quiet() {
    assert_eq!(run(&["10 LET A=3", "20 PRINT A"]), "3\n");
}

#[test]
fn test_if_then() {
    let out = run(&[
        "10 LET X=1",
        r#"20 IF X=1 THEN PRINT "YES""#,
        r#"30 IF X=2 THEN PRINT "NO""#,
    ]);
    assert_eq!(out, "YES\n");
}

#[test]
fn test_if_then_line_number() {
    let out = run(&[
        "10 X=1",
        "20 IF X=1 THEN 40",
        r#"30 PRINT "SKIPPED""#,
        r#"40 PRINT "DONE""#,
    ]);
    assert_eq!(out, "DONE\n");
}

#[test]
fn test_if_without_then() {
    let mut r = Runtime::default();
    r.enter("IF X=0 PRINT X");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
}

#[test]
fn test_gosub_return() {
    let out = run(&[
        "10 GOSUB 100",
        r#"20 PRINT "BACK""#,
        "30 END",
        r#"100 PRINT "SUB""#,
        "110 RETURN",
    ]);
    assert_eq!(out, "SUB\nBACK\n");
}

#[test]
fn test_end_stops_program() {
    assert_eq!(run(&["10 PRINT 1", "20 END", "30 PRINT 2"]), "1\n");
}

#[test]
fn test_list_in_line_order() {
    let mut r = program(&["20 END", r#"10 print "hi""#]);
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PRINT \"HI\"\n20 END\n");
}

#[test]
fn test_entering_line_replaces() {
    let mut r = program(&["10 PRINT 1", "10 PRINT 2"]);
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PRINT 2\n");
}

#[test]
fn test_bad_line_numbers() {
    let mut r = Runtime::default();
    r.enter("0 PRINT 1");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
    r.enter("10");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_new_clears_everything() {
    let mut r = program(&["10 PRINT 1", "A=7"]);
    r.enter("NEW");
    r.enter("LIST");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "0\n");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "NO PROGRAM\n");
}

#[test]
fn test_unknown_statement() {
    let mut r = Runtime::default();
    r.enter("FOO BAR");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
    r.enter("LIST 10");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR\n");
}

#[test]
fn test_flow_statements_need_a_program() {
    let mut r = Runtime::default();
    for s in &["GOTO 10", "GOSUB 10", "RETURN", "FOR I=1 TO 2", "NEXT"] {
        r.enter(s);
        assert_eq!(exec(&mut r), "?ILLEGAL DIRECT\n");
    }
}

#[test]
fn test_rem() {
    assert_eq!(run(&["10 REM ANYTHING GOES: HERE", "20 PRINT 1"]), "1\n");
}

#[test]
fn test_help_lists_commands() {
    let mut r = Runtime::default();
    r.enter("help");
    let out = exec(&mut r);
    assert!(out.starts_with("\nZUIX-DOS Commands:\n"));
    assert!(out.contains("HELP    - Show this help\n"));
    assert!(out.contains("CIRCLE  - Draw a circle (CIRCLE X,Y,R)\n"));
    assert_eq!(out.lines().count(), 35);
}

#[test]
fn test_ver() {
    let mut r = Runtime::default();
    r.enter("VER");
    let out = exec(&mut r);
    assert!(out.starts_with("\nZUIX-DOS Version "));
    assert!(out.ends_with("BASIC Mode Enhanced\n"));
}

#[test]
fn test_exit() {
    let mut r = program(&["10 EXIT", "20 PRINT 1"]);
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Print("SYSTEM HALTED\n".to_string()));
    assert_eq!(r.execute(100), Event::Exit);
    assert_eq!(r.state(), State::Stopped);
}
