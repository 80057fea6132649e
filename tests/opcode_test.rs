mod common;
use common::*;
use minimal::lang::Grid;
use minimal::mach::{Capabilities, Direction, Runtime};

#[test]
fn test_zero_then_print() {
    let mut r = runtime("+++++).");
    assert_eq!(exec(&mut r), vec![0]);
}

#[test]
fn test_skip_exactly_one_cell() {
    // With a zero cell `/` jumps the first `+` only.
    let mut r = runtime("/++.");
    assert_eq!(exec(&mut r), vec![1]);
    // With a non-zero cell nothing is skipped.
    let mut r = runtime("+/++.");
    assert_eq!(exec(&mut r), vec![3]);
}

#[test]
fn test_skip_follows_direction() {
    // Heading down, `/` skips the cell below it.
    let mut r = runtime("D\n/\n+\n+\n.");
    assert_eq!(exec(&mut r), vec![1]);
}

#[test]
fn test_skip_over_turn() {
    let mut r = runtime("/D+.");
    assert_eq!(exec(&mut r), vec![1]);
    assert_eq!(r.ip().direction(), Direction::Right);
}

#[test]
fn test_push_peek_round_trip() {
    let mut r = runtime("++++++++V>!.");
    assert_eq!(exec(&mut r), vec![8]);
}

#[test]
fn test_push_pop_keeps_depth() {
    let mut r = runtime("+V+V^");
    exec(&mut r);
    assert_eq!(r.stack().unwrap().cursor(), 0);
    assert_eq!(r.stack().unwrap().cells()[0], 1);
}

#[test]
fn test_pop_empty_then_push() {
    // Popping an empty stack wraps its cursor, so the next push lands at 255.
    let mut r = runtime("^+V");
    exec(&mut r);
    let stack = r.stack().unwrap();
    assert_eq!(stack.cursor(), 255);
    assert_eq!(stack.cells()[255], 1);
}

#[test]
fn test_peek_empty_stack_reads_zero() {
    let mut r = runtime("+++!.");
    assert_eq!(exec(&mut r), vec![0]);
}

#[test]
fn test_indirect_pointer_nesting() {
    // Cell 0 = 2, go to cell 2, which holds 4, go to cell 4, mark it.
    let mut r = runtime("++>>++++<<[[+++]]");
    exec(&mut r);
    let heap = r.heap().cells();
    assert_eq!(heap[4], 3);
    assert_eq!(r.heap().cursor(), 0);
    assert_eq!(r.stack().unwrap().cursor(), 255);
}

#[test]
fn test_mark_and_jump_round_trip() {
    // `&` at (3, 2) with the cursor on 10.
    let mut r = runtime("++++++++++~D\n\n   &       L");
    exec(&mut r);
    assert_eq!(r.heap().cells()[10], 3);
    assert_eq!(r.heap().cells()[11], 2);

    // Write (2, 1) by hand and jump to it; the `+` after it on row 1 runs
    // next and the `.` after the jump on row 0 never does.
    let mut r = runtime(">+<++(.;\n   +.;");
    assert_eq!(exec(&mut r), vec![3]);
    assert_eq!(r.instruction_count(), 9);
    assert_eq!((r.ip().x(), r.ip().y()), (6, 1));
}

#[test]
fn test_mark_at_last_cell_wraps() {
    let mut r = runtime("<&");
    exec(&mut r);
    let heap = r.heap().cells();
    assert_eq!(heap[255], 1);
    assert_eq!(heap[0], 0);
    assert_eq!(r.heap().cursor(), 255);
}

#[test]
fn test_extensions_disabled() {
    let caps = Capabilities {
        extensions: false,
        ..Capabilities::default()
    };
    let mut r = Runtime::new(Grid::from("+;)."), caps);
    assert_eq!(exec(&mut r), vec![1]);
    assert_eq!(r.instruction_count(), 2);
}

#[test]
fn test_stack_disabled() {
    let caps = Capabilities {
        stack: false,
        ..Capabilities::default()
    };
    let mut r = Runtime::new(Grid::from("+V)!@."), caps);
    assert_eq!(exec(&mut r), vec![0]);
    assert_eq!(r.instruction_count(), 3);
    assert!(r.stack().is_none());
}

#[test]
fn test_debug_commands_count() {
    let mut r = runtime("#@");
    exec(&mut r);
    assert_eq!(r.instruction_count(), 2);
}
