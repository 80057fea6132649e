mod common;
use common::*;

#[test]
fn test_add_and_print() {
    let mut r = runtime("+++.");
    assert_eq!(exec(&mut r), vec![3]);
    assert_eq!(r.instruction_count(), 4);
    assert!(transcript("+++.", b"").ends_with("\n4 Instructions Processed.\n"));
}

#[test]
fn test_halt_first() {
    let mut r = runtime(";+++.");
    assert_eq!(exec(&mut r), Vec::<u8>::new());
    assert_eq!(r.instruction_count(), 1);
    assert_eq!(
        transcript(";+++.", b""),
        "\n\nProgram Execution Complete.\n1 Instructions Processed.\n"
    );
}

#[test]
fn test_whitespace_only() {
    let mut r = runtime("   ");
    assert_eq!(exec(&mut r), Vec::<u8>::new());
    assert_eq!(r.instruction_count(), 0);
    assert!(r.is_stopped());
}

#[test]
fn test_comments_only_multiline() {
    let mut r = runtime("hello\nworld\n\nthis is all comment");
    exec(&mut r);
    assert_eq!(r.instruction_count(), 0);
}

#[test]
fn test_empty_program() {
    let mut r = runtime("");
    assert_eq!(exec(&mut r), Vec::<u8>::new());
    assert_eq!(r.instruction_count(), 0);
}

#[test]
fn test_echo() {
    assert_eq!(
        transcript(",.,.,.", b"h i\n!"),
        "hi!\n\nProgram Execution Complete.\n6 Instructions Processed.\n"
    );
}

#[test]
fn test_echo_past_end_of_input() {
    let mut r = runtime("+,.");
    assert_eq!(exec_input(&mut r, b""), vec![1]);
    assert_eq!(r.instruction_count(), 3);
}

#[test]
fn test_print_letter_with_loop() {
    // Cell 1 counts down from 5 while cell 0 gains 13 per lap: 65 is 'A'.
    // `&` keeps the loop's entry in cells 3 and 4.
    let src = format!(
        "{}\n{}D>>L\n{}R(",
        ">+++++>>&<<-<+++++++++++++>/D<.",
        " ".repeat(25),
        " ".repeat(25)
    );
    let mut r = runtime(&src);
    assert_eq!(exec(&mut r), b"A".to_vec());
    assert_eq!(r.instruction_count(), 133);
    assert_eq!(r.heap().cells()[1], 0);
}

#[test]
fn test_infinite_loop_is_not_an_error() {
    let mut r = runtime("R+L");
    let out = exec_n(&mut r, b"", 100);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\n100 Execution cycles exceeded.\n"
    );
    assert!(!r.is_stopped());
}

#[test]
fn test_output_order_across_input() {
    let mut r = runtime("+.,.+.");
    assert_eq!(exec_input(&mut r, b"A"), vec![1, b'A', b'B']);
}
