#![allow(dead_code)]
use minimal::lang::Grid;
use minimal::mach::{Capabilities, Event, Runtime};

pub fn runtime(source: &str) -> Runtime {
    Runtime::new(Grid::from(source), Capabilities::default())
}

pub fn exec(runtime: &mut Runtime) -> Vec<u8> {
    exec_input(runtime, b"")
}

/// Runs to completion, answering `,` from `input` and ignoring dumps.
pub fn exec_input(runtime: &mut Runtime, input: &[u8]) -> Vec<u8> {
    exec_n(runtime, input, 5000)
}

pub fn exec_n(runtime: &mut Runtime, input: &[u8], cycles: usize) -> Vec<u8> {
    let mut out = vec![];
    let mut input = input;
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Running => {
                if prev_running {
                    out.extend_from_slice(
                        format!("\n{} Execution cycles exceeded.\n", cycles).as_bytes(),
                    );
                    break;
                }
            }
            Event::Print(bytes) => {
                out.extend_from_slice(bytes);
            }
            Event::Input => {
                let value = minimal::term::next_value(&mut input).unwrap();
                runtime.enter(value);
            }
            Event::Dump(_) => {}
        }
        prev_running = event == Event::Running;
    }
    out
}

/// Output followed by the closing report, as the executable prints it.
pub fn transcript(source: &str, input: &[u8]) -> String {
    let mut r = runtime(source);
    let out = exec_input(&mut r, input);
    let mut s = String::from_utf8_lossy(&out).to_string();
    s.push_str(&minimal::term::summary(r.instruction_count()));
    s
}
