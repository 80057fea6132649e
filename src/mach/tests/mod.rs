use crate::lang::Grid;
use crate::mach::{Capabilities, Event, Runtime};


fn runtime(source: &str) -> Runtime {
    Runtime::new(Grid::from(source), Capabilities::default())
}

fn run(runtime: &mut Runtime) -> Vec<u8> {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> Vec<u8> {
    let mut out = vec![];
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    panic!("{} Execution cycles exceeded.", cycles);
                }
            }
            Event::Print(bytes) => out.extend_from_slice(bytes),
            Event::Input => runtime.enter(None),
            Event::Dump(_) => {}
        }
        prev_running = event == Event::Running;
    }
    out
}
