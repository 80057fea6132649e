extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Error, Grid};
use crate::mach::{Capabilities, DumpKind, Event, Runtime, Snapshot};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod input;

pub use input::next_value;

/// The program is always read from here, relative to the working directory.
pub const PROGRAM_FILE: &str = "input.txt";

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub capabilities: Capabilities,
    /// Wait for the operator after each debug dump.
    pub pause: bool,
    /// Dump everything once the program stops.
    pub dump_on_exit: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            capabilities: Capabilities::default(),
            pause: true,
            dump_on_exit: false,
        }
    }
}

pub fn main(options: Options) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let grid = match load(PROGRAM_FILE) {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            std::process::exit(1);
        }
    };
    if let Err(error) = main_loop(grid, &options, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(grid: Grid, options: &Options, interrupted: Arc<AtomicBool>) -> io::Result<()> {
    let mut runtime = Runtime::new(grid, options.capabilities);
    let debugger = Debugger::new(options.pause);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Print(bytes) => {
                output.write_all(&bytes)?;
                output.flush()?;
            }
            Event::Input => {
                output.flush()?;
                runtime.enter(next_value(&mut input)?);
            }
            Event::Dump(snapshot) => {
                output.flush()?;
                if !debugger.dump(&snapshot)? {
                    runtime.interrupt();
                }
            }
            Event::Stopped => break,
        }
    }
    if options.dump_on_exit {
        output.flush()?;
        debugger.dump(&runtime.snapshot(DumpKind::Exit))?;
    }
    write!(output, "{}", summary(runtime.instruction_count()))?;
    output.flush()
}

/// Closing report printed after every run.
pub fn summary(count: usize) -> String {
    format!(
        "\n\nProgram Execution Complete.\n{} Instructions Processed.\n",
        count
    )
}

pub fn load(filename: &str) -> Result<Grid, Error> {
    match fs::read(filename) {
        Ok(bytes) => Ok(Grid::load(&bytes)),
        Err(error) => Err(Error::from_io(&error, filename)),
    }
}

/// Prints dumps to stderr and, when a terminal is attached, waits for the
/// operator before letting the program continue.
struct Debugger {
    interface: Option<Interface<DefaultTerminal>>,
}

impl Debugger {
    fn new(pause: bool) -> Debugger {
        let interface = if pause && io::stdin().is_terminal() {
            Interface::new("minimal").ok()
        } else {
            None
        };
        if let Some(interface) = &interface {
            interface.set_report_signal(Signal::Interrupt, true);
        }
        Debugger { interface }
    }

    /// Returns `false` if the operator asked to stop.
    fn dump(&self, snapshot: &Snapshot) -> io::Result<bool> {
        let mut views = vec![];
        match snapshot.kind {
            DumpKind::Heap => {
                views.push(snapshot.heap_numeric_view());
                views.push(snapshot.heap_char_view());
            }
            DumpKind::Stack => views.extend(snapshot.stack_view()),
            DumpKind::Exit => {
                views.push(snapshot.ip_view());
                views.push(snapshot.heap_numeric_view());
                views.push(snapshot.heap_char_view());
                views.extend(snapshot.stack_view());
            }
        }
        let stderr = io::stderr();
        let mut err = stderr.lock();
        for view in views {
            writeln!(err, "\n{}", decorate_view(&view))?;
            err.flush()?;
            if !self.pause()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn pause(&self) -> io::Result<bool> {
        let interface = match &self.interface {
            Some(interface) => interface,
            None => return Ok(true),
        };
        interface.set_prompt("-- ENTER to continue --")?;
        match interface.read_line()? {
            ReadResult::Input(_) => Ok(true),
            ReadResult::Signal(_) | ReadResult::Eof => Ok(false),
        }
    }
}

fn decorate_view(view: &str) -> String {
    let mut lines = view.splitn(2, '\n');
    let header = lines.next().unwrap_or_default();
    let body = lines.next().unwrap_or_default();
    format!("{}\n{}", Style::new().bold().paint(header), body)
}
