//! # Minimal-2D
//!
//! Runs `input.txt` from the working directory.
//!

use clap::Parser;
use minimal::mach::Capabilities;
use minimal::term::{self, Options};

/// Interpreter for the Minimal-2D programming language.
#[derive(Parser)]
#[command(name = "minimal", version, about)]
struct Args {
    /// Treat `V ^ ! [ ] @` as no-ops and run without a stack.
    #[arg(long)]
    no_stack: bool,

    /// Treat `) ; ~ & (` as no-ops.
    #[arg(long)]
    no_extensions: bool,

    /// Treat `# @` as no-ops.
    #[arg(long)]
    no_debug: bool,

    /// Don't wait for ENTER after a debug dump.
    #[arg(long)]
    no_pause: bool,

    /// Dump the instruction pointer, heap and stack when the program stops.
    #[arg(long)]
    dump_on_exit: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            capabilities: Capabilities {
                stack: !args.no_stack,
                extensions: !args.no_extensions,
                debug: !args.no_debug,
            },
            pause: !args.no_pause,
            dump_on_exit: args.dump_on_exit,
        }
    }
}

fn main() {
    term::main(Args::parse().into());
}
