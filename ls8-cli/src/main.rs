//! `ls8`: load a text program image and run it on the LS-8 machine.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_runtime::{HaltReason, IOHandler, VMConfig, VM};

#[derive(Parser, Debug)]
#[command(name = "ls8", version, about = "Run an LS-8 program image.")]
struct Args {
    /// Program image: one 8-digit binary literal per line, `#` comments.
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,

    /// Log one line per executed instruction (PC, bytes, registers, flags).
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Stop after this many instructions.
    #[arg(long, value_name = "N")]
    max_cycles: Option<u64>,

    /// Print the disassembly of the image and exit without running it.
    #[arg(long, default_value_t = false)]
    disassemble: bool,
}

fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let program = ls8_loader::load_file(&args.program)
        .with_context(|| format!("loading {}", args.program.display()))?;

    if args.disassemble {
        print!("{}", ls8_disassembler::disassemble(&program));
        return Ok(());
    }

    let config = VMConfig {
        max_cycles: args.max_cycles,
        trace: args.trace,
    };
    let mut vm = VM::with_io(program, IOHandler::stdout(), config);
    let result = vm
        .run()
        .with_context(|| format!("running {}", args.program.display()))?;

    if result.halt_reason == HaltReason::CycleLimit {
        tracing::warn!(cycles = result.cycles, "stopped at cycle limit");
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.trace);
    run(args)
}
