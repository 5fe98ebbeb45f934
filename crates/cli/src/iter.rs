use clap::Parser;
use eyre::Result;
use fibseq::{state::MAX_STEPS_DEFAULT, Overflow};
use fibseq_cli::{IterOptions, Strategy};

#[derive(Parser)]
/// Advance a (current, next) Fibonacci pair of 32-bit integers
#[command(name = "fib-iter", version)]
struct FibIterCli {
    /// number of steps
    #[arg(short = 'k', long, default_value_t = MAX_STEPS_DEFAULT)]
    steps: u64,

    /// overflow policy: wrap, stop or error
    #[arg(short = 'o', long, default_value = "wrap")]
    overflow: Overflow,

    /// strategy: jump or loop
    #[arg(short = 's', long, default_value = "jump")]
    strategy: Strategy,

    /// print the final pair to standard output
    #[arg(short = 'p', long)]
    print: bool,

    /// log level
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = FibIterCli::parse();
    fibseq_cli::init_logging(&args.log_level);

    let options =
        IterOptions { steps: args.steps, overflow: args.overflow, strategy: args.strategy, print: args.print };
    fibseq_cli::run_iter(options, &mut std::io::stdout().lock())?;
    Ok(())
}
