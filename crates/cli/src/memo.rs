use clap::Parser;
use eyre::Result;
use fibseq::Cache;

#[derive(Parser)]
/// Print the first N Fibonacci numbers using memoized recursion
#[command(name = "fib-memo", version)]
struct FibMemoCli {
    /// number of terms; read from standard input when omitted
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// number of cache slots
    #[arg(short = 'c', long, default_value_t = Cache::CAPACITY_DEFAULT)]
    capacity: usize,

    /// log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = FibMemoCli::parse();
    fibseq_cli::init_logging(&args.log_level);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    fibseq_cli::run_memo(args.count, args.capacity, stdin, &mut stdout)
}
