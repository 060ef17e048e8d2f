use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rowstats",
    version,
    about = "Per-key min/mean/max summary of a ';'-delimited measurements file"
)]
struct Args {
    /// Input file, one `key;measurement` record per line
    input: PathBuf,

    /// Worker count (defaults to the available cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Print elapsed wall time to stderr
    #[arg(long)]
    timing: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let workers = args.threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1)
    });

    let start = Instant::now();
    let report = rowstats::run(&args.input, workers)?;
    println!("{report}");
    if args.timing {
        eprintln!("{:?}", start.elapsed());
    }
    Ok(())
}
