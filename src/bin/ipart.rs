use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use ipart::error::Result;
use ipart::render::ListFile;
use ipart::{
    form, render, Enumerator, Mode, Partition, PartitionError, Partitions, Request, ResourceLimits,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: ipart [o|u] NUMBER | ipart f NUMBER LENGTH [--ordered]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Enumerate integer partitions.
#[derive(Parser, Debug)]
#[command(name = "ipart", version, about, long_about = None, allow_negative_numbers = true)]
struct Opts {
    /// `[MODE] NUMBER [LENGTH]`. MODE is o = ordered (compositions, the default),
    /// u = unordered or f = fixed-length; LENGTH is required for (and only accepted by) f.
    #[arg(required = true, value_name = "ARGS")]
    operands: Vec<String>,

    /// Fixed-length mode: emit every ordering instead of one non-increasing form.
    #[arg(long)]
    ordered: bool,

    /// Delimiter between parts in text output.
    #[arg(long, default_value = ",")]
    sep: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Stop after this many partitions.
    #[arg(long)]
    limit: Option<usize>,

    /// Print only the number of partitions.
    #[arg(long, conflicts_with_all = ["limit", "form_dir", "txt_dir", "csv_dir"])]
    count: bool,

    /// Also write a FORM header file `<NUMBER><MODE>[<LENGTH>].hf` into this directory.
    #[arg(long)]
    form_dir: Option<PathBuf>,

    /// Also write a space-separated list `<NUMBER><MODE>[<LENGTH>].txt` into this directory.
    #[arg(long)]
    txt_dir: Option<PathBuf>,

    /// Also write a comma-separated list `<NUMBER><MODE>[<LENGTH>].csv` into this directory.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Fail instead of caching more than this many partitions.
    #[arg(long)]
    max_partitions: Option<usize>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("IPART_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn stdout_err(source: std::io::Error) -> PartitionError {
    PartitionError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

fn limits(opts: &Opts) -> ResourceLimits {
    match opts.max_partitions {
        Some(max) => ResourceLimits::default().with_max_partitions(max),
        None => ResourceLimits::default(),
    }
}

fn enumerate(opts: &Opts, req: &Request) -> Result<Vec<Partition>> {
    if let Some(k) = opts.limit {
        debug!(limit = k, "lazy enumeration");
        return Ok(Partitions::new(req).take(k).collect());
    }

    let mut e = Enumerator::with_limits(limits(opts));
    let sols = e.run_shared(req)?;
    drop(e);
    Ok(Arc::unwrap_or_clone(sols))
}

fn run(opts: &Opts) -> Result<()> {
    let req = Request::from_operands(&opts.operands, opts.ordered)?;
    if opts.ordered && !matches!(req.mode, Mode::FixedLength { .. }) {
        warn!("--ordered only affects fixed-length mode (f)");
    }

    if opts.count {
        let n = Enumerator::with_limits(limits(opts)).count(&req)?;
        println!("{n}");
        return Ok(());
    }

    let parts = enumerate(opts, &req)?;

    match opts.format {
        OutputFormat::Text => {
            eprintln!("{} partitions of {}:", req.mode, req.n);
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render::write_text(&mut out, &parts, &opts.sep).map_err(stdout_err)?;
            out.flush().map_err(stdout_err)?;
        }
        OutputFormat::Json => println!("{}", render::to_json(&req, &parts)?),
    }

    if let Some(dir) = &opts.form_dir {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let path = form::export(dir, &req, &args, &parts)?;
        eprintln!("Wrote to {}", path.display());
    }

    let lists = [(&opts.txt_dir, ListFile::Txt), (&opts.csv_dir, ListFile::Csv)];
    for (dir, kind) in lists {
        if let Some(dir) = dir {
            let path = render::export_list(dir, &req, kind, &parts)?;
            eprintln!("Wrote to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let opts = Opts::parse();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_invalid_input() => {
            eprintln!("ipart: {e}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("ipart: {e}");
            ExitCode::from(1)
        }
    }
}
