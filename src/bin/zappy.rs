use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "zappy")]
#[command(about = "Compress and decompress zappy blocks")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, required_unless_present = "check")]
    output: Option<PathBuf>,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Validate that the input decodes cleanly and exit (0=valid, 1=corrupt, 2=error)
    #[arg(long)]
    check: bool,

    /// Show size and throughput statistics
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Exit codes for --check mode
const EXIT_VALID: u8 = 0;
const EXIT_CORRUPT: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Format bytes as human-readable string
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn read_input(path: &PathBuf) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if path.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        File::open(path)?.read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_output(path: &PathBuf, data: &[u8]) -> io::Result<()> {
    if path.to_str() == Some("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        let mut file = File::create(path)?;
        file.write_all(data)?;
        file.flush()
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.check {
        return run_check_mode(&args);
    }

    let output_path = args.output.as_ref().expect("output required when not in check mode");
    let data = read_input(&args.input)?;

    let start = Instant::now();
    let result = if args.decompress {
        zappy::decode(Vec::new(), &data)?
    } else {
        zappy::encode(Vec::new(), &data)
    };
    let elapsed = start.elapsed();

    write_output(output_path, &result)?;

    if args.verbose && !args.quiet {
        let (raw, encoded) = if args.decompress {
            (result.len() as u64, data.len() as u64)
        } else {
            (data.len() as u64, result.len() as u64)
        };
        eprintln!("{} complete:", if args.decompress { "Decompression" } else { "Compression" });
        eprintln!("  Input bytes:      {} ({})", data.len(), format_bytes(data.len() as u64));
        eprintln!("  Output bytes:     {} ({})", result.len(), format_bytes(result.len() as u64));
        if raw > 0 {
            eprintln!("  Ratio:            {:.3}", encoded as f64 / raw as f64);
        }
        eprintln!("  Time:             {:.2?}", elapsed);
        if elapsed.as_secs_f64() > 0.0 {
            eprintln!(
                "  Throughput:       {:.1} MB/s",
                raw as f64 / elapsed.as_secs_f64() / 1_000_000.0
            );
        }
    }

    Ok(0)
}

fn run_check_mode(args: &Args) -> Result<u8, Box<dyn std::error::Error>> {
    let data = read_input(&args.input)?;

    match zappy::decode(Vec::new(), &data) {
        Ok(decoded) => {
            if !args.quiet {
                eprintln!("Valid: yes");
                eprintln!("Decoded size: {} bytes", decoded.len());
            }
            Ok(EXIT_VALID)
        }
        Err(e) => {
            if !args.quiet {
                eprintln!("Valid: no ({})", e);
            }
            Ok(EXIT_CORRUPT)
        }
    }
}
