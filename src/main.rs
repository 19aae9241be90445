use anyhow::Context;
use clap::{Parser, Subcommand};
use conntest::util::{format_hex_compact, pretty_hex};
use conntest::{init_logger, log_error, log_info, Trace};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conntest")]
#[command(about = "Inspect recorded connection traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every transaction in a trace
    Show {
        path: PathBuf,
        /// Print buffers as a hex dump
        #[arg(short, long)]
        pretty: bool,
    },
    /// Validate a trace and print a summary
    Check { path: PathBuf },
}

fn load(path: &Path) -> anyhow::Result<Trace> {
    Trace::load(path)
        .inspect_err(|e| log_error(&format!("Trace {} rejected: {e}", path.display())))
        .with_context(|| format!("failed to load trace {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { path, pretty } => {
            let trace = load(&path)?;
            for (i, io) in trace.ops.iter().enumerate() {
                if pretty {
                    println!("#{i} write ({} bytes)", io.write.len());
                    println!("{}", pretty_hex(&io.write, 16));
                    println!("#{i} read ({} bytes)", io.read.len());
                    println!("{}", pretty_hex(&io.read, 16));
                } else {
                    println!(
                        "#{i} write=[{}] read=[{}]",
                        format_hex_compact(&io.write),
                        format_hex_compact(&io.read)
                    );
                }
            }
        }
        Commands::Check { path } => {
            let trace = load(&path)?;
            log_info(&format!("Validated trace {}", path.display()));
            println!(
                "{} transactions, {} bytes written, {} bytes read",
                trace.ops.len(),
                trace.bytes_written(),
                trace.bytes_read()
            );
        }
    }

    Ok(())
}
