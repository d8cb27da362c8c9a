use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use runstat::demo;
use runstat::statistics::Accumulator;

#[derive(Parser)]
#[command(name = "runstat")]
#[command(about = "Running mean and variance of numeric input", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the running statistics after adding each of 0..COUNT
    Demo {
        #[arg(short, long, default_value_t = 10)]
        count: u64,
    },
    /// Summarize whitespace-separated numbers
    Summarize {
        /// Input file, stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Also report sample variance and standard deviation
        #[arg(long)]
        sample: bool,

        /// Digits after the decimal point
        #[arg(short, long, default_value_t = 6)]
        precision: usize,
    },
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            log::info!("Reading numbers from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            log::info!("Reading numbers from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn parse_values(input: &str) -> Result<Accumulator> {
    let mut acc = Accumulator::new();
    for (i, token) in input.split_whitespace().enumerate() {
        let value: f64 = token
            .parse()
            .with_context(|| format!("invalid number {:?} at position {}", token, i + 1))?;
        acc.add(value);
    }
    log::debug!("Parsed {} values", acc.len());
    Ok(acc)
}

fn write_summary<W: Write>(
    out: &mut W,
    acc: &Accumulator,
    sample: bool,
    precision: usize,
) -> Result<()> {
    writeln!(out, "count={}", acc.len())?;

    let mean = acc.checked_mean().context("cannot summarize input")?;
    let var = acc.checked_variance().context("cannot summarize input")?;
    let std = acc.checked_std_deviation().context("cannot summarize input")?;
    let sample_var = if sample {
        let sample_var = acc
            .checked_sample_variance()
            .context("cannot compute sample variance")?;
        Some(sample_var)
    } else {
        None
    };

    writeln!(out, "mean={:.*}", precision, mean)?;
    writeln!(out, "var={:.*}", precision, var)?;
    writeln!(out, "std={:.*}", precision, std)?;

    if let Some(sample_var) = sample_var {
        writeln!(out, "sample_var={:.*}", precision, sample_var)?;
        writeln!(out, "sample_std={:.*}", precision, acc.sample_std_deviation())?;
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Demo { count } => {
            log::info!("Running demo over 0..{}", count);
            demo::write_progression(&mut out, count).context("failed to write output")?;
        }
        Command::Summarize {
            file,
            sample,
            precision,
        } => {
            let input = read_input(file.as_deref())?;
            let acc = parse_values(&input)?;
            write_summary(&mut out, &acc, sample, precision)?;
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Args::parse();
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use runstat::StatsError;

    #[test]
    fn test_parse_values() {
        let acc = parse_values("0 1 2\n3\t4 5\n6 7 8 9\n").unwrap();

        assert_eq!(acc.len(), 10);
        assert!((acc.mean() - 4.5).abs() < 1e-12);
        assert!((acc.variance() - 8.25).abs() < 1e-12);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_values("1.0 2.0 abc 4.0").unwrap_err();

        assert!(
            err.to_string().contains("\"abc\" at position 3"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_summary_output() {
        let acc = parse_values("2 4 4 4 5 5 7 9").unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &acc, true, 3).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "count=8\nmean=5.000\nvar=4.000\nstd=2.000\nsample_var=4.571\nsample_std=2.138\n"
        );
    }

    #[test]
    fn test_summary_of_empty_input_reports_count_then_fails() {
        let acc = parse_values("  \n ").unwrap();
        let mut out = Vec::new();

        let err = write_summary(&mut out, &acc, false, 2).unwrap_err();
        assert_eq!(String::from_utf8(out).unwrap(), "count=0\n");
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::Empty),
            "unexpected error: {:#}",
            err
        );
    }

    #[test]
    fn test_sample_needs_two_values() {
        let acc = parse_values("3.5").unwrap();
        let mut out = Vec::new();

        let err = write_summary(&mut out, &acc, true, 2).unwrap_err();
        // No statistics are written when the sample query cannot be answered
        assert_eq!(String::from_utf8(out).unwrap(), "count=1\n");
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::InsufficientData {
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_single_value_without_sample() {
        let acc = parse_values("3.5").unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &acc, false, 1).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "count=1\nmean=3.5\nvar=0.0\nstd=0.0\n"
        );
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["runstat", "demo", "--count", "3"]).unwrap();
        assert!(matches!(args.command, Command::Demo { count: 3 }));

        let args = Args::try_parse_from(["runstat", "summarize", "-", "--sample"]).unwrap();
        match args.command {
            Command::Summarize {
                file,
                sample,
                precision,
            } => {
                assert_eq!(file, Some(PathBuf::from("-")));
                assert!(sample);
                assert_eq!(precision, 6);
            }
            _ => panic!("expected summarize"),
        }
    }
}
