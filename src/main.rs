//! Command-line driver: replay the builtin sequences under every policy.

use clap::Parser;

use framesim::console::{render_comparison, render_run, DisplayMode};
use framesim::workload::{compare_policies, Workload, DEFAULT_FRAMES};

#[derive(Parser, Debug)]
#[command(name = "framesim")]
struct Cli {
    /// Number of frames.
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    frames: usize,

    /// Render the per-fault trace for every run.
    #[arg(short, long)]
    detailed: bool,
}

fn main() -> framesim::Result<()> {
    let cli = Cli::parse();
    let mode = if cli.detailed {
        DisplayMode::Detailed
    } else {
        DisplayMode::Summary
    };

    for workload in Workload::builtin() {
        let comparison = compare_policies(cli.frames, &workload.references)?;

        println!("==== {} ====", workload.name);
        for report in &comparison.reports {
            print!("{}", render_run(report, workload.probe, mode));
        }
        print!("{}", render_comparison(workload.name, &comparison));
        println!();
    }

    Ok(())
}
