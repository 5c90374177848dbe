use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::RunSummary;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let summary = run::run(&args)?;

    if !args.quiet {
        report::print_summary(&summary);
    }
    report::print_incomplete_warning(&summary);

    Ok(ExitStatus::for_scan(&summary.scan))
}
