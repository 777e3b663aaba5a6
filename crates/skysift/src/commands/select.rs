use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use skysift_core::filters::selected_object_ids;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Path to the alert metadata table (JSON, keyed by candid).
    #[arg(long)]
    pub alerts: PathBuf,
    /// Optional TOML file overriding the default thresholds.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the first N surviving rows of the table.
    #[arg(long)]
    pub show: Option<usize>,
}

pub fn run(args: SelectArgs) -> Result<()> {
    let thresholds = super::load_thresholds(args.config.as_deref())?;
    let output = super::run_selection(&args.alerts, &thresholds)?;

    println!("{}", super::summary_table(&output.summary));

    let candidates = selected_object_ids(&output.dataframe)?;
    println!(
        "\n{} of {} alerts selected ({:.2}%), {} distinct objects.",
        output.summary.selected,
        output.summary.total,
        output.summary.selected_fraction() * 100.0,
        candidates.len(),
    );

    if let Some(rows) = args.show {
        println!("\n{}", output.dataframe.head(Some(rows)));
    }

    Ok(())
}
