use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use salary_charts::layout::LayoutConfig;
use salary_charts::models::Category;
use salary_charts::pipeline::{self, DashboardConfig};
use salary_charts::stats::GroupSummary;
use salary_charts::storage;
use salary_charts::viz::NumberFormat;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "salary-charts",
    version,
    about = "Render a pie / bar / parallel-coordinates dashboard from a salary CSV"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the three charts into one SVG or PNG file.
    Render(RenderArgs),
    /// Print the aggregated summaries (and optionally save them).
    Stats(StatsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input CSV with work_year, experience_level, company_size, salary_in_usd, remote_ratio.
    #[arg(short, long, default_value = "ds_salaries.csv")]
    data: PathBuf,
    /// Output image (.svg or .png).
    #[arg(short, long, default_value = "dashboard.svg")]
    out: PathBuf,
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1400)]
    width: u32,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Locale for thousands separators in tick labels (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// TrueType font to register for text (required for PNG output).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Input CSV.
    #[arg(short, long, default_value = "ds_salaries.csv")]
    data: PathBuf,
    /// Directory to save `company_size_counts` and `mean_salary_by_experience` into.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Format of the saved summaries.
    #[arg(long, value_enum, default_value_t = OutFormat::Csv)]
    format: OutFormat,
    /// Locale for printed numbers.
    #[arg(long, default_value = "en")]
    locale: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let res = match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Stats(args) => cmd_stats(args),
    };
    if let Err(e) = res {
        log::error!("Error loading or processing data: {:#}", e);
        std::process::exit(1);
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let cfg = DashboardConfig {
        data: args.data,
        out: args.out,
        width: args.width,
        height: args.height,
        locale: args.locale,
        font: args.font,
        layout: LayoutConfig::default(),
    };
    pipeline::run(&cfg)?;
    eprintln!("Wrote dashboard to {}", cfg.out.display());
    Ok(())
}

fn save<K: Category>(summary: &GroupSummary<K>, dir: &Path, name: &str, format: OutFormat) -> Result<()> {
    let path = match format {
        OutFormat::Csv => dir.join(format!("{name}.csv")),
        OutFormat::Json => dir.join(format!("{name}.json")),
    };
    match format {
        OutFormat::Csv => storage::save_summary_csv(summary, &path)?,
        OutFormat::Json => storage::save_summary_json(summary, &path)?,
    }
    eprintln!("Saved {} groups to {}", summary.len(), path.display());
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let records = storage::load_records(&args.data)?;
    let summaries = pipeline::summarize(&records);
    let fmt = NumberFormat::new(&args.locale);

    println!("records: {}", records.len());
    println!("company size counts:");
    for g in summaries.size_counts.iter() {
        println!("  {:<8} {}", g.key.display_name(), g.value);
    }
    println!("mean salary by experience level:");
    for g in summaries.salary_by_level.iter() {
        println!("  {:<10} {}", g.key.display_name(), fmt.currency(g.value));
    }

    if let Some(dir) = args.out_dir.as_ref() {
        std::fs::create_dir_all(dir)?;
        save(&summaries.size_counts, dir, "company_size_counts", args.format)?;
        save(&summaries.salary_by_level, dir, "mean_salary_by_experience", args.format)?;
    }
    Ok(())
}
