//! webshop-kg CLI: catalog CSV → Turtle graph + SPARQL report.

use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use webshop_kg::config::PipelineConfig;
use webshop_kg::pipeline::Pipeline;

#[derive(Parser)]
#[command(
    name = "webshop-kg",
    version,
    about = "Convert a webshop catalog to RDF and run the SPARQL report"
)]
struct Cli {
    /// TOML config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Product catalog CSV.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Turtle output path.
    #[arg(long)]
    graph_out: Option<PathBuf>,

    /// Query report output path.
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Seed for the synthetic ratings (reproducible output).
    #[arg(long)]
    rating_seed: Option<u64>,

    /// Brand asserted for every item.
    #[arg(long)]
    brand: Option<String>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn into_config(self) -> Result<(PipelineConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(path) = self.graph_out {
            config.graph_output = path;
        }
        if let Some(path) = self.report_out {
            config.report_output = path;
        }
        if let Some(seed) = self.rating_seed {
            config.rating_seed = Some(seed);
        }
        if let Some(brand) = self.brand {
            config.brand = brand;
        }
        Ok((config, self.print_config))
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, print_config) = Cli::parse().into_config()?;

    if print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let summary = Pipeline::new(config).run()?;

    println!("Categories created:");
    for category in &summary.categories {
        println!("  {category}");
    }
    println!("{summary}");

    Ok(())
}
