use crate::{
    cli::{GenerateArgs, LogFormat},
    config::IndexConfig,
    error::Result,
    index::{generate_index, IndexSummary},
};

/// Runs the `generate` command: builds the index and reports the outcome on stdout.
pub struct Runner {
    args: GenerateArgs,
    log_format: LogFormat,
}

impl Runner {
    pub fn new(args: GenerateArgs, log_format: LogFormat) -> Self {
        Self { args, log_format }
    }

    /// Executes the complete index generation workflow
    pub fn run(self) -> Result<IndexSummary> {
        let config = self.config();
        let summary = generate_index(&config)?;

        if config.dry_run {
            print!("{}", summary.content);
        } else if self.log_format == LogFormat::Json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "Recipe index with {} recipes generated successfully in {}.",
                summary.recipes,
                summary.output_path.display()
            );
        }
        Ok(summary)
    }

    fn config(&self) -> IndexConfig {
        IndexConfig {
            base_dir: self.args.base_dir.clone(),
            format: self.args.format.clone(),
            dry_run: self.args.dry_run,
        }
    }
}

/// Main entry point for the `generate` command
pub fn run(args: GenerateArgs, log_format: LogFormat) -> Result<IndexSummary> {
    Runner::new(args, log_format).run()
}
