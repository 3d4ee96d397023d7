use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "wca-double-check")]
#[command(about = "Flag registered competitors whose personal bests call for a result double-check")]
#[command(version)]
pub struct CliArgs {
    /// WCA competition ID (e.g. "WC2025"), as it appears in the competition URL
    #[arg(value_name = "COMPETITION_ID")]
    pub competition_id: String,

    /// Print the report as markdown lines instead of a table
    #[arg(long)]
    pub markdown: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Override console width for testing (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Markdown,
    Json,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.markdown && self.json {
            return Err("Cannot specify both --markdown and --json".to_string());
        }

        if self.console_width == Some(0) {
            return Err("--console-width must be greater than 0".to_string());
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Console
        }
    }
}
