use std::path::PathBuf;

use clap::Parser;
use paper_review::config::Config;

#[derive(Parser, Debug, Clone)]
#[command(name = "paper-review", about = "Review papers with Gemini and ChatGPT", version)]
pub struct Cli {
    /// Directory holding the papers (.txt, .pdf in any letter case, so Paper.PDF
    /// counts). Defaults to PAPERS_DIR or ./papers.
    #[arg(value_name = "PAPERS_DIR")]
    pub papers_dir: Option<PathBuf>,

    /// Report file; `.csv` writes CSV, anything else XLSX.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Gemini model, e.g. models/gemini-flash-latest.
    #[arg(long = "gemini-model")]
    pub gemini_model: Option<String>,

    /// OpenAI chat model, e.g. gpt-5.1.
    #[arg(long = "openai-model")]
    pub openai_model: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Skip papers that fail instead of aborting the whole run.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Do not print the summary table after the run.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// CLI flags override config file and environment values.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(dir) = &self.papers_dir {
            cfg.set("PAPERS_DIR", dir.to_string_lossy());
        }
        if let Some(out) = &self.output {
            cfg.set("REPORT_PATH", out.to_string_lossy());
        }
        if let Some(model) = &self.gemini_model {
            cfg.set("GEMINI_MODEL", model.as_str());
        }
        if let Some(model) = &self.openai_model {
            cfg.set("OPENAI_MODEL", model.as_str());
        }
        if let Some(secs) = self.timeout {
            cfg.set("REQUEST_TIMEOUT", secs.to_string());
        }
    }
}
