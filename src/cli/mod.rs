// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands the resulting
// configuration to Layer 2. No flattening logic lives here.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::FlattenArgs;

use crate::application::flatten_use_case::FlattenUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "question-flattener",
    version,
    about = "Flatten the nested exam question catalog into a flat question list."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: FlattenArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let use_case = FlattenUseCase::new(self.args.into());
        if let Err(err) = use_case.execute() {
            tracing::error!(kind = ?err.kind(), "Flattening aborted: {}", err);
            return Err(err.into());
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::flatten_use_case::FlattenConfig;
    use std::path::PathBuf;

    #[test]
    fn test_no_arguments_gives_default_config() {
        let cli = Cli::try_parse_from(["question-flattener"]).unwrap();
        let cfg: FlattenConfig = cli.args.into();
        assert_eq!(cfg, FlattenConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "question-flattener",
            "--input",
            "in.json",
            "--output",
            "out.json",
            "--max-depth",
            "5",
            "--lenient-answers",
        ])
        .unwrap();
        let cfg: FlattenConfig = cli.args.into();
        assert_eq!(cfg.input, PathBuf::from("in.json"));
        assert_eq!(cfg.output, PathBuf::from("out.json"));
        assert_eq!(cfg.max_depth, Some(5));
        assert!(cfg.lenient_answers);
    }

    #[test]
    fn test_rejects_non_numeric_depth() {
        assert!(Cli::try_parse_from(["question-flattener", "--max-depth", "deep"]).is_err());
    }
}
