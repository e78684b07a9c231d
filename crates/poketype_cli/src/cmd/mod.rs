pub mod batch;
pub mod calc;
pub mod chart;

use clap::{Args, ValueEnum};
use poketype::{resolve_revision, Calculator, Revision, TypePolicy, DEFAULT_GENERATION};

/// Chart selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct RulesetArgs {
    /// Game generation; picks the type chart revision
    #[arg(short, long, default_value_t = DEFAULT_GENERATION)]
    pub generation: u8,

    /// Chart revision (original, revised, modern); overrides --generation
    #[arg(short, long)]
    pub revision: Option<Revision>,
}

impl RulesetArgs {
    pub fn revision(&self) -> Revision {
        self.revision
            .unwrap_or_else(|| resolve_revision(self.generation))
    }

    pub fn calculator(&self, strict: bool) -> Calculator {
        let policy = if strict {
            TypePolicy::Strict
        } else {
            TypePolicy::Permissive
        };
        Calculator::new(self.revision()).with_policy(policy)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
