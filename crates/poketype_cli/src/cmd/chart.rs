use anyhow::Result;
use clap::Args;
use poketype::{matchups, Error, Perspective, Type};

use super::{OutputFormat, RulesetArgs};
use crate::models::ChartResponse;
use crate::utils::render_matchups;

#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Type to look up (e.g. ghost)
    #[arg(value_name = "TYPE")]
    pub ty: String,

    /// List the types that hit this type instead of the types it hits
    #[arg(short, long)]
    pub defending: bool,

    #[command(flatten)]
    pub ruleset: RulesetArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: ChartArgs) -> Result<()> {
    print!("{}", report(&args)?);
    Ok(())
}

/// Matchup lists of one type, as text or JSON.
pub fn report(args: &ChartArgs) -> Result<String> {
    let ty: Type = args.ty.parse()?;
    let revision = args.ruleset.revision();
    if !revision.contains(ty) {
        return Err(Error::UnavailableType { ty, revision }.into());
    }

    let perspective = if args.defending {
        Perspective::Defending
    } else {
        Perspective::Attacking
    };
    let lists = matchups(ty, perspective, revision);

    match args.format {
        OutputFormat::Text => Ok(render_matchups(ty, perspective, revision, &lists)),
        OutputFormat::Json => {
            let response = ChartResponse {
                ty,
                revision,
                perspective: if args.defending { "defending" } else { "attacking" },
                matchups: lists,
            };
            Ok(serde_json::to_string_pretty(&response)? + "\n")
        }
    }
}
