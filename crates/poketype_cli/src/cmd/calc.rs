use anyhow::Result;
use clap::Args;
use poketype::classify;

use super::{OutputFormat, RulesetArgs};
use crate::models::CalcResponse;
use crate::utils::render_results;

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Opponent's types, comma separated (e.g. water,flying)
    #[arg(short, long, value_delimiter = ',')]
    pub opponent: Vec<String>,

    /// Candidate move types, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub moves: Vec<String>,

    /// Your own types, for the same-type attack bonus
    #[arg(short, long, value_delimiter = ',')]
    pub user: Vec<String>,

    #[command(flatten)]
    pub ruleset: RulesetArgs,

    /// Reject unknown type names instead of treating them as neutral
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: CalcArgs) -> Result<()> {
    print!("{}", report(&args)?);
    Ok(())
}

/// Text report or JSON document for one calculation.
pub fn report(args: &CalcArgs) -> Result<String> {
    let calculator = args.ruleset.calculator(args.strict);
    let eff = calculator.compute(
        args.opponent.as_slice(),
        args.moves.as_slice(),
        args.user.as_slice(),
    )?;
    let buckets = classify(&eff);

    match args.format {
        OutputFormat::Text => Ok(render_results(
            &args.opponent,
            &args.moves,
            &args.user,
            calculator.revision(),
            &buckets,
        )),
        OutputFormat::Json => {
            let response = CalcResponse {
                id: None,
                revision: calculator.revision(),
                multipliers: eff,
                buckets,
            };
            Ok(serde_json::to_string_pretty(&response)? + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use poketype::Error;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct Calc {
        #[command(flatten)]
        args: CalcArgs,
    }

    fn parse(argv: &[&str]) -> CalcArgs {
        Calc::try_parse_from(std::iter::once("calc").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_json_report() {
        let args = parse(&["-o", "water,flying", "-m", "electric,ground", "-u", "electric", "-f", "json"]);
        let json: serde_json::Value = serde_json::from_str(&report(&args).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "revision": "modern",
                "multipliers": { "electric": 6.0, "ground": 0.0 },
                "buckets": {
                    "super_effective": [{ "type": "electric", "multiplier": 6.0 }],
                    "neutral": [],
                    "not_very_effective": [],
                    "immune": [{ "type": "ground", "multiplier": 0.0 }]
                }
            })
        );
    }

    #[test]
    fn test_text_report_uses_generation() {
        let args = parse(&["-o", "psychic", "-m", "ghost", "-g", "1"]);
        let text = report(&args).unwrap();
        assert!(text.contains("Chart: original"));
        assert!(text.contains(" - Ghost: 0x"));
    }

    #[test]
    fn test_strict_report_rejects_long_opponent_list() {
        let args = parse(&["-o", "fire,water,grass", "-m", "fire", "--strict"]);
        let err = report(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::TooManyTypes { count: 3, max: 2 })
        );
    }
}
