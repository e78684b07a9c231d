use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use poketype::{classify, Calculator, TypePolicy};
use std::io::{self, BufRead, BufWriter, Write};

use super::RulesetArgs;
use crate::models::{BatchResponse, CalcRequest, CalcResponse, ErrorResponse};

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Defaults for requests that name neither a generation nor a revision
    #[command(flatten)]
    pub ruleset: RulesetArgs,

    /// Apply the strict type policy to every request
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: BatchArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read request from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<CalcRequest>(&line) {
            Ok(request) => respond(&request, &args),
            Err(e) => {
                warn!("line {}: malformed request: {}", n + 1, e);
                BatchResponse::Err(ErrorResponse {
                    id: None,
                    error: format!("line {}: {}", n + 1, e),
                })
            }
        };
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Answer one request. Request fields override the command-line defaults.
pub fn respond(request: &CalcRequest, defaults: &BatchArgs) -> BatchResponse {
    let revision = match (request.revision, request.generation) {
        (Some(revision), _) => revision,
        (None, Some(generation)) => poketype::resolve_revision(generation),
        (None, None) => defaults.ruleset.revision(),
    };
    let policy = if request.strict || defaults.strict {
        TypePolicy::Strict
    } else {
        TypePolicy::Permissive
    };

    let calculator = Calculator::new(revision).with_policy(policy);
    match calculator.compute(
        request.opponent.as_slice(),
        request.moves.as_slice(),
        request.user.as_slice(),
    ) {
        Ok(eff) => {
            let buckets = classify(&eff);
            BatchResponse::Ok(CalcResponse {
                id: request.id.clone(),
                revision,
                multipliers: eff,
                buckets,
            })
        }
        Err(e) => BatchResponse::Err(ErrorResponse {
            id: request.id.clone(),
            error: e.to_string(),
        }),
    }
}
