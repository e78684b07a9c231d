//! Text rendering for the results screens.

use poketype::{Buckets, Matchups, Perspective, Revision, Type, TypeEffectiveness};

const RULE_WIDTH: usize = 72;

/// `fire` -> `Fire`
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Newline-terminated lines
fn to_report(lines: Vec<String>) -> String {
    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Render the calculator results report.
///
/// Moves sharing a type with the user are tagged `(STAB)` unless the bonus
/// was absorbed by an immunity.
pub fn render_results(
    opponent: &[String],
    moves: &[String],
    user: &[String],
    revision: Revision,
    buckets: &Buckets,
) -> String {
    let stab_types: Vec<String> = user.iter().map(|u| u.trim().to_lowercase()).collect();

    let mut lines = vec![
        "Pokemon Type Calculator - Results".to_string(),
        rule(),
        format!("Opponent Types: {}", opponent.join(", ")),
        format!("Move Types: {}", moves.join(", ")),
        format!("Chart: {}", revision),
        rule(),
    ];

    for (i, (kind, bucket)) in buckets.iter().enumerate() {
        if i > 0 {
            lines.push("-=-=-=-".to_string());
        }
        lines.push(format!("{}:", kind.title()));
        if bucket.is_empty() {
            lines.push(" - None".to_string());
        }
        for entry in bucket {
            let stab = !entry.multiplier.is_zero() && stab_types.contains(&entry.move_type);
            lines.push(format!(
                " - {}: {}{}",
                capitalize(&entry.move_type),
                entry.multiplier,
                if stab { " (STAB)" } else { "" }
            ));
        }
    }
    lines.push(rule());
    to_report(lines)
}

/// Render the matchup lists of one type.
pub fn render_matchups(
    ty: Type,
    perspective: Perspective,
    revision: Revision,
    matchups: &Matchups,
) -> String {
    let (heading, sections) = match perspective {
        Perspective::Attacking => (
            format!("{} attacking ({} chart)", capitalize(ty.name()), revision),
            [
                ("Super effective against", TypeEffectiveness::SuperEffective),
                ("Not very effective against", TypeEffectiveness::NotVeryEffective),
                ("No effect on", TypeEffectiveness::Immune),
            ],
        ),
        Perspective::Defending => (
            format!("{} defending ({} chart)", capitalize(ty.name()), revision),
            [
                ("Weak to", TypeEffectiveness::SuperEffective),
                ("Resists", TypeEffectiveness::NotVeryEffective),
                ("Immune to", TypeEffectiveness::Immune),
            ],
        ),
    };

    let mut lines = vec![heading, rule()];
    for (label, effectiveness) in sections {
        let names: Vec<String> = matchups
            .get(effectiveness)
            .types()
            .map(|t| capitalize(t.name()))
            .collect();
        let listed = if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        };
        lines.push(format!("{}: {}", label, listed));
    }
    to_report(lines)
}
