use anyhow::Result;
use clap::{Parser, Subcommand};
use heading::prelude::*;
use serde::Serialize;
use std::f64::consts::PI;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Angle normalization evaluator and self-test")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Canonicalize an angle into (-180, 180] degrees (or (-pi, pi] radians)
    Normalize {
        angle: f64,
        /// Treat the input as radians
        #[arg(long)]
        radians: bool,
    },
    /// Signed shortest rotation from B to A, in degrees
    Diff { a: f64, b: f64 },
    /// Print a fixed set of example evaluations for manual verification
    Selftest {
        /// Emit the evaluations as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Normalize { angle, radians } => normalize(angle, radians),
        Action::Diff { a, b } => diff(a, b),
        Action::Selftest { json } => selftest(json),
    }
    Ok(())
}

fn normalize(angle: f64, radians: bool) {
    tracing::info!(angle, radians, "normalize");
    if radians {
        println!("{}", normalize_radians(angle));
    } else {
        println!("{}", normalize_degrees(angle));
    }
}

fn diff(a: f64, b: f64) {
    tracing::info!(a, b, "diff");
    println!("{}", angle_difference_degrees(a, b));
}

#[derive(Serialize)]
struct Evaluation {
    expression: String,
    result: f64,
}

fn evaluations() -> Vec<Evaluation> {
    let unary: [(&str, fn(f64) -> f64, f64); 10] = [
        ("normalize_degrees", normalize_degrees, 181.0),
        ("normalize_degrees", normalize_degrees, -181.0),
        ("normalize_degrees", normalize_degrees, 360.0),
        ("normalize_degrees", normalize_degrees, 540.0),
        ("normalize_degrees", normalize_degrees, -180.0),
        ("normalize_radians", normalize_radians, PI + 0.1),
        ("normalize_radians", normalize_radians, -PI - 0.1),
        ("normalize_radians", normalize_radians, 2.0 * PI),
        ("fold_quarter_degrees", fold_quarter_degrees, -86.41),
        ("fold_quarter_degrees", fold_quarter_degrees, -43.4),
    ];
    let binary: [(f64, f64); 5] = [
        (179.0, -179.0),
        (-179.0, 179.0),
        (10.0, 350.0),
        (350.0, 10.0),
        (90.0, 270.0),
    ];
    let mut out: Vec<Evaluation> = unary
        .iter()
        .map(|(name, f, x)| Evaluation {
            expression: format!("{name}({x})"),
            result: f(*x),
        })
        .collect();
    out.extend(binary.iter().map(|(a, b)| Evaluation {
        expression: format!("angle_difference_degrees({a}, {b})"),
        result: angle_difference_degrees(*a, *b),
    }));
    out
}

fn selftest(json: bool) {
    tracing::info!(json, "selftest");
    let evals = evaluations();
    if json {
        // serde_json::to_string cannot fail on this shape
        println!(
            "{}",
            serde_json::to_string_pretty(&evals).unwrap_or_default()
        );
        return;
    }
    for e in &evals {
        println!("{:<44} = {}", e.expression, e.result);
    }
}
