//! # Trigon CLI Application
//!
//! Terminal front end for the triangle solver. Prompts for a congruence
//! pattern, a unit and the three known measurements, then prints the solved
//! triangle as a table and as JSON.
//!
//! Pass `--debug` (or set `RUST_LOG`) to see the solver's log output.

use std::env;
use std::io::{self, BufRead, Write};

use log::LevelFilter;

use calc_core::format::summary_rows;
use calc_core::normalize::missing_fields;
use calc_core::{solve_triangle, CongruencePattern, LinearUnit, TriangleFields};

fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Ask until the answer parses, an empty answer picks `default`.
fn prompt_parsed<T>(text: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let Some(answer) = prompt(text) else {
            return default;
        };
        if answer.is_empty() {
            return default;
        }
        match answer.parse() {
            Ok(value) => return value,
            Err(e) => println!("  {}", e),
        }
    }
}

fn main() {
    let debug = env::args().skip(1).any(|a| a == "--debug" || a == "-d");
    init_logger(debug);

    println!("Trigon CLI - Triangle Solver");
    println!("============================");
    println!();
    for pattern in CongruencePattern::ALL {
        println!("  {:<24} {}", pattern.label(), pattern.description());
    }
    println!();

    let pattern: CongruencePattern =
        prompt_parsed("What do you know? [SSS]: ", CongruencePattern::Sss);
    let unit: LinearUnit =
        prompt_parsed("Unit for sides (m, cm, ft, in) [m]: ", LinearUnit::Meter);

    println!();
    let mut fields = TriangleFields::new();
    for field in pattern.required_fields() {
        let suffix = if field.is_angle() {
            "degrees".to_string()
        } else {
            unit.symbol().to_string()
        };
        println!("  {}", field.description());
        if let Some(answer) = prompt(&format!("{} ({}): ", field.label(), suffix)) {
            fields.set(field, answer);
        }
    }
    println!();

    match solve_triangle(pattern, &fields, unit) {
        None => {
            let missing: Vec<&str> = missing_fields(pattern, &fields)
                .into_iter()
                .map(|f| f.label())
                .collect();
            println!("Input incomplete - still needed: {}", missing.join(", "));
        }
        Some(Ok(triangle)) => {
            println!("═══════════════════════════════════════");
            println!("  TRIANGLE PROPERTIES ({})", pattern);
            println!("═══════════════════════════════════════");
            for (label, value) in summary_rows(&triangle) {
                println!("  {:<12} {}", label, value);
            }
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&triangle) {
                println!("{}", json);
            }
        }
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON ({}):", e.error_code());
                eprintln!("{}", json);
            }
        }
    }
}
