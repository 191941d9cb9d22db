//! Parses a deliberately broken payload and prints the repaired document
//! together with the recovery log.
//!
//! Run with: `cargo run --example repair_report`

use jsonmend::{parse_smart, ParserOptions};

fn main() {
    let payload = r#"{
        name: 'Grace',
        skills: ["parsing", "repair",],
        score: Infinity,
        bio: "writes "robust" readers",
        clips: ["intro", "fps": 30
    }"#;

    let outcome = parse_smart(payload, ParserOptions::default());

    match outcome.value() {
        Some(value) => println!("repaired: {value}"),
        None => println!("no value recovered"),
    }

    println!("{} recoveries:", outcome.error_count);
    for error in &outcome.errors {
        println!("  {error}");
    }
}
