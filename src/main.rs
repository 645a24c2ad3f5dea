//! Logomark CLI
//!
//! Usage:
//!   logomark
//!
//! Running it regenerates the two SVG assets, relative to the current
//! working directory:
//!   public/logo.svg
//!   public/favicon.svg

use clap::Parser;

use logomark::{generate, OUTPUT_PATHS};

#[derive(Parser)]
#[command(name = "logomark")]
#[command(about = "Regenerate the site logo and favicon SVG assets")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Strictly sequential: if the first write fails, the second is not
    // attempted.
    for path in OUTPUT_PATHS {
        if let Err(e) = generate(path) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("Generated: {}", path);
    }
}
