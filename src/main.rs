//! Interactive dominant-color report for a folder of PNG images
//!
//! Prompts for a folder path and a cluster count, aggregates every eligible
//! image, and prints the folder-wide color distribution.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use sprite_palette::{render_report, AnalysisError, FolderAggregator};
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() {
    init_logging();

    let folder = match prompt("Enter the path to the folder containing the PNG images: ") {
        Ok(line) => line,
        Err(err) => {
            eprintln!("Error reading input: {err}");
            process::exit(1);
        }
    };
    let count_text = match prompt("Enter the number of color groups to use: ") {
        Ok(line) => line,
        Err(err) => {
            eprintln!("Error reading input: {err}");
            process::exit(1);
        }
    };

    let cluster_count: usize = match count_text.parse() {
        Ok(count) => count,
        Err(_) => {
            let err = AnalysisError::input_format(format!(
                "cluster count must be an integer, got '{count_text}'"
            ));
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let folder = Path::new(&folder);
    if !folder.is_dir() {
        eprintln!("Error: Folder '{}' not found.", folder.display());
        process::exit(1);
    }

    let aggregator = FolderAggregator::new(cluster_count);
    match aggregator.aggregate(folder) {
        Ok(distribution) => {
            if !distribution.is_empty() {
                println!();
            }
            println!("{}", render_report(&distribution, cluster_count));
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
