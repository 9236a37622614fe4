/// Selection Tracer - Shows the flow through schema → request → selected columns
///
/// Usage: cargo run --features cli --bin trace_select <table.yaml> <request.yaml|selections.toml>
///
/// Set RUST_LOG=colsel_dsl=trace to see unwrapping and pivot matching.

use colsel_core::SelectionConfig;
use colsel_dsl::{parse_request_yaml, parse_selection_file, parse_table_yaml, SelectionRequest};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --features cli --bin trace_select <table.yaml> <request.yaml|selections.toml>");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --features cli --bin trace_select colsel-dsl/tests/fixtures/people.yaml colsel-dsl/tests/fixtures/selections.toml");
        std::process::exit(1);
    }

    let table_src = read_or_exit(&args[1]);
    let request_src = read_or_exit(&args[2]);

    let table = match parse_table_yaml(&table_src) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("❌ Invalid table schema: {}", e);
            std::process::exit(1);
        }
    };

    let (config, requests): (SelectionConfig, Vec<SelectionRequest>) = if args[2].ends_with(".toml") {
        match parse_selection_file(&request_src) {
            Ok(file) => (file.config.unwrap_or_default(), file.selections),
            Err(e) => {
                eprintln!("❌ Invalid selection file: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match parse_request_yaml(&request_src) {
            Ok(request) => (SelectionConfig::default(), vec![request]),
            Err(e) => {
                eprintln!("❌ Invalid request: {}", e);
                std::process::exit(1);
            }
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════");
    println!("║ COLUMN SELECTION TRACER");
    println!("╚═══════════════════════════════════════════════════════════════\n");

    for (i, request) in requests.iter().enumerate() {
        println!("🔍 REQUEST #{}:", i + 1);
        println!("─────────────────────────────────────────────────────────────");
        println!("{:#?}", request);

        match request.execute(&table, &config) {
            Ok(selection) => {
                let paths: Vec<String> = selection.paths().iter().map(|p| p.to_string()).collect();
                match serde_json::to_string(&paths) {
                    Ok(json) => println!("✅ {}", json),
                    Err(e) => println!("❌ Could not render selection: {}", e),
                }
            }
            Err(e) => println!("❌ Selection error: {}", e),
        }
        println!();
    }
}

fn read_or_exit(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    }
}
