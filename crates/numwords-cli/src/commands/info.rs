//! Info command implementation.

/// Run the info command.
pub fn run() {
    println!("numwords");
    println!("========");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!(
        "  Languages: {}",
        numwords_engine::registry::languages()
            .iter()
            .map(|lang| lang.tag())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    println!("Crates:");
    println!("  numwords-core: Core types, options and errors");
    println!("  numwords-engine: Conversion pipeline and language profiles");
    println!("  numwords-cli: This CLI tool");
}
