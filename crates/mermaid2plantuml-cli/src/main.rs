//! mmd2img - Convert Mermaid.js class diagrams to PlantUML images

mod cli;
mod plantuml;

use clap::Parser;

fn main() {
    // Logging is initialized inside run() once the flags are known
    let cli_args = cli::Cli::parse();

    let mut app = cli::Mmd2ImgApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
