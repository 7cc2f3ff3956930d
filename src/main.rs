//! # cmkgen CLI Entry Point
//!
//! This is the main executable for the `cmk` command-line tool. It parses
//! CLI arguments using clap and drives a single generation run: resolve
//! third-party flags for the chosen template, discover sources under `src/`,
//! write `CMakeLists.txt`, and drop a starter `main.cpp` if none exists.
//!
//! Generation happens in the current directory, once. A directory that
//! already holds a `CMakeLists.txt` is refused.

use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use colored::*;

use cmkgen::discover;
use cmkgen::flags::{self, SystemRunner};
use cmkgen::manifest;
use cmkgen::project::{ProjectSpec, Template};
use cmkgen::templates;
use cmkgen::ui;

#[derive(Parser)]
#[command(name = "cmk")]
#[command(about = "One-shot CMake project scaffolder", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Project name written into the generated manifest
    #[arg(required_unless_present_any = ["list_templates", "completions"])]
    name: Option<String>,

    /// Project template (console, sdl2, wxwidgets, gtk3)
    #[arg(long, default_value = "console")]
    template: String,

    /// C++ standard written into the manifest
    #[arg(long, default_value = "17", value_name = "VER")]
    std: String,

    /// Minimum CMake version declared by the manifest
    #[arg(long, default_value = "3.10", value_name = "VER")]
    cmake: String,

    /// Do not emit the compile_commands.json export toggle
    #[arg(long)]
    no_compile_commands: bool,

    /// List supported templates and exit
    #[arg(long)]
    list_templates: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "x".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        return Ok(());
    }

    if cli.list_templates {
        list_templates();
        return Ok(());
    }

    let template: Template = cli.template.parse()?;
    let name = cli.name.as_deref().unwrap_or_default();
    let spec = ProjectSpec::new(name, template, &cli.std, &cli.cmake, !cli.no_compile_commands)?;

    generate_project(Path::new("."), &spec)
}

fn generate_project(root: &Path, spec: &ProjectSpec) -> Result<()> {
    println!(
        "{} Scaffolding {} (template: {})...",
        "⚙".cyan(),
        spec.name.bold(),
        spec.template.name().cyan()
    );

    let flag_set = flags::resolve_flags(spec.template, &SystemRunner)?;
    let sources = discover::discover_sources(root)?;

    let manifest_path = manifest::write_manifest(root, spec, &flag_set, &sources)?;
    println!("{} Wrote {}", "✓".green(), manifest_path.display());

    match templates::write_starter(root, spec.template)? {
        Some(path) => println!("{} Created {}", "✓".green(), path.display()),
        None => println!(
            "{} {} exists, skipping starter file.",
            "!".yellow(),
            discover::STARTER_SOURCE
        ),
    }

    println!("\n  cmake -B build\n  cmake --build build");
    Ok(())
}

fn list_templates() {
    println!("\n{}", "Available templates:".bold());
    let mut table = ui::Table::new(&["Name", "Flags From", "Description"]);
    for t in Template::all() {
        let helper = match t.helper() {
            Some(h) => h
                .cflags
                .split_whitespace()
                .next()
                .unwrap_or("-")
                .yellow()
                .to_string(),
            None => "-".dimmed().to_string(),
        };
        table.add_row(vec![
            t.name().cyan().bold().to_string(),
            helper,
            t.description().dimmed().to_string(),
        ]);
    }
    table.print();
    println!(
        "\n  {} - Scaffold with a template",
        "cmk <name> --template sdl2".cyan()
    );
}
