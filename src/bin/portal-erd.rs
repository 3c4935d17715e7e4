//! portal-erd CLI: draws the job portal ERD with Graphviz.
//!
//! Usage:
//!   portal-erd render [--output path] [--format png] [--view] [--schema file]
//!   portal-erd dot [--schema file]
//!   portal-erd formats

use clap::{Parser, Subcommand};
use portal_erd::{Diagram, Format, GraphvizEngine, RenderOptions, Schema, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "portal-erd",
    version,
    about = "Entity-relationship diagram for the online job portal"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the diagram to an image file
    Render {
        /// Image file to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Output format (png, svg, pdf, ...)
        #[arg(short, long, default_value = "png")]
        format: String,
        /// Open the image in the system viewer when done
        #[arg(long)]
        view: bool,
        /// Also write the DOT source next to the image
        #[arg(long)]
        keep_source: bool,
        /// YAML or JSON schema to draw instead of the job portal
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Graphviz executable
        #[arg(long, default_value = "dot")]
        engine: PathBuf,
        /// Graphviz layout algorithm
        #[arg(long, default_value = "dot")]
        layout: String,
    },
    /// Print the DOT source to stdout
    Dot {
        /// YAML or JSON schema to draw instead of the job portal
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// List supported output formats
    Formats,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_diagram(schema: Option<PathBuf>) -> Result<Diagram, String> {
    let schema = match schema {
        Some(path) => Schema::from_path(&path)
            .map_err(|e| format!("failed to load schema {}: {}", path.display(), e))?,
        None => Schema::job_portal(),
    };
    schema.to_diagram().map_err(|e| e.to_string())
}

fn cmd_render(
    output: PathBuf,
    format: &str,
    view: bool,
    keep_source: bool,
    schema: Option<PathBuf>,
    engine: PathBuf,
    layout: String,
) -> i32 {
    let format: Format = match format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let diagram = match load_diagram(schema) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let engine = GraphvizEngine::new().with_program(engine).with_layout(layout);
    let options = RenderOptions::new(output)
        .with_format(format)
        .with_viewer(view)
        .with_source(keep_source);

    match diagram.render_with(&engine, &options) {
        Ok(out) => {
            println!("Wrote {} ({} bytes)", out.image.display(), out.bytes);
            if let Some(source) = out.source {
                println!("Wrote {}", source.display());
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_dot(schema: Option<PathBuf>) -> i32 {
    match load_diagram(schema) {
        Ok(diagram) => {
            print!("{}", diagram.to_dot());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_formats() -> i32 {
    println!("{:<6}  {:<9}  {:<6}", "NAME", "KIND", "EXT");
    println!("{}", "-".repeat(25));
    for format in Format::ALL {
        let kind = match format {
            Format::Json | Format::Gv => "text",
            f if f.is_raster() => "raster",
            _ => "vector",
        };
        println!("{:<6}  {:<9}  {:<6}", format, kind, format.extension());
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let code = match cli.command {
        Commands::Render {
            output,
            format,
            view,
            keep_source,
            schema,
            engine,
            layout,
        } => cmd_render(output, &format, view, keep_source, schema, engine, layout),
        Commands::Dot { schema } => cmd_dot(schema),
        Commands::Formats => cmd_formats(),
    };
    std::process::exit(code);
}
