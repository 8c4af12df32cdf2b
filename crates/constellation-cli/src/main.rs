//! Constellations binary
//!
//! Generates hex constellation pieces and prints them as text or JSON,
//! optionally drawing them to an SVG sheet.

mod layout;
mod svg;

use std::path::PathBuf;

use clap::Parser;
use constellation_gen::{Generator, GeneratorConfig, Selection};
use constellation_shape::CanonicalShape;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "constellations", version, about = "Generate hex constellation pieces")]
struct Cli {
    /// Number of cells per piece
    #[arg(long, default_value_t = 9)]
    size: usize,
    /// Seed for tie-breaking between equally symmetric pieces
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// List every admissible piece instead of a quota selection
    #[arg(long)]
    all: bool,
    /// Print JSON instead of one piece per line
    #[arg(long)]
    json: bool,
    /// Also draw the pieces to this SVG file
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            target_size: self.size,
            seed: self.seed,
            ..Default::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "constellations=info,constellation_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut generator = Generator::new(cli.config());

    let selection = if cli.all {
        Selection {
            shapes: generator.generate_all(cli.size)?,
            shortfalls: Vec::new(),
        }
    } else {
        generator.run()?
    };
    tracing::info!("Generated {} pieces of {} cells", selection.shapes.len(), cli.size);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        print_shapes(&selection.shapes);
    }

    if let Some(path) = &cli.svg {
        let sheet = layout::layout_shapes(selection.shapes.iter().map(CanonicalShape::as_shape));
        std::fs::write(path, svg::gen_svg(&sheet).to_string())?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}

fn print_shapes(shapes: &[CanonicalShape]) {
    for shape in shapes {
        println!("{shape}");
    }
}
