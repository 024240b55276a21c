use clap::Parser;
use image::{imageops, RgbaImage};
use om_persistence::{
    definition_path, ensure_maps_dir, list_definitions, load_definition, save_definition,
};
use om_world::{MapDefinition, MapSession};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "overmap")]
#[command(about = "Generate a terrain overmap with sparse place names")]
struct Args {
    /// Width of the map in tiles
    #[arg(short = 'W', long, default_value = "120")]
    width: u32,

    /// Height of the map in tiles
    #[arg(short = 'H', long, default_value = "80")]
    height: u32,

    /// Noise seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Sample scale; smaller values give larger terrain features
    #[arg(long, default_value = "0.1")]
    scale: f64,

    /// Per-tile probability of a place name
    #[arg(long, default_value = "0.01")]
    name_probability: f64,

    /// Load the full map definition from a RON file (overrides the
    /// size/seed/scale arguments)
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the effective map definition to a RON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Save the effective map definition into the maps directory
    /// under this name
    #[arg(long)]
    save_as: Option<String>,

    /// List saved definitions in the maps directory and exit
    #[arg(long)]
    list: bool,

    /// Regenerate this many times with fresh seeds before reporting
    #[arg(short = 'r', long, default_value = "0")]
    reseeds: u32,

    /// Adjust the scale by this delta (clamped) before reporting
    #[arg(long)]
    rescale: Option<f64>,

    /// Write a PNG preview of the map
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Preview pixels per tile
    #[arg(long, default_value = "4")]
    pixel_size: u32,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.list {
        let saved = list_definitions()?;
        if saved.is_empty() {
            println!("No saved definitions");
        }
        for path in saved {
            println!("  {}", path.display());
        }
        return Ok(());
    }

    let definition = match &args.load {
        Some(path) => {
            println!("Loading definition from {}", path.display());
            load_definition(path)?
        }
        None => MapDefinition {
            width: args.width,
            height: args.height,
            seed: args.seed.unwrap_or_else(rand::random),
            scale: args.scale,
            name_probability: args.name_probability,
            ..MapDefinition::default()
        },
    };

    println!(
        "Generating {}x{} map with seed {} at scale {}",
        definition.width, definition.height, definition.seed, definition.scale
    );

    if let Some(path) = &args.save {
        save_definition(path, &definition)?;
        println!("Saved definition to {}", path.display());
    }
    if let Some(name) = &args.save_as {
        ensure_maps_dir()?;
        let path = definition_path(name);
        save_definition(&path, &definition)?;
        println!("Saved definition to {}", path.display());
    }

    let mut session = MapSession::new(definition)?;
    for _ in 0..args.reseeds {
        session.regenerate_with_new_seed()?;
        println!("Reseeded to {}", session.seed());
    }
    if let Some(delta) = args.rescale {
        session.adjust_scale(delta)?;
        println!("Scale adjusted to {}", session.scale());
    }
    let map = session.map();

    for (kind, count) in map.census() {
        let share = 100.0 * count as f64 / map.tiles().len() as f64;
        println!("  {:<10} {:>6} tiles ({:.1}%)", kind.name(), count, share);
    }

    let names = session.place_names();
    println!("Named {} places:", names.len());
    for place in names {
        println!("  {} at ({}, {})", place.name, place.pos.x, place.pos.y);
    }

    if let Some(path) = &args.out {
        let img = RgbaImage::from_raw(map.width(), map.height(), map.to_rgba())
            .ok_or("preview buffer size mismatch")?;
        let scaled = imageops::resize(
            &img,
            map.width() * args.pixel_size,
            map.height() * args.pixel_size,
            imageops::FilterType::Nearest,
        );
        scaled.save(path)?;
        println!("Wrote preview to {}", path.display());
    }

    Ok(())
}
