use clap::Parser;
use msgcard_rs::{export_filename, render_card, CardData, CardSurface, CARD_LAYOUT};

/// msgcard: render a message-card description to a PNG image
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to input card JSON file (renders the default card when omitted)
    #[clap(short, long)]
    pub input_card_file: Option<String>,

    /// Path to output PNG file (defaults to message-card_<date>.png)
    #[clap(short, long)]
    pub output_png_file: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Args = Args::parse();

    // Load the card description
    let card = match &args.input_card_file {
        Some(path) => {
            let card_str = match std::fs::read_to_string(path) {
                Ok(card_str) => card_str,
                Err(err) => {
                    println!("Failed to read input file: {}\n{}", path, err);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<CardData>(&card_str) {
                Ok(card) => card,
                Err(err) => {
                    println!("Failed to parse input file as JSON: {}", err);
                    std::process::exit(1);
                }
            }
        }
        None => CardData::default(),
    };

    // Create the render surface
    let mut surface = match CardSurface::new(CARD_LAYOUT.width, CARD_LAYOUT.height) {
        Ok(surface) => surface,
        Err(err) => {
            println!("Failed to create render surface: {}", err);
            std::process::exit(1);
        }
    };

    // Render
    if let Err(err) = render_card(&mut surface, &card).await {
        println!("Card rendering failed: {}", err);
        std::process::exit(1);
    }

    // Encode
    let png_data = match surface.to_png() {
        Ok(png_data) => png_data,
        Err(err) => {
            println!("PNG encoding failed: {}", err);
            std::process::exit(1);
        }
    };

    // Write result
    let output_path = args
        .output_png_file
        .unwrap_or_else(|| export_filename(chrono::Local::now().date_naive()));

    match std::fs::write(&output_path, png_data) {
        Ok(_) => println!("Wrote {}", output_path),
        Err(err) => {
            println!("Failed to write output to {}\n{}", output_path, err);
            std::process::exit(1);
        }
    }
}
