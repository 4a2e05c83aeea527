//! picascii CLI - Convert images to ASCII art

use clap::Parser;
use picascii::{loader, CharsetRegistry, ConversionConfig, Converter, PicasciiError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "picascii", version, about = "Convert images to ASCII art")]
struct Args {
    /// Input image file
    #[arg(required_unless_present = "list_charsets")]
    input: Option<PathBuf>,
    /// Output width in characters
    #[arg(short, long, default_value = "120")]
    width: u32,
    /// Contrast factor around the image mean (1.0 = unchanged)
    #[arg(short, long, default_value = "1.5")]
    contrast: f32,
    /// Character set name
    #[arg(short = 's', long, default_value = picascii::DEFAULT_CHARSET)]
    charset: String,
    /// JSON file of extra character sets: {"name": "ramp", ...}
    #[arg(long)]
    charsets: Option<PathBuf>,
    /// Fail on unknown character set names instead of using the default
    #[arg(long)]
    strict: bool,
    /// Invert the image
    #[arg(short, long)]
    invert: bool,
    /// Write the art to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the available character sets and exit
    #[arg(long)]
    list_charsets: bool,
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), PicasciiError> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let mut registry = CharsetRegistry::builtin();
    if let Some(path) = &args.charsets {
        registry = registry.load_json(path)?;
    }

    if args.list_charsets {
        for set in registry.iter() {
            println!("{:<10} {:?}", set.name(), set.chars().iter().collect::<String>());
        }
        return Ok(());
    }

    let Some(input) = &args.input else {
        return Ok(());
    };

    let mut image = loader::load_path(input)?;
    if args.invert {
        image.invert();
    }

    let config = ConversionConfig::new(args.width, args.contrast, args.charset)
        .with_strict_charset(args.strict);
    let art = Converter::new(&registry, config).convert(&image)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &art)?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", art),
    }
    Ok(())
}
