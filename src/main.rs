//! svgdocx - embed an SVG with a PNG fallback into a new .docx

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use svgdocx::util::extract_image_dimensions;
use svgdocx::{Document, DocumentConfig, DocxConfig, DocxWriter, ImageRef};

#[derive(Parser)]
#[command(name = "svgdocx")]
#[command(version, about = "Embed an SVG image with a PNG fallback into a .docx", long_about = None)]
#[command(after_help = "EXAMPLES:
    svgdocx chart.svg chart.png chart.docx              Size taken from the PNG
    svgdocx logo.svg logo.png out.docx -W 300 -H 120    Explicit size in pixels")]
struct Cli {
    /// SVG image
    #[arg(value_name = "SVG")]
    svg: String,

    /// PNG fallback rendered by readers without SVG support
    #[arg(value_name = "PNG")]
    png: String,

    /// Output .docx file
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Width in pixels (default: PNG width)
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Height in pixels (default: PNG height)
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Deflate compression level (1-9, 0 to store uncompressed)
    #[arg(short, long, value_name = "LEVEL")]
    compression_level: Option<u32>,

    /// Stage image payloads in this directory instead of memory
    #[arg(long, value_name = "DIR")]
    staging_dir: Option<String>,

    /// Print a JSON summary of the registered images
    #[arg(long)]
    json: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct Summary {
    output: String,
    width: u32,
    height: u32,
    images: Vec<ImageSummary>,
}

#[derive(Serialize)]
struct ImageSummary {
    index: usize,
    format: String,
    rel_id: Option<String>,
    target: Option<String>,
}

impl From<&ImageRef> for ImageSummary {
    fn from(image: &ImageRef) -> Self {
        Self {
            index: image.index(),
            format: image.format().to_string(),
            rel_id: image.rel_id().map(str::to_string),
            target: image.target().map(|t| format!("word/{t}")),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match convert(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn convert(cli: &Cli) -> Result<(), String> {
    let svg = fs::read(&cli.svg).map_err(|e| format!("{}: {e}", cli.svg))?;
    let png = fs::read(&cli.png).map_err(|e| format!("{}: {e}", cli.png))?;

    let detected = extract_image_dimensions(&png);
    let width = cli
        .width
        .or(detected.map(|(w, _)| w))
        .ok_or("cannot read PNG size; pass --width and --height")?;
    let height = cli
        .height
        .or(detected.map(|(_, h)| h))
        .ok_or("cannot read PNG size; pass --width and --height")?;

    let mut config = DocumentConfig::default();
    if let Some(ref dir) = cli.staging_dir {
        config = config.with_staging_dir(dir);
    }
    let mut doc = Document::with_config(config);

    let (png_ref, svg_ref) = doc
        .add_image_svg(&svg, &png, width, height)
        .map_err(|e| e.to_string())?;
    let para = doc.add_paragraph();
    let run = doc.add_run(para).map_err(|e| e.to_string())?;
    doc.add_drawing_inline_svg(run, &svg_ref, &png_ref)
        .map_err(|e| e.to_string())?;

    let mut docx_config = DocxConfig::default();
    if let Some(level) = cli.compression_level {
        docx_config = docx_config.with_compression_level(level);
    }
    let file = fs::File::create(&cli.output).map_err(|e| format!("{}: {e}", cli.output))?;
    DocxWriter::new()
        .with_config(docx_config)
        .write(&doc, file)
        .map_err(|e| e.to_string())?;

    if cli.json {
        let summary = Summary {
            output: cli.output.clone(),
            width,
            height,
            images: vec![ImageSummary::from(&png_ref), ImageSummary::from(&svg_ref)],
        };
        let json = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{json}");
    } else if !cli.quiet {
        println!(
            "Wrote {} ({}x{} px, SVG {} with PNG fallback {})",
            cli.output,
            width,
            height,
            svg_ref.rel_id().unwrap_or("?"),
            png_ref.rel_id().unwrap_or("?")
        );
    }

    Ok(())
}
