use std::path::PathBuf;

use anyhow::{Context, Result};
use cellscan_core::detect::detect;
use cellscan_core::io::{load_image, save_image, save_mask};
use cellscan_core::params::DetectParams;
use clap::Args;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image file (PNG or JPEG)
    pub file: PathBuf,

    /// TOML file with detection parameters (flags below override it)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Lower HSV hue bound
    #[arg(long)]
    pub hue_lo: Option<u8>,

    /// Upper HSV hue bound
    #[arg(long)]
    pub hue_hi: Option<u8>,

    /// Lower HSV saturation bound
    #[arg(long)]
    pub sat_lo: Option<u8>,

    /// Upper HSV saturation bound
    #[arg(long)]
    pub sat_hi: Option<u8>,

    /// Lower HSV value bound
    #[arg(long)]
    pub val_lo: Option<u8>,

    /// Upper HSV value bound
    #[arg(long)]
    pub val_hi: Option<u8>,

    /// Morphological closing kernel size
    #[arg(long)]
    pub kernel: Option<i32>,

    /// Minimum contour area in square pixels
    #[arg(long)]
    pub min_area: Option<f64>,

    /// Maximum contour area in square pixels
    #[arg(long)]
    pub max_area: Option<f64>,

    /// Directory for mask.png, closed.png, and annotated.png
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Skip writing the output images
    #[arg(long)]
    pub no_images: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let params = build_params(args)?;

    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let detection = detect(&frame, &params);

    crate::summary::print_detect_summary(&args.file, &params, &detection);

    if !args.no_images {
        std::fs::create_dir_all(&args.output)
            .with_context(|| format!("Failed to create {}", args.output.display()))?;
        save_mask(&detection.mask, &args.output.join("mask.png"))?;
        save_mask(&detection.closed, &args.output.join("closed.png"))?;
        save_image(&detection.annotated, &args.output.join("annotated.png"))?;
        println!("Images written to {}", args.output.display());
    }

    Ok(())
}

fn build_params(args: &DetectArgs) -> Result<DetectParams> {
    let mut params = match &args.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid parameter file {}", path.display()))?
        }
        None => DetectParams::default(),
    };

    if let Some(v) = args.hue_lo {
        params.hue_lo = v;
    }
    if let Some(v) = args.hue_hi {
        params.hue_hi = v;
    }
    if let Some(v) = args.sat_lo {
        params.sat_lo = v;
    }
    if let Some(v) = args.sat_hi {
        params.sat_hi = v;
    }
    if let Some(v) = args.val_lo {
        params.val_lo = v;
    }
    if let Some(v) = args.val_hi {
        params.val_hi = v;
    }
    if let Some(v) = args.kernel {
        params.kernel_size = v;
    }
    if let Some(v) = args.min_area {
        params.min_area = v;
    }
    if let Some(v) = args.max_area {
        params.max_area = v;
    }

    Ok(params)
}
