use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use lightbox_core::preload::{preload_image, probe_image};
use lightbox_core::scan::scan_article;

#[derive(Args)]
pub struct VerifyArgs {
    /// Input article file (TOML)
    pub file: PathBuf,

    /// Fully decode each image instead of probing the header
    #[arg(long)]
    pub full: bool,
}

pub fn run(args: &VerifyArgs) -> Result<()> {
    let article = super::load_article(&args.file)?;
    let collection = scan_article(&article);

    if collection.is_empty() {
        println!("No images to verify in {}", args.file.display());
        return Ok(());
    }

    let pb = ProgressBar::new(collection.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Verifying images");

    let mut broken = 0usize;
    for image in collection.iter() {
        let result = if args.full {
            preload_image(&image.src).map(|img| (img.width, img.height))
        } else {
            probe_image(&image.src)
        };
        match result {
            Ok((w, h)) => {
                tracing::debug!(src = %image.src, w, h, "image verified");
                pb.println(format!("{}      {} ({w}x{h})", style("ok").green(), image.src));
            }
            Err(e) => {
                pb.println(format!("{}  {}: {e}", style("broken").red(), image.src));
                broken += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let total = collection.len();
    if broken == 0 {
        println!("All {total} images load");
        Ok(())
    } else {
        bail!("{broken} of {total} images failed to load");
    }
}
