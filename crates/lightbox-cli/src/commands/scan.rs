use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lightbox_core::scan::scan_article;

#[derive(Args)]
pub struct ScanArgs {
    /// Input article file (TOML)
    pub file: PathBuf,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let article = super::load_article(&args.file)?;
    let collection = scan_article(&article);

    if collection.is_empty() {
        println!("No images found in {}", args.file.display());
        return Ok(());
    }

    println!("{} images in document order:", collection.len());
    println!("{:>5}  {:<48}  {}", "Index", "Source", "Alt text");
    println!("{}", "-".repeat(70));

    for (index, image) in collection.iter().enumerate() {
        let alt = if image.alt.is_empty() { "-" } else { &image.alt };
        println!("{index:>5}  {:<48}  {alt}", image.src);
    }

    Ok(())
}
