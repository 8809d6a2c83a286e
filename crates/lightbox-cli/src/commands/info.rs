use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lightbox_core::scan::scan_article;

#[derive(Args)]
pub struct InfoArgs {
    /// Input article file (TOML)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let article = super::load_article(&args.file)?;
    let collection = scan_article(&article);

    println!("File:      {}", args.file.display());
    println!("Title:     {}", article.title);
    println!("Blocks:    {}", article.block_count());
    println!("Sections:  {}", article.section_count());
    println!("Images:    {}", collection.len());

    Ok(())
}
