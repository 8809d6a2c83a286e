use image::{Rgba, RgbaImage};

use lightbox_core::collection::{Collection, ImageDescriptor};
use lightbox_core::content::{Article, Block};

/// Build an article with images at three depths:
/// cover (top level), inline-1 (inside a section), footer (top level).
pub fn sample_article() -> Article {
    Article {
        title: "Field Notes".into(),
        blocks: vec![
            Block::Heading {
                level: 1,
                text: "Field Notes".into(),
            },
            Block::Paragraph {
                text: "Introduction paragraph.".into(),
            },
            Block::Image {
                src: "images/cover.png".into(),
                alt: "Cover photo".into(),
            },
            Block::Section {
                title: Some("Details".into()),
                blocks: vec![
                    Block::Paragraph {
                        text: "Section text.".into(),
                    },
                    Block::Image {
                        src: "images/inline-1.png".into(),
                        alt: "First inline".into(),
                    },
                    Block::Quote {
                        text: "A pull quote.".into(),
                    },
                ],
            },
            Block::Image {
                src: "images/footer.png".into(),
                alt: String::new(),
            },
        ],
    }
}

/// A collection of `n` synthetic descriptors `img-0` .. `img-{n-1}`.
pub fn collection_of(n: usize) -> Collection {
    (0..n)
        .map(|i| ImageDescriptor {
            src: format!("img-{i}.png"),
            alt: format!("image {i}"),
        })
        .collect()
}

/// Write a gradient PNG to a temp file and return the handle (the file is
/// deleted on drop).
pub fn write_test_png(width: u32, height: u32) -> tempfile::NamedTempFile {
    let mut img = RgbaImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]);
    }
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .unwrap();
    img.save(file.path()).unwrap();
    file
}
