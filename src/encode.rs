use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use png::{BitDepth, ColorType, Compression, Encoder};

/// row-major の RGB バイト列 (1 ピクセル 3 バイト) を 8 ビット深度の PNG として書き出す.
///
/// `title` を渡すと tEXt チャンクの `Title` として埋め込む. 失敗はすべて即時で,
/// 途中まで書かれたファイルが残ることがある.
pub fn write_png(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    rgb: &[u8],
    title: Option<&str>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("could not open {} for writing", path.display()))?;

    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Fast);
    if let Some(title) = title {
        encoder
            .add_text_chunk("Title".to_owned(), title.to_owned())
            .context("could not embed the title text")?;
    }

    let mut writer = encoder.write_header().context("could not write png header")?;
    writer
        .write_image_data(rgb)
        .context("could not write png image data")?;
    Ok(())
}
