use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};

use crate::compose::atlas::AtlasImage;
use crate::foundation::error::{CellsheetError, CellsheetResult};
use crate::grid::resolve::max_frame_size;
use crate::metadata::codec::SheetMetadata;
use crate::sequence::frame::Frame;

/// Write `atlas` into `out_dir` as `<encoded metadata>.png` and return the written path.
///
/// The file stem is the whole metadata contract, so an unencodable sheet name fails before
/// anything touches the disk.
#[tracing::instrument(skip(atlas), fields(width = atlas.width(), height = atlas.height()))]
pub fn write_atlas(
    atlas: &AtlasImage,
    meta: &SheetMetadata,
    out_dir: &Path,
) -> CellsheetResult<PathBuf> {
    let file_name = meta.file_name("png")?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let path = out_dir.join(file_name);
    image::save_buffer_with_format(
        &path,
        atlas.as_raw(),
        atlas.width(),
        atlas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), "atlas written");
    Ok(path)
}

/// Write each decoded frame of `window` as `<stem>_<NNNN>.png`, numbered by its position in the
/// window. Failed frames are skipped, leaving a gap in the numbering.
#[tracing::instrument(skip(window), fields(frames = window.len()))]
pub fn write_sequence(
    window: &[Frame],
    out_dir: &Path,
    stem: &str,
) -> CellsheetResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let mut written = Vec::with_capacity(window.len());
    for (i, frame) in window.iter().enumerate() {
        let Some(img) = frame.image() else {
            tracing::warn!(index = i, label = frame.label(), "failed frame not exported");
            continue;
        };
        let path = out_dir.join(format!("{stem}_{i:04}.png"));
        img.save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        written.push(path);
    }

    tracing::debug!(written = written.len(), "sequence written");
    Ok(written)
}

/// Write the decoded frames of `window` as a looping animated GIF at `frame_rate`.
///
/// Frames are centered on a canvas of the largest frame size. The per-frame delay is
/// `1000 / frame_rate` ms, with a rate of 0 treated as 1.
#[tracing::instrument(skip(window), fields(frames = window.len()))]
pub fn write_gif(window: &[Frame], path: &Path, frame_rate: u32) -> CellsheetResult<()> {
    let (cw, ch) = max_frame_size(window);
    if cw == 0 || ch == 0 {
        return Err(CellsheetError::validation("no decoded frames to export"));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let f = File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(f));
    encoder.set_repeat(Repeat::Infinite).context("set gif repeat")?;

    let delay = Delay::from_numer_denom_ms(1000 / frame_rate.max(1), 1);
    for (i, frame) in window.iter().enumerate() {
        let Some(img) = frame.image() else {
            tracing::warn!(index = i, label = frame.label(), "failed frame not exported");
            continue;
        };
        let mut canvas = RgbaImage::new(cw, ch);
        let x = i64::from((cw - img.width()) / 2);
        let y = i64::from((ch - img.height()) / 2);
        image::imageops::replace(&mut canvas, img, x, y);
        encoder
            .encode_frame(image::Frame::from_parts(canvas, 0, 0, delay))
            .with_context(|| format!("encode gif frame {i}"))?;
    }

    tracing::debug!(path = %path.display(), "gif written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/export.rs"]
mod tests;
