use std::cmp::Ordering;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::AnimationDecoder as _;
use image::codecs::gif::GifDecoder;

use crate::foundation::error::{CellsheetError, CellsheetResult};
use crate::sequence::frame::Frame;
use crate::sequence::window::FrameSequence;

const FRAME_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Load a directory of stills or an animated GIF, whichever `path` names.
pub fn load_frames(path: &Path) -> CellsheetResult<FrameSequence> {
    if path.is_dir() {
        return load_directory(path);
    }
    if has_extension(path, &["gif"]) {
        return load_gif(path);
    }
    Err(CellsheetError::validation(format!(
        "'{}' is neither a directory nor a .gif file",
        path.display()
    )))
}

/// Load every PNG/JPEG file in `dir`, ordered by file name with digit runs compared
/// numerically (`frame2` before `frame10`).
///
/// Files that fail to decode keep their slot as failed frames.
#[tracing::instrument]
pub fn load_directory(dir: &Path) -> CellsheetResult<FrameSequence> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read frame directory '{}'", dir.display()))?;

    let mut paths: Vec<PathBuf> = rd
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && has_extension(p, &FRAME_EXTENSIONS))
        .collect();
    paths.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));

    let frames: FrameSequence = paths.iter().map(|p| load_still(p)).collect();
    tracing::debug!(frames = frames.len(), "directory loaded");
    Ok(frames)
}

/// Decode every frame of an animated GIF. Frames are full-canvas composites labelled `gif#N`.
///
/// A decode error part way through ends the sequence with one failed frame.
#[tracing::instrument]
pub fn load_gif(path: &Path) -> CellsheetResult<FrameSequence> {
    let f = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    let decoder =
        GifDecoder::new(BufReader::new(f)).with_context(|| format!("decode gif '{}'", path.display()))?;

    let mut frames = FrameSequence::new();
    for (i, frame) in decoder.into_frames().enumerate() {
        let label = format!("gif#{i}");
        match frame {
            Ok(frame) => frames.push(Frame::decoded(label, frame.into_buffer())),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "gif frame failed to decode");
                frames.push(Frame::failed(label, e.to_string()));
                break;
            }
        }
    }
    tracing::debug!(frames = frames.len(), "gif loaded");
    Ok(frames)
}

fn load_still(path: &Path) -> Frame {
    let label = file_name(path);
    match image::open(path) {
        Ok(img) => Frame::decoded(label, img.to_rgba8()),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "frame failed to decode");
            Frame::failed(label, e.to_string())
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}

/// Compare names case-insensitively with ASCII digit runs ordered by value (`f2` before `f10`).
/// Ties fall back to plain byte order so the result is total.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_folded(a.as_bytes(), b.as_bytes()).then_with(|| a.cmp(b))
}

fn natural_cmp_folded(mut a: &[u8], mut b: &[u8]) -> Ordering {
    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (da, ra) = split_digits(a);
                let (db, rb) = split_digits(b);
                let ord = cmp_digit_runs(da, db);
                if ord != Ordering::Equal {
                    return ord;
                }
                (a, b) = (ra, rb);
            }
            (Some(x), Some(y)) => {
                let ord = x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                (a, b) = (&a[1..], &b[1..]);
            }
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let n = s.iter().take_while(|c| c.is_ascii_digit()).count();
    s.split_at(n)
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let trim = |s: &[u8]| -> usize { s.iter().take_while(|&&c| c == b'0').count() };
    let (ta, tb) = (&a[trim(a)..], &b[trim(b)..]);
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
#[path = "../../tests/unit/io/import.rs"]
mod tests;
