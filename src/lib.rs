//! cellsheet packs an ordered frame sequence into a grid-tiled sprite-sheet atlas and names the
//! result so that playback scripts in other runtimes can replay it.
//!
//! The pipeline is:
//!
//! - Load frames into a [`FrameSequence`] and select a window
//! - [`compose`] the window into an [`AtlasImage`] on a [`GridSpec`]
//! - Name the file with [`SheetMetadata`] and [`write_atlas`]
//!
//! Consumers decode the file name with [`decode`] and map a frame counter to a cell with
//! [`cell_of`]. The [`conformance`] module publishes the vectors every runtime port must agree
//! with.
#![forbid(unsafe_code)]

mod config;
mod foundation;

pub(crate) mod compose;
/// Canonical test vectors for the frame-cell protocol.
pub mod conformance;
pub(crate) mod grid;
pub(crate) mod io;
pub(crate) mod metadata;
pub(crate) mod playback;
pub(crate) mod script;
pub(crate) mod sequence;

pub use crate::foundation::core::{AtlasSize, CellSize, Rgba8};
pub use crate::foundation::error::{
    CellsheetError, CellsheetResult, CompositeError, DecodeError, EncodeError, GridError,
    RangeError,
};
pub use crate::foundation::fingerprint::Fingerprint;

pub use crate::compose::atlas::AtlasImage;
pub use crate::compose::composite::over;
pub use crate::compose::compositor::{
    Composite, CompositeWarning, compose, compose_styled, compose_with_cancel,
};
pub use crate::compose::overlay::{OverlaySettings, OverlayStyle};
pub use crate::compose::recompose::{Recomposer, Ticket, request_fingerprint};
pub use crate::config::PackConfig;
pub use crate::grid::cell::{Cell, cell_of, uv_rect};
pub use crate::grid::resolve::{ResolvedGrid, max_frame_size, resolve, resolve_with_max_frame};
pub use crate::grid::spec::{GridSpec, SizingMode};
pub use crate::io::export::{write_atlas, write_gif, write_sequence};
pub use crate::io::import::{load_directory, load_frames, load_gif};
pub use crate::metadata::codec::{
    SEPARATOR, SheetMetadata, decode, decode_path, encode, validate_sheet_name,
};
pub use crate::playback::clock::PlaybackClock;
pub use crate::script::lsl::{LslEffect, LslOptions, lsl_script};
pub use crate::sequence::frame::Frame;
pub use crate::sequence::window::FrameSequence;
