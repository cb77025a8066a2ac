use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::compose::compositor::{Composite, compose_with_cancel};
use crate::compose::overlay::{OverlaySettings, OverlayStyle};
use crate::foundation::error::CompositeError;
use crate::foundation::fingerprint::{Fingerprint, StableHasher};
use crate::grid::spec::{GridSpec, SizingMode};
use crate::sequence::frame::Frame;

/// Handle for one recomposition request. Only the newest ticket may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

struct Published {
    request: Fingerprint,
    composite: Arc<Composite>,
}

/// Latest-request-wins front for [`compose_with_cancel`].
///
/// Hosts call [`Recomposer::begin`] on every parameter change and run
/// [`Recomposer::recompose`] with the ticket. Starting a newer request cancels older ones at the
/// next frame boundary, and only a request that is still the newest when it finishes replaces
/// the published atlas, so readers of [`Recomposer::latest`] never see a stale or partial result.
#[derive(Default)]
pub struct Recomposer {
    generation: AtomicU64,
    published: Mutex<Option<Published>>,
}

impl Recomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { generation }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.generation
    }

    /// Compose under `ticket`, reusing the published atlas when the request is unchanged.
    #[tracing::instrument(skip_all, fields(generation = ticket.generation))]
    pub fn recompose(
        &self,
        ticket: Ticket,
        window: &[Frame],
        grid: &GridSpec,
        overlays: OverlaySettings,
        style: &OverlayStyle,
    ) -> Result<Arc<Composite>, CompositeError> {
        let request = request_fingerprint(window, grid, overlays, style);
        if let Some(p) = self.lock().as_ref()
            && p.request == request
        {
            tracing::debug!("request unchanged; reusing published atlas");
            return Ok(Arc::clone(&p.composite));
        }

        let composite = compose_with_cancel(window, grid, overlays, style, || {
            !self.is_current(ticket)
        })?;

        let mut slot = self.lock();
        if !self.is_current(ticket) {
            tracing::debug!("finished after a newer request; discarding");
            return Err(CompositeError::Superseded);
        }
        let composite = Arc::new(composite);
        *slot = Some(Published {
            request,
            composite: Arc::clone(&composite),
        });
        Ok(composite)
    }

    /// Most recently published composite.
    pub fn latest(&self) -> Option<Arc<Composite>> {
        self.lock().as_ref().map(|p| Arc::clone(&p.composite))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Published>> {
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fingerprint of everything that influences a composition's output.
pub fn request_fingerprint(
    window: &[Frame],
    grid: &GridSpec,
    overlays: OverlaySettings,
    style: &OverlayStyle,
) -> Fingerprint {
    let mut h = StableHasher::new();

    h.write_u64(window.len() as u64);
    for f in window {
        match f.image() {
            Some(img) => {
                h.write_u8(1);
                h.write_u32(img.width());
                h.write_u32(img.height());
                h.write_bytes(img.as_raw());
            }
            None => {
                h.write_u8(0);
                h.write_str(f.label());
                h.write_str(f.failure().unwrap_or_default());
            }
        }
    }

    h.write_u32(grid.rows);
    h.write_u32(grid.columns);
    match grid.sizing {
        SizingMode::Fixed { width, height } => {
            h.write_u8(0);
            h.write_u32(width);
            h.write_u32(height);
        }
        SizingMode::OriginalScale => h.write_u8(1),
    }

    h.write_bool(overlays.grid_lines);
    h.write_bool(overlays.frame_indices);
    h.write_bool(overlays.preserve_source_scale);

    h.write_bytes(&style.grid_color);
    h.write_u32(style.grid_thickness);
    h.write_bytes(&style.label_color);
    h.write_bytes(&style.label_backing);
    h.write_u32(style.label_inset);
    h.write_u32(style.label_scale);

    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/recompose.rs"]
mod tests;
