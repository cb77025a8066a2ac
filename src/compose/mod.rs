pub(crate) mod atlas;
pub(crate) mod blit;
pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod glyphs;
pub(crate) mod overlay;
pub(crate) mod recompose;
