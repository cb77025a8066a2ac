pub(crate) mod cell;
pub(crate) mod resolve;
pub(crate) mod spec;
