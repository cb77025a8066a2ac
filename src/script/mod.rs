pub(crate) mod lsl;
