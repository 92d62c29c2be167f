pub(crate) mod emitter;
pub(crate) mod options;
