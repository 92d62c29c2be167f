pub(crate) mod colors;
pub(crate) mod record;
pub(crate) mod writer;
