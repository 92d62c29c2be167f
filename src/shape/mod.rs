pub(crate) mod adapt;
pub(crate) mod model;
pub(crate) mod runs;
