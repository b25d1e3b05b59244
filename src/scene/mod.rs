pub(crate) mod flowers;
pub(crate) mod model;
