pub(crate) mod generator;
pub(crate) mod placement;
pub(crate) mod rng;
