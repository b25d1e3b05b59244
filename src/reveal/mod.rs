pub(crate) mod typed;
