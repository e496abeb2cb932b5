pub(crate) mod effect;
pub(crate) mod segment;
pub(crate) mod sequence;
