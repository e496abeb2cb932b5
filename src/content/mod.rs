pub(crate) mod catalog;
pub(crate) mod popup;
pub(crate) mod vision;
