pub(crate) mod direction;
pub(crate) mod mapper;
