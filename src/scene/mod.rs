pub(crate) mod config;
pub(crate) mod director;
/// Preset timeline for the portfolio landing page.
pub mod landing;
pub(crate) mod observer;
pub(crate) mod target;
