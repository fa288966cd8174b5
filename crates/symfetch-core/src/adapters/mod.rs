mod bingx;

pub use bingx::{BingxSource, DEFAULT_BASE_URL};
