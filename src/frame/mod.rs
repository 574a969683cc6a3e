mod convert;
mod extract;
mod types;

pub use convert::yuv420_to_rgb;
pub use extract::extract_yuv;
pub use types::{Plane, RawFrame, RgbFrame, Size};
