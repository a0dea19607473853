pub mod hex;
pub mod model;

pub use hex::parse_hex_bytes;
pub use model::{load_raw_bin, Image, Segment};
