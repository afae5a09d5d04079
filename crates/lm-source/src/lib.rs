/// Image file I/O for lumatlas (decode to buffer, encode from buffer).

pub mod image;

pub use self::image::{load_atlas, save_atlas};
