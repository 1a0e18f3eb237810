//! Library scanning: enumerates playable files under the library folder.
//!
//! The `Track` model lives in `library::model`; `library::scan` walks the
//! directory tree and reads tag metadata.

mod model;
mod scan;

pub use model::*;
pub use scan::scan;
