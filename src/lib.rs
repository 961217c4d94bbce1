pub mod linearmap;
pub mod map;
pub mod util;
