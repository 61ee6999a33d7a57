mod fs_image_store;
mod keys;
mod s3_image_store;
pub use keys::*;
pub mod fs {
    pub use super::fs_image_store::*;
}
pub mod s3 {
    pub use super::s3_image_store::*;
}
