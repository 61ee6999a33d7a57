pub mod store_image;
