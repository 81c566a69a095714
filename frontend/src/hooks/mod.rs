pub mod use_image_preloader;

pub use use_image_preloader::*;
