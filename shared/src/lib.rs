pub mod shared_gift_catalog;
pub mod shared_gift_wheel;
pub mod shared_preload;
