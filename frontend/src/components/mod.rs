pub mod background_effects;
pub mod confetti;
pub mod floating_elements;
pub mod gift_box;
pub mod gift_reveal;
pub mod gradient_background;
pub mod optimized_image;

pub use background_effects::BackgroundEffects;
pub use confetti::Confetti;
pub use floating_elements::FloatingElements;
pub use gift_box::GiftBox;
pub use gift_reveal::GiftReveal;
pub use gradient_background::GradientBackground;
pub use optimized_image::OptimizedImage;
