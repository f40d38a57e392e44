// Reusable UI widgets

pub mod language_image;

pub use language_image::LanguageImage;
