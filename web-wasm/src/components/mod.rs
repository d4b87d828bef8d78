//! ページ構成コンポーネント

pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod highlights;
pub mod image_gallery;
pub mod services;
pub mod testimonials;
