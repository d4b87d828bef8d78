//! Floating Arrangements Common Library
//!
//! Web(WASM)版から使うコントローラと型。ブラウザ依存なし。

pub mod carousel;
pub mod config;
pub mod error;
pub mod form;
pub mod gallery;

pub use carousel::{Carousel, CarouselState, Dot, Navigation, DEFAULT_TRANSITION};
pub use config::{SiteConfig, DEFAULT_INQUIRY_ENDPOINT};
pub use error::{Error, Result, SubmissionFailure};
pub use form::{
    FieldUpdate, FormController, FormDraft, InquiryTransport, InquiryType, Notice,
    RequiredField, SubmissionState, SubmitBlocked,
};
pub use gallery::{default_images, Gallery, ImageDescriptor};
