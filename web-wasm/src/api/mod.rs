//! 外部API連携

pub mod inquiry;

pub use inquiry::FetchTransport;
