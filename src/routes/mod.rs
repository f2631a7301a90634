pub use waitlist::error_chain_fmt;

pub mod health_check;
pub mod landing;
pub mod waitlist;
