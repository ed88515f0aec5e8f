//! Schema sources backed by the Kontent.ai Delivery API.
//!
//! [`DeliveryClient`] lists content types over HTTP; [`FileSource`] reads the
//! same response shape from a JSON file on disk.

mod client;
mod file;
mod response;

pub use client::{DEFAULT_BASE_URL, DeliveryClient};
pub use file::FileSource;
