//! External service clients.

pub mod images;

pub use images::ImageHostClient;
