pub mod client;
pub mod error;
pub mod response;
pub mod transport;

// Re-exports for convenience
pub use client::Geocoder;
pub use error::GeocodeError;
pub use response::{Coordinates, GeocodeResponse};
pub use transport::{HttpTransport, ReqwestTransport};
