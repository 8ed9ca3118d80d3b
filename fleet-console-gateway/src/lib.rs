//! # fleet-console-gateway
//!
//! HTTP gateway library for the fleet console backend: maps the logical
//! vehicle and status operations onto the backend's REST/JSON contract.
//!
//! ## Design
//!
//! The two traits [`VehicleGateway`] and [`StatusGateway`] are the boundary
//! the workflow layer depends on; [`RestVehicleGateway`] and
//! [`RestStatusGateway`] are the `reqwest`-backed implementations. Keeping
//! the traits in this crate lets the core crate substitute test doubles
//! without pulling in any HTTP machinery.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fleet_console_gateway::{RestApiConfig, RestVehicleGateway, VehicleGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = RestVehicleGateway::new(RestApiConfig::default());
//!
//!     let vehicles = gateway.list().await?;
//!     for vehicle in &vehicles {
//!         println!("{} {}", vehicle.plate, vehicle.model);
//!     }
//!
//!     let matches = gateway.search("ABC123 2020").await?;
//!     println!("{} coincidencias", matches.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GatewayError>`](GatewayError). Transport
//! failures map to [`GatewayError::NetworkError`] / [`GatewayError::Timeout`],
//! HTTP 404 to [`GatewayError::NotFound`], and backend-side validation
//! rejections (400/422) to [`GatewayError::ValidationRejected`]. There is no
//! automatic retry: every failure surfaces to the caller, which decides
//! whether to re-issue the request.

mod error;
mod gateways;
mod http;
mod traits;
mod types;

// Re-export error types
pub use error::{GatewayError, Result};

// Re-export gateway traits
pub use traits::{StatusGateway, VehicleGateway};

// Re-export types
pub use types::{Status, Vehicle, VehicleDraft};

// Re-export REST implementations
pub use gateways::rest::{RestApiConfig, RestStatusGateway, RestVehicleGateway};
