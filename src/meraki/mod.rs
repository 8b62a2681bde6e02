mod client;
mod devices;
pub mod domain;
mod error;
mod organizations;
mod request;

pub use client::{MerakiClientError, new_client};
pub use devices::get_organization_devices;
pub use error::MerakiError;
pub use organizations::{get_organization_id, get_organizations};
