mod device;
mod organization;

pub use device::Device;
pub use organization::Organization;
