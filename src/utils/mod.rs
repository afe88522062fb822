pub mod address_validator;
pub mod hash;

pub use address_validator::AddressValidator;
