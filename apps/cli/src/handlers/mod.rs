pub mod architectures;
pub mod features;
pub mod validate;
