pub mod optimize;
pub mod parts;
pub mod ranges;
