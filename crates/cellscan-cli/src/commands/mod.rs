#[cfg(feature = "camera")]
pub mod cameras;
pub mod detect;
