pub mod curve;
pub mod equations;
pub mod estimate;
pub mod session;
