pub mod argument;
pub mod entity;
pub mod lookup;
pub mod params;
