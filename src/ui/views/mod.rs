pub mod failed;
pub mod pending;
pub mod quiz;
