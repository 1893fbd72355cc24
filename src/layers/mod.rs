pub mod group;
pub mod marker;
