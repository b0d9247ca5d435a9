pub mod plane;
pub mod point;
pub mod vector;
