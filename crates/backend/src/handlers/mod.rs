pub mod logs;
pub mod resource;
