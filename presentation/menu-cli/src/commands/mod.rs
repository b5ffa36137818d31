pub mod notification;
pub mod parser;
pub mod render;
pub mod session;
