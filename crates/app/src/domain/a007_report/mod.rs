pub mod page;
pub mod service;
