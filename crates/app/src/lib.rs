pub mod dashboards;
pub mod domain;
pub mod fixtures;
pub mod shared;
pub mod system;
