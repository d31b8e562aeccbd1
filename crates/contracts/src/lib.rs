pub mod api;
pub mod dashboards;
pub mod routing;
pub mod shared;
