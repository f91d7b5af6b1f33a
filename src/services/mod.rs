//! Service layer sitting between the HTTP routes and the shared state.

pub mod alarm_service;
pub mod clock_driver;
pub mod documentation;
pub mod health_service;
pub mod match_service;
pub mod notify_service;
pub mod sse_service;
