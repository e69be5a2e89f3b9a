pub mod access;
pub mod api;
pub mod app;
pub mod dashboard;
pub mod fragments;
pub mod metrics;
pub mod session;
