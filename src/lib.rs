pub mod adapters;
pub mod api;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
