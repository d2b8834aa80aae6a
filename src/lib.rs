pub mod api;
pub mod business;
pub mod config;
pub mod mongodb;
pub mod photo;
pub mod review;
pub mod schema;
