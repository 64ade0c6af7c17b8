pub mod catalog;
pub mod config;
pub mod environment;
pub mod errors;
pub mod game;
pub mod guide;
pub mod normalization;
pub mod query;
pub mod routes;
pub mod search;
