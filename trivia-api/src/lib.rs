use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod seed;
pub mod storage;

pub type DbConnection = Arc<Mutex<Connection>>;
