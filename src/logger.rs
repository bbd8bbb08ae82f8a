//! Logger module
//!
//! Console logging helpers for server lifecycle, access, warning, and
//! error lines.

use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("File server started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Storage root: {}", config.storage.root);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: u16) {
    println!("[Response] {status}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] [{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] [{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}
