//! docserve - static documentation file server
//!
//! Serves the files under a root directory (the working directory by
//! default) over HTTP/1.1 on a configurable address, 0.0.0.0:4000 out of
//! the box.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
