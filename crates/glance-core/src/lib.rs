pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod pixmap;
pub mod viewport;
