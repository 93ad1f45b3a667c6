// Server module entry point
// Listener setup, accept loop, connection handling and shutdown signals

pub mod connection;
pub mod listener;
pub mod shutdown;

// `loop` is a keyword, so the module lives in loop.rs as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export the pieces main() wires together
pub use listener::bind_listener;
pub use server_loop::run;
pub use shutdown::spawn_signal_listener;
