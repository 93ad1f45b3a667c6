// Listener module
// Binds the TCP listening socket the process holds for its lifetime

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Bind a `TcpListener` on the given address.
///
/// `SO_REUSEADDR` is set so a restart does not trip over sockets left in
/// TIME_WAIT. `SO_REUSEPORT` is deliberately not set: the port must be
/// held exclusively, and a second instance started while the first runs
/// must fail to bind.
///
/// Bind errors are returned to the caller; there is no retry.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow rebinding a port in TIME_WAIT state after a restart
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.port() > 0);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = first.local_addr().unwrap();

        // The port is held exclusively while the first listener lives
        assert!(bind_listener(addr).is_err());
    }
}
