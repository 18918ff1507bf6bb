//! Connection Tests
//!
//! Runs a `Connection` against a scripted server on a loopback socket.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use wirekv::commands::{GET, LRANGE, MGET, PING, SET};
use wirekv::{ClientConfig, Connection, Response, WireError};

/// One expected request and the raw reply sent back for it
type Step = (&'static [u8], &'static [u8]);

/// Accept one client, check each request byte-for-byte, send the scripted
/// reply, then close the socket.
fn scripted_server(steps: Vec<Step>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        for (request, reply) in steps {
            let mut buf = vec![0u8; request.len()];
            stream.read_exact(&mut buf).unwrap();
            assert_eq!(buf, request, "unexpected request bytes");
            stream.write_all(reply).unwrap();
        }
    });

    (addr, handle)
}

fn step(request: &'static [u8], reply: &'static [u8]) -> Step {
    (request, reply)
}

fn connect(addr: &str) -> Connection {
    let config = ClientConfig::builder()
        .server_addr(addr)
        .read_timeout_ms(2000)
        .write_timeout_ms(2000)
        .build();
    Connection::connect(&config).unwrap()
}

#[test]
fn test_execute_round_trip() {
    let (addr, server) = scripted_server(vec![
        step(b"SET k 3\r\nabc\r\n", b"+OK\r\n"),
        step(b"GET k\r\n", b"$3\r\nabc\r\n"),
        step(b"LRANGE l 0 -1\r\n", b"*2\r\n$1\r\na\r\n$-1\r\n"),
    ]);
    let mut conn = connect(&addr);
    assert_eq!(conn.peer_addr(), addr);

    let resp = conn.execute(&SET, &[b"k", b"abc"]).unwrap();
    assert_eq!(resp, Response::status("OK", false));

    let resp = conn.execute(&GET, &[b"k"]).unwrap();
    assert_eq!(resp.bulk_data(), Some(&b"abc"[..]));

    let resp = conn.execute(&LRANGE, &[b"l", b"0", b"-1"]).unwrap();
    assert_eq!(resp, Response::multi_bulk(Some(vec![Some(b"a".to_vec()), None])));

    assert!(!conn.is_broken());
    server.join().unwrap();
}

#[test]
fn test_application_error_keeps_connection() {
    let (addr, server) = scripted_server(vec![
        step(b"GET k\r\n", b"-ERR Operation against a key holding the wrong kind of value\r\n"),
        step(b"PING\r\n", b"+PONG\r\n"),
    ]);
    let mut conn = connect(&addr);

    let resp = conn.execute(&GET, &[b"k"]).unwrap();
    assert!(resp.is_error());
    assert!(!conn.is_broken());

    let resp = conn.execute(&PING, &[]).unwrap();
    assert_eq!(resp.message(), "PONG");
    server.join().unwrap();
}

#[test]
fn test_desync_breaks_connection() {
    let (addr, server) = scripted_server(vec![step(b"GET k\r\n", b"+OK\r\n")]);
    let mut conn = connect(&addr);

    let err = conn.execute(&GET, &[b"k"]).unwrap_err();
    assert!(err.is_desync());
    assert!(conn.is_broken());

    let err = conn.execute(&PING, &[]).unwrap_err();
    assert!(matches!(err, WireError::ConnectionBroken));
    server.join().unwrap();
}

#[test]
fn test_close_mid_payload_is_transport() {
    let (addr, server) = scripted_server(vec![step(b"GET k\r\n", b"$10\r\nabc")]);
    let mut conn = connect(&addr);

    let err = conn.execute(&GET, &[b"k"]).unwrap_err();
    assert!(err.is_transport());
    assert!(conn.is_broken());
    server.join().unwrap();
}

#[test]
fn test_encode_failure_leaves_connection_usable() {
    let (addr, server) = scripted_server(vec![step(b"PING\r\n", b"+PONG\r\n")]);
    let mut conn = connect(&addr);

    let err = conn.execute(&MGET, &[b"a"]).unwrap_err();
    assert!(matches!(err, WireError::NotImplemented(_)));
    let err = conn.execute(&GET, &[]).unwrap_err();
    assert!(matches!(err, WireError::Argument(_)));
    assert!(!conn.is_broken());

    assert_eq!(conn.execute(&PING, &[]).unwrap().message(), "PONG");
    server.join().unwrap();
}

#[test]
fn test_connect_refused_is_transport() {
    // Bind then drop to get a port with nothing listening.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().to_string()
    };
    let config = ClientConfig::builder().server_addr(addr).build();
    match Connection::connect(&config) {
        Err(e) => assert!(e.is_transport()),
        Ok(_) => panic!("Expected connect to fail"),
    }
}
