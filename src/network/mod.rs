//! Network Module
//!
//! Blocking TCP transport for the codec.
//!
//! ## Model
//! - One request in flight per connection
//! - Timeouts are socket deadlines; expiry surfaces as a transport error
//! - No pooling or reconnects

mod connection;

pub use connection::Connection;
