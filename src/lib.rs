//! # wirekv
//!
//! Wire codec and blocking client for the classic line-oriented,
//! length-prefixed key-value protocol:
//! - Request encoding driven by each command's argument shape
//! - Reply decoding driven by each command's reply shape
//! - Binary-safe bulk payloads
//! - Transport failures, protocol desyncs and server errors kept apart
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Caller / wirekv-cli                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command descriptor + args
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Connection                                 │
//! │           (one request/response at a time)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Encoder   │          │   Decoder   │
//!   │ (by shape)  │          │ (by shape)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Framing   │
//!                           │  (BufRead)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod commands;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{WireError, Result};
pub use config::ClientConfig;
pub use network::Connection;
pub use protocol::{decode_response, encode_request, Command, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of wirekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
