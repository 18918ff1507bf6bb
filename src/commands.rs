//! Command table
//!
//! Descriptors for the classic command set, keyed by wire name.

use crate::protocol::{Command, RequestShape as Req, ResponseShape as Resp};

// -----------------------------------------------------------------------------
// Connection / Server
// -----------------------------------------------------------------------------
pub const PING: Command = Command::new("PING", Req::NoArg, Resp::Status);
pub const SELECT: Command = Command::new("SELECT", Req::Key, Resp::Status);
pub const FLUSHDB: Command = Command::new("FLUSHDB", Req::NoArg, Resp::Status);
pub const FLUSHALL: Command = Command::new("FLUSHALL", Req::NoArg, Resp::Status);
pub const SAVE: Command = Command::new("SAVE", Req::NoArg, Resp::Status);
pub const BGSAVE: Command = Command::new("BGSAVE", Req::NoArg, Resp::Status);
pub const LASTSAVE: Command = Command::new("LASTSAVE", Req::NoArg, Resp::Number);
pub const SHUTDOWN: Command = Command::new("SHUTDOWN", Req::NoArg, Resp::Status);
pub const INFO: Command = Command::new("INFO", Req::NoArg, Resp::Bulk);
pub const DBSIZE: Command = Command::new("DBSIZE", Req::NoArg, Resp::Number);

// -----------------------------------------------------------------------------
// Keys
// -----------------------------------------------------------------------------
pub const EXISTS: Command = Command::new("EXISTS", Req::Key, Resp::Boolean);
pub const DEL: Command = Command::new("DEL", Req::Key, Resp::Boolean);
pub const TYPE: Command = Command::new("TYPE", Req::Key, Resp::String);
pub const KEYS: Command = Command::new("KEYS", Req::Key, Resp::Bulk);
pub const RANDOMKEY: Command = Command::new("RANDOMKEY", Req::NoArg, Resp::String);
pub const RENAME: Command = Command::new("RENAME", Req::KeyKey, Resp::Status);
pub const RENAMENX: Command = Command::new("RENAMENX", Req::KeyKey, Resp::Boolean);
pub const EXPIRE: Command = Command::new("EXPIRE", Req::KeyNum, Resp::Boolean);
pub const TTL: Command = Command::new("TTL", Req::Key, Resp::Number);
pub const MOVE: Command = Command::new("MOVE", Req::KeyNum, Resp::Boolean);
pub const SORT: Command = Command::new("SORT", Req::KeySpec, Resp::MultiBulk);

// -----------------------------------------------------------------------------
// Strings
// -----------------------------------------------------------------------------
pub const SET: Command = Command::new("SET", Req::KeyValue, Resp::Status);
pub const GET: Command = Command::new("GET", Req::Key, Resp::Bulk);
pub const GETSET: Command = Command::new("GETSET", Req::KeyValue, Resp::Bulk);
pub const SETNX: Command = Command::new("SETNX", Req::KeyValue, Resp::Boolean);
pub const MGET: Command = Command::new("MGET", Req::MultiKey, Resp::MultiBulk);
pub const INCR: Command = Command::new("INCR", Req::Key, Resp::Number);
pub const INCRBY: Command = Command::new("INCRBY", Req::KeyNum, Resp::Number);
pub const DECR: Command = Command::new("DECR", Req::Key, Resp::Number);
pub const DECRBY: Command = Command::new("DECRBY", Req::KeyNum, Resp::Number);

// -----------------------------------------------------------------------------
// Lists
// -----------------------------------------------------------------------------
pub const RPUSH: Command = Command::new("RPUSH", Req::KeyValue, Resp::Status);
pub const LPUSH: Command = Command::new("LPUSH", Req::KeyValue, Resp::Status);
pub const LLEN: Command = Command::new("LLEN", Req::Key, Resp::Number);
pub const LRANGE: Command = Command::new("LRANGE", Req::KeyNumNum, Resp::MultiBulk);
pub const LTRIM: Command = Command::new("LTRIM", Req::KeyNumNum, Resp::Status);
pub const LINDEX: Command = Command::new("LINDEX", Req::KeyNum, Resp::Bulk);
pub const LSET: Command = Command::new("LSET", Req::KeyIndexValue, Resp::Status);
pub const LREM: Command = Command::new("LREM", Req::KeyCountValue, Resp::Number);
pub const LPOP: Command = Command::new("LPOP", Req::Key, Resp::Bulk);
pub const RPOP: Command = Command::new("RPOP", Req::Key, Resp::Bulk);

// -----------------------------------------------------------------------------
// Sets
// -----------------------------------------------------------------------------
pub const SADD: Command = Command::new("SADD", Req::KeyValue, Resp::Boolean);
pub const SREM: Command = Command::new("SREM", Req::KeyValue, Resp::Boolean);
pub const SCARD: Command = Command::new("SCARD", Req::Key, Resp::Number);
pub const SISMEMBER: Command = Command::new("SISMEMBER", Req::KeyValue, Resp::Boolean);
pub const SMEMBERS: Command = Command::new("SMEMBERS", Req::Key, Resp::MultiBulk);
pub const SINTER: Command = Command::new("SINTER", Req::MultiKey, Resp::MultiBulk);
pub const SMOVE: Command = Command::new("SMOVE", Req::KeyKeyValue, Resp::Boolean);

/// Every known command
pub static ALL: &[Command] = &[
    PING, SELECT, FLUSHDB, FLUSHALL, SAVE, BGSAVE, LASTSAVE, SHUTDOWN, INFO, DBSIZE,
    EXISTS, DEL, TYPE, KEYS, RANDOMKEY, RENAME, RENAMENX, EXPIRE, TTL, MOVE, SORT,
    SET, GET, GETSET, SETNX, MGET, INCR, INCRBY, DECR, DECRBY,
    RPUSH, LPUSH, LLEN, LRANGE, LTRIM, LINDEX, LSET, LREM, LPOP, RPOP,
    SADD, SREM, SCARD, SISMEMBER, SMEMBERS, SINTER, SMOVE,
];

/// Find a command by name, ignoring ASCII case
pub fn lookup(name: &str) -> Option<&'static Command> {
    ALL.iter().find(|cmd| cmd.code.eq_ignore_ascii_case(name))
}
