//! In-memory cache for API responses with time-based expiration
//!
//! This module provides a concurrency-safe cache that stores raw response
//! payloads keyed by request URL. A background reaper task removes entries
//! older than a configured interval, so repeated pagination and lookups
//! within that window are served without touching the network.

mod timed;

pub use timed::TimedCache;
