//! rrdns infrastructure: hickory adapters and the in-memory rotation store.
pub mod dns;
