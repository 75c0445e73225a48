#![allow(dead_code)]

pub mod mock_state_store;
pub mod records;

pub use mock_state_store::MockStateStore;
pub use records::{a, aaaa, addresses, cname, mx, TestRecord};
