#![allow(dead_code)]

pub mod mock_state_store;

pub use mock_state_store::MockStateStore;
