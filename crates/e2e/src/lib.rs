// <crate>/tests signals to Cargo that files inside of it are integration
// tests. Integration tests are compiled into separate binaries which is slow.
// To avoid this we create one integration test there and in that test we
// include all the tests we want to run.

pub mod local_node;
pub mod setup;
