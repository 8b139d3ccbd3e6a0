pub mod local;

pub use local::LocalBridge;
