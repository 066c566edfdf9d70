mod sync;

pub use sync::cmd_sync;
