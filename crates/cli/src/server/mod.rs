pub mod supervisor;

pub use supervisor::{bind_listeners, supervise, Shutdown};
