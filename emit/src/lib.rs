pub mod error;
pub mod proxy;
pub mod session;
pub mod sink;
pub mod table;
pub mod wrapper;

pub use error::EmitError;
pub use session::{generate, Artifacts, ProxyFile};
pub use sink::Sink;
pub use table::FunctionTable;
