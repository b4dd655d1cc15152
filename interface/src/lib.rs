pub mod argument;
pub mod registry;
pub mod ret;

pub use argument::{base_name, is_basic_type, Argument, ArgumentList};
pub use registry::{Class, MethodRegistry, Module, Overload, StaticMethod};
pub use ret::{ReturnCategory, ReturnSlot, ReturnValue};
