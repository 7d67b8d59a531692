pub mod local;
pub mod memory;

pub use local::DirectorySink;
pub use memory::MemorySink;
