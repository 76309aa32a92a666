mod interface;
mod memory_store;

pub use interface::UserStore;
pub use memory_store::MemoryStore;
