pub mod env;
pub mod instance;
pub mod storage;

pub use env::{MapEnv, ProcessEnv};
pub use instance::ConfiguredInstanceId;
pub use storage::InMemoryTenantRepository;
