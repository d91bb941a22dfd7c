pub mod cache;
pub mod resolver;
pub mod wire;

pub use cache::RecordCache;
pub use resolver::Resolver;
pub use wire::Message;
