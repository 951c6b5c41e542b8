pub mod error;
pub mod virtual_node;

pub use error::RingError;
pub use error::RingResult;
pub use virtual_node::VirtualNode;
