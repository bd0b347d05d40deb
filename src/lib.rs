pub mod error;
pub mod memo;
pub mod ops;
pub mod stream;

mod source;

// Re-export the core surface at the crate root
pub use error::{StreamError, StreamResult};
pub use memo::Memoized;
pub use stream::{Iter, Stream};
