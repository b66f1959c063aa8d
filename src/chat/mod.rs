pub mod booking;
pub mod message;
pub mod session;

pub use booking::*;
pub use message::*;
pub use session::*;
