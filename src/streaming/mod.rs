pub mod reader;

pub use reader::{EventSource, MessageStream};
