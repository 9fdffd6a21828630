pub mod codec;
pub mod perspective;
pub mod resolver;
pub mod snapshot;
pub mod square;

pub use perspective::Perspective;
pub use resolver::resolve_click;
pub use snapshot::BoardSnapshot;
pub use square::{Color, Square};
