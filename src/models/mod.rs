mod board;

pub use board::BoardModel;
