mod synthetic;

pub use synthetic::*;
