pub mod ls;

pub use ls::*;
