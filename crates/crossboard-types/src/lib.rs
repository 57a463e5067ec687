pub mod board;
pub mod component;
pub mod defaults;
pub mod igs;

pub use board::*;
pub use component::*;
pub use defaults::*;
pub use igs::*;
