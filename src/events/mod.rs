pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod touch;
pub mod visibility;
