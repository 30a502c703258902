pub mod nav;
pub mod pointer;
pub mod scroll;

pub use nav::wire_nav_dots;
pub use pointer::wire_pointer;
pub use scroll::wire_scroll;
