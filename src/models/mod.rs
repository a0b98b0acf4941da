pub mod coords;
pub mod event;
pub mod kind;
pub mod snapshot;
