pub mod drag;
pub mod dynamics;
pub mod environment;
pub mod gravity;
pub mod orbital;
pub mod thrust;
