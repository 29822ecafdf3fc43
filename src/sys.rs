pub mod i3;
pub mod x11;
