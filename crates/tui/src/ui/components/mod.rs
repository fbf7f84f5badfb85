pub mod charts;
pub mod tabs;
pub mod toast;
pub mod tokens;
