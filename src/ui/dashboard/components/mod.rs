pub mod activity;
pub mod footer;
pub mod header;
pub mod logs;
pub mod plugins;
pub mod system;
pub mod tabs;
pub mod testing;
