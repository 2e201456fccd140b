pub mod menu;
pub mod view;

pub use menu::Menu;
