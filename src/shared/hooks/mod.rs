// Custom Dioxus hooks
pub mod use_drawer;
pub mod use_menu;
pub mod use_viewport;

pub use use_drawer::{use_drawer, DrawerHandle, DrawerState};
pub use use_menu::{use_menu, AnchorId, MenuHandle, MenuState};
pub use use_viewport::{use_viewport_width, ViewportClass, SSR_VIEWPORT_WIDTH};
