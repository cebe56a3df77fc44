pub mod auth_buttons;
pub mod brand;
pub mod button;
pub mod drawer;
pub mod nav_menu;
pub mod theme_toggle;

pub use auth_buttons::AuthButtons;
pub use brand::Brand;
pub use button::{Button, ButtonVariant};
pub use drawer::NavDrawer;
pub use nav_menu::DesktopNav;
pub use theme_toggle::ThemeToggle;
