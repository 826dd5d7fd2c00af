pub mod filter_bar;
pub mod login_panel;
pub mod map_view;
pub mod nav_bar;
pub mod toast;
