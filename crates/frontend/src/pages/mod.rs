pub mod map_page;
pub mod post_list;
