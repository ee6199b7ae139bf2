pub mod recipe;
pub mod reply;

pub use recipe::handle_image_message;
pub use reply::handle_text_message;
