//! Page Components

mod chat_room;
mod home;
mod not_found;

pub use chat_room::ChatRoomPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
