pub mod chat_messages;
pub mod playlist_problems;
pub mod playlists;
pub mod problems;
pub mod submissions;
pub mod users;
