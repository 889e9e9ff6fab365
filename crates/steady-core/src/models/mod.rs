pub mod chat;
pub mod forum;
pub mod goal;
pub mod journal;
pub mod points;
pub mod profile;
