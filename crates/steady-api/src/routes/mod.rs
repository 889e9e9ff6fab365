pub mod auth;
pub mod chatbot;
pub mod forum;
pub mod goals;
pub mod health;
pub mod journal;
pub mod onboarding;
pub mod points;
pub mod profile;
