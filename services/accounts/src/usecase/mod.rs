pub mod account;
pub mod moderation;
pub mod registration;
pub mod verification;
