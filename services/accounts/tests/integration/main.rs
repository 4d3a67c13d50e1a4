mod helpers;

mod moderation_test;
mod registration_test;
