pub mod home;
pub mod sentence;
