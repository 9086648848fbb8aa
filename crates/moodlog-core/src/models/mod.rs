pub mod checkin;
pub mod diary;
pub mod mood;
pub mod profile;
