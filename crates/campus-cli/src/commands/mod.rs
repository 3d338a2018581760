pub mod admin;
pub mod dashboard;
pub mod department;
pub mod dispatch;
pub mod faculty;
pub mod logout;
pub mod shared;
pub mod stats;
pub mod tab;
pub mod university;
pub mod user;
