pub mod init;
pub mod regions;
pub mod register;
pub mod search;
