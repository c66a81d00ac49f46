pub mod init;
pub mod summary;
