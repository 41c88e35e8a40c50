pub mod restore;
pub mod watch;
