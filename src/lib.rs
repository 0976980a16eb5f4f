pub mod input;
pub mod response;
pub mod session_end;
pub mod session_start;
pub mod watch_log;
