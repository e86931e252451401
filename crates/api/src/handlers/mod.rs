pub mod calendar;
pub mod employee;
pub mod project;
pub mod work_log;
