pub mod backlog_generator;
pub mod generation_error;
