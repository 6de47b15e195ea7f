pub mod history;
pub mod initialize;
pub mod log;
pub mod models;
pub mod pool;
pub mod queries;
