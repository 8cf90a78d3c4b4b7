pub mod advisor;
pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod llm_client;
pub mod matching;
pub mod models;
pub mod planning;
pub mod report;
pub mod routes;
pub mod skills;
pub mod state;
pub mod store;
