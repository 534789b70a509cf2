//! Domain layer - filter DSL, repository traits, change events, service

pub mod criteria;
pub mod events;
pub mod filter;
pub mod repository;
pub mod service;

pub use events::{ChangeNotifier, EntityChange, NoOpChangeNotifier};
pub use filter::{Page, Sort, SortDirection};
pub use service::{Repositories, Service};
