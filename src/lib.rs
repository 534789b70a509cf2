//! Money market deal data service
//!
//! CRUD microservice for money market deals, fiscal calendar entities,
//! report batches, upload notifications, dealers, and placeholder tags.
//! Entities live in a relational store; an in-process search mirror is
//! maintained asynchronously from change events and served via `_search`
//! endpoints. An auxiliary bridge fans BI notifications out to long-lived
//! SSE consumers.

pub mod contract;
pub use contract::{BatchStatus, DomainError};

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
