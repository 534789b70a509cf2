//! HTTP surfaces: entity CRUD REST and the notification stream bridge

pub mod rest;
pub mod stream;
