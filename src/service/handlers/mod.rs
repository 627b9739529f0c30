//! HTTP request handlers for the validation web service

pub mod examples;
pub mod health;
pub mod normalize;
pub mod validate;
