pub mod aggregator;
pub mod dto;
pub mod gradebook_service;
pub mod period_filter;

#[cfg(test)]
mod gradebook_service_test;
