//! Database and configuration models of the directory service.

pub mod case_study;
pub mod company;
pub mod config;
pub mod consultant;
pub mod portfolio_item;
pub mod testimonial;
