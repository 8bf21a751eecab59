//! Domain aggregates exposed by the directory service layer.

pub mod company;
pub mod consultant;
pub mod showcase;
pub mod testimonial;
pub mod types;
