//! Domain models for the bank simulation

pub mod collector;
pub mod customer;
pub mod event;
pub mod queue;
pub mod teller;
