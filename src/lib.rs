//! Counselpoint - University Counseling Appointment Backend
//!
//! This crate implements counselor weekly availability management and
//! capacity-aware 30-minute slot resolution for consultation booking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
