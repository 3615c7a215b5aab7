//! Metro weather dashboard
//!
//! Polls current conditions and a 7-day forecast for a fixed set of Indian
//! metro cities and raises threshold alerts when a city stays too hot for
//! several consecutive checks.

pub mod action;
pub mod alert;
pub mod api;
pub mod city;
pub mod components;
pub mod conditions;
pub mod config;
pub mod effect;
pub mod error;
pub mod logging;
pub mod reducer;
pub mod state;
