//! Shared auto-rickshaw route engine for Mumbai.
//!
//! Answers: "how do I get from here to there?" with up to four kinds of
//! route: a fixed-fare ride from a nearby stand, a multi-hop trip across
//! the stand network, a direct metered auto, and a train-assisted journey.

pub mod cache;
pub mod domain;
pub mod engine;
pub mod fare;
pub mod geo;
pub mod provider;
pub mod store;
pub mod web;
