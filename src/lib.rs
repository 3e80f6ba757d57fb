#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod csn;
pub mod error;
pub mod gentime;
pub mod prep;
pub mod rules;

pub use csn::Csn;
pub use prep::{
    AssertionType, CasePolicy, prepare, prepare_numeric, prepare_telephone,
};
