#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod arithmetic;

mod dev;
mod error;
mod field;

pub use crate::{
    error::{Error, Result},
    field::{NoSqrt, P3Mod4Field, PowerFn, PrimeField, Shanks, SqrtStrategy},
};
pub use num_bigint;
pub use num_traits;
