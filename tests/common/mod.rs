#![allow(dead_code)]

pub mod asserts;
pub mod builders;
pub mod headers;

pub const BOBAPP_FRONT: &str = "http://178.62.54.206:8089";
