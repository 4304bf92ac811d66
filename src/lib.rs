#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_access as access;
pub use vc_inflect as inflect;
pub use vc_path as path;
