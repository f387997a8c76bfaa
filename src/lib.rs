//! Schema-bound configuration records for behavior rig calibration.
//!
//! [`model`] holds the generic machinery (descriptors, decode/encode, version
//! checks, schema export); [`records`] binds each calibration schema to it.

pub mod model;
pub mod records;
