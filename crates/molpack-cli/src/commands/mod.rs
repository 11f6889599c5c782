pub mod convert;
pub mod displace;
