pub mod capture;
pub mod consts;
pub mod detect;
pub mod error;
pub mod frame;
pub mod io;
pub mod params;
pub mod session;
