mod nav;
mod route;

pub use nav::*;
pub use route::*;
