pub mod contact;
pub mod nav;
