pub mod bump;
pub mod hook;
pub mod install_hook;
pub mod show;
