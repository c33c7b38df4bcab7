mod action;
mod block;
mod builder;
mod config;
mod drag;
mod error;
mod history;
mod list;
mod template;
mod value;

pub use crate::action::*;
pub use crate::block::*;
pub use crate::builder::*;
pub use crate::config::*;
pub use crate::drag::{DragSession, DropPosition, drop_position};
pub use crate::error::*;
pub use crate::history::*;
pub use crate::list::*;
pub use crate::template::*;
pub use crate::value::*;
