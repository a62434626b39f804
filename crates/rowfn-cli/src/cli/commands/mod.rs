//! CLI command handlers, one file per subcommand.

mod apply;
mod call;
mod list;

pub use apply::run_apply;
pub use call::run_call;
pub use list::run_list;
