//! User directory routes (all behind bearer-token auth).

mod list;
mod lookup;
mod profile;
mod remove;
mod update;

pub use list::list_users;
pub use lookup::get_user;
pub use profile::me;
pub use remove::delete_user;
pub use update::update_user;
