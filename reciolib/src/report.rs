//! Текстовая таблица пользователей.

use crate::{error::Result, model::User, table::rule};
use std::io::Write;

pub const USERS_HEADER: &str = "ID\t| Name\t\t\t| Username\t\t\t| Email\t\t\t\t\t\t\t| Address";
pub const USERS_RULE: usize = 130;

pub fn render_users<W: Write>(mut w: W, users: &[User]) -> Result<()> {
    let sep = rule(USERS_RULE);
    writeln!(w, "{USERS_HEADER}")?;
    writeln!(w, "{sep}")?;

    for u in users {
        writeln!(
            w,
            "{}\t| {:<20}\t| {:<20}\t| {:<20}\t| {}",
            u.id,
            u.name,
            u.username,
            u.email,
            u.address_line()
        )?;
        writeln!(w, "{sep}")?;
    }
    Ok(())
}
