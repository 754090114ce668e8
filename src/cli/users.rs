use anyhow::{Result, bail};
use comfy_table::Cell;

use super::ui;
use crate::core::models::{NewUser, User};
use crate::core::services::UserService;
use crate::views::MISSING_FIELDS;

impl User {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("User ID"),
            ui::header_cell("Username"),
            ui::header_cell("Email"),
        ]);
        table.add_row(vec![
            Cell::new(self.user_id),
            Cell::new(&self.username),
            Cell::new(&self.email),
        ]);
        table.to_string()
    }
}

pub async fn create<S: UserService + ?Sized>(
    service: &S,
    username: &str,
    email: &str,
) -> Result<User> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() {
        bail!(MISSING_FIELDS);
    }

    let new_user = NewUser {
        username: username.to_string(),
        email: email.to_string(),
    };
    let user = ui::while_loading(ui::CREATE_USER_LABELS, service.create_user(&new_user)).await?;
    println!("{}", user.display_as_table());
    Ok(user)
}
