use serde::Deserialize;

/// Form body shared by the add and edit pages. On the edit page an empty
/// password means "keep the current one".
#[derive(Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Query parameters of the list page.
#[derive(Debug, Deserialize)]
pub struct FlashParams {
    pub flash: Option<String>,
}
