//! Minimal server-rendered pages. Every dynamic value goes through
//! [`escape`] before it is spliced into markup.

use time::macros::format_description;

use crate::users::model::User;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

pub fn user_list(users: &[User], flash: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(flash) = flash {
        body.push_str(&format!("<p class=\"flash\">{}</p>\n", escape(flash)));
    }
    body.push_str("<p><a href=\"/add\">Add user</a></p>\n");
    body.push_str("<table>\n<tr><th>Name</th><th>Email</th><th>Joined</th><th></th></tr>\n");
    for user in users {
        body.push_str(&format!(
            "<tr><td>{name}</td><td>{email}</td><td>{joined}</td>\
             <td><a href=\"/update/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
            name = escape(&user.name),
            email = escape(&user.email),
            joined = joined_on(user),
            id = user.id,
        ));
    }
    body.push_str("</table>");
    layout("Users", &body)
}

pub fn add_form() -> String {
    layout("Add user", &user_form("/add", None))
}

pub fn edit_form(user: &User) -> String {
    layout("Edit user", &user_form(&format!("/update/{}", user.id), Some(user)))
}

fn user_form(action: &str, user: Option<&User>) -> String {
    let name = user.map(|u| escape(&u.name)).unwrap_or_default();
    let email = user.map(|u| escape(&u.email)).unwrap_or_default();
    // The edit form cannot pre-fill the password: only its hash is stored.
    // Leaving it blank keeps the current one.
    let password_row = if user.is_some() {
        "<label>Password <input type=\"password\" name=\"password\" placeholder=\"leave blank to keep current\"></label><br>\n"
            .to_string()
    } else {
        "<label>Password <input type=\"password\" name=\"password\" required></label><br>\n"
            .to_string()
    };
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\" required></label><br>\n\
         <label>Email <input type=\"email\" name=\"email\" value=\"{email}\" required></label><br>\n\
         {password_row}\
         <button type=\"submit\">Save</button>\n\
         </form>\n<p><a href=\"/\">Back</a></p>",
    )
}

pub fn confirm_delete(user: &User) -> String {
    let body = format!(
        "<p>Delete user <strong>{name}</strong> ({email})?</p>\n\
         <form method=\"post\" action=\"/delete/{id}\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n<p><a href=\"/\">Cancel</a></p>",
        name = escape(&user.name),
        email = escape(&user.email),
        id = user.id,
    );
    layout("Confirm delete", &body)
}

pub fn not_found() -> String {
    layout("Not found", "<p>No such user.</p>\n<p><a href=\"/\">Back</a></p>")
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!("<p>{}</p>\n<p><a href=\"/\">Back</a></p>", escape(message)),
    )
}

fn joined_on(user: &User) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]");
    user.joined_on.format(&fmt).unwrap_or_default()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
