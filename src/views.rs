//! Server-rendered HTML pages
//!
//! Pages are built as plain strings; handlers wrap them in
//! `axum::response::Html`. Everything user-supplied passes through
//! [`escape`] before it reaches a page.

use axum::http::StatusCode;

use crate::models::Item;

/// Escape text for HTML bodies and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shared page skeleton
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{} - Item Catalog</title>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        escape(title),
        body
    )
}

/// The item list shown at /
pub fn item_list(items: &[Item]) -> String {
    let mut body = String::from("<h1>Items</h1>\n<p><a href=\"/create\">Add a new item</a></p>\n");

    if items.is_empty() {
        body.push_str("<p>No items yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for item in items {
            body.push_str(&format!(
                "<li><a href=\"/view/{id}\">{name}</a>: {description} \
                 <a href=\"/edit/{id}\">edit</a> \
                 <a href=\"/delete/{id}\">delete</a></li>\n",
                id = item.id,
                name = escape(&item.name),
                description = escape(&item.description),
            ));
        }
        body.push_str("</ul>\n");
    }

    page("Items", &body)
}

/// The empty creation form shown at /create
pub fn create_form() -> String {
    let body = "<h1>Add Item</h1>\n\
                <form method=\"post\" action=\"/create\">\n\
                <p><label for=\"item_name\">Name</label><br>\n\
                <input type=\"text\" name=\"item_name\" id=\"item_name\"></p>\n\
                <p><label for=\"item_description\">Description</label><br>\n\
                <textarea name=\"item_description\" id=\"item_description\"></textarea></p>\n\
                <p><button type=\"submit\">Save</button></p>\n\
                </form>\n\
                <p><a href=\"/\">Back to list</a></p>\n";

    page("Add Item", body)
}

/// A single item shown at /view/{id}
pub fn item_detail(item: &Item) -> String {
    let body = format!(
        "<h1>{name}</h1>\n\
         <p>{description}</p>\n\
         <p><a href=\"/edit/{id}\">Edit</a> \
         <a href=\"/delete/{id}\">Delete</a> \
         <a href=\"/\">Back to list</a></p>\n",
        id = item.id,
        name = escape(&item.name),
        description = escape(&item.description),
    );

    page(&item.name, &body)
}

/// The pre-filled edit form shown at /edit/{id}
pub fn edit_form(item: &Item) -> String {
    let body = format!(
        "<h1>Edit Item</h1>\n\
         <form method=\"post\" action=\"/edit/{id}\">\n\
         <p><label for=\"item_name\">Name</label><br>\n\
         <input type=\"text\" name=\"item_name\" id=\"item_name\" value=\"{name}\"></p>\n\
         <p><label for=\"item_description\">Description</label><br>\n\
         <textarea name=\"item_description\" id=\"item_description\">{description}</textarea></p>\n\
         <p><button type=\"submit\">Save</button></p>\n\
         </form>\n\
         <p><a href=\"/\">Back to list</a></p>\n",
        id = item.id,
        name = escape(&item.name),
        description = escape(&item.description),
    );

    page("Edit Item", &body)
}

/// Minimal error page used by the error responder
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!("<h1>{}</h1>\n<p>{}</p>\n", title, escape(message));

    page(&title, &body)
}
