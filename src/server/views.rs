//! HTML views.
//!
//! Plain string rendering with a shared layout. Every interpolated value
//! goes through [`escape`].

use crate::error::{Field, FieldError};
use crate::models::{AddContactInput, Contact, EditContactInput};
use std::fmt::Write;

/// Entry in the landing page greeting list.
struct Greeting {
    name: &'static str,
    email: &'static str,
}

const GREETINGS: [Greeting; 3] = [
    Greeting {
        name: "Muhammad Fajri",
        email: "fajri@gmail.com",
    },
    Greeting {
        name: "Siiv",
        email: "siiv@gmail.com",
    },
    Greeting {
        name: "Kolang",
        email: "kolang@gmail.com",
    },
];

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn contact_href(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, urlencoding::encode(name))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/about">About</a> | <a href="/contact">Contact</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"errors\">\n");
    for error in errors {
        let _ = writeln!(
            html,
            "<li data-field=\"{}\">{}</li>",
            error.field,
            escape(&error.message)
        );
    }
    html.push_str("</ul>\n");
    html
}

fn text_input(field: Field, label: &str, value: &str, required: bool) -> String {
    format!(
        "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{value}\"{required}></label><br>\n",
        label = label,
        name = field,
        value = escape(value),
        required = if required { " required" } else { "" },
    )
}

pub fn home() -> String {
    let mut body = String::from("<h1>Hello, welcome to the contact book</h1>\n<ul>\n");
    for greeting in &GREETINGS {
        let _ = writeln!(
            body,
            "<li>{} &lt;{}&gt;</li>",
            escape(greeting.name),
            escape(greeting.email)
        );
    }
    body.push_str("</ul>\n");
    layout("Contact Book", &body)
}

pub fn about() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>A small address book: names, mobile numbers and email addresses.</p>\n",
    )
}

pub fn contact_list(contacts: &[Contact], notices: &[String]) -> String {
    let mut body = String::from("<h1>Contacts</h1>\n");

    for notice in notices {
        let _ = writeln!(body, "<p class=\"notice\">{}</p>", escape(notice));
    }

    body.push_str("<p><a href=\"/contact/add\">Add contact</a></p>\n");

    if contacts.is_empty() {
        body.push_str("<p>No contacts yet.</p>\n");
        return layout("Contact", &body);
    }

    body.push_str("<table>\n<tr><th>#</th><th>Name</th><th>Phone</th><th></th></tr>\n");
    for (i, contact) in contacts.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"{}\">Detail</a></td></tr>",
            i + 1,
            escape(&contact.name),
            escape(&contact.phone),
            escape(&contact_href("/contact/", &contact.name)),
        );
    }
    body.push_str("</table>\n");

    layout("Contact", &body)
}

pub fn add_form(errors: &[FieldError], input: &AddContactInput) -> String {
    let mut body = String::from("<h1>Add contact</h1>\n");
    body.push_str(&error_list(errors));
    body.push_str("<form method=\"post\" action=\"/contact\">\n");
    body.push_str(&text_input(Field::Name, "Name", &input.name, true));
    body.push_str(&text_input(Field::Phone, "Phone", &input.phone, true));
    body.push_str(&text_input(Field::Email, "Email", &input.email, false));
    body.push_str("<button type=\"submit\">Add</button>\n</form>\n");
    layout("Add contact", &body)
}

pub fn edit_form(errors: &[FieldError], input: &EditContactInput) -> String {
    let mut body = String::from("<h1>Edit contact</h1>\n");
    body.push_str(&error_list(errors));
    body.push_str("<form method=\"post\" action=\"/contact?_method=PUT\">\n");
    let _ = writeln!(
        body,
        "<input type=\"hidden\" name=\"id\" value=\"{}\">",
        escape(&input.id)
    );
    let _ = writeln!(
        body,
        "<input type=\"hidden\" name=\"oldName\" value=\"{}\">",
        escape(&input.old_name)
    );
    body.push_str(&text_input(Field::Name, "Name", &input.name, true));
    body.push_str(&text_input(Field::Phone, "Phone", &input.phone, true));
    body.push_str(&text_input(Field::Email, "Email", &input.email, false));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    layout("Edit contact", &body)
}

pub fn contact_detail(contact: &Contact) -> String {
    let mut body = String::from("<h1>Contact detail</h1>\n");
    let _ = writeln!(body, "<h2>{}</h2>", escape(&contact.name));
    let _ = writeln!(body, "<p>Phone: {}</p>", escape(&contact.phone));
    if let Some(email) = &contact.email {
        let _ = writeln!(body, "<p>Email: {}</p>", escape(email));
    }
    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Edit</a></p>",
        escape(&contact_href("/contact/edit/", &contact.name))
    );
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/contact?_method=DELETE\">\
         <input type=\"hidden\" name=\"name\" value=\"{}\">\
         <button type=\"submit\">Delete</button></form>",
        escape(&contact.name)
    );
    body.push_str("<p><a href=\"/contact\">Back to contacts</a></p>\n");
    layout("Contact detail", &body)
}

pub fn not_found() -> String {
    layout("Not found", "<h1>404</h1>\n")
}

pub fn server_error() -> String {
    layout("Error", "<h1>500</h1>\n<p>Something went wrong.</p>\n")
}
