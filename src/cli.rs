//! Command surface for the admin console.
//!
//! Provides slash-command parsing, text rendering for tables and drafts, and
//! async stdin reading for the interactive loop.

use crate::error::{ClientError, Result};
use crate::i18n::{text, Locale, UiText};
use crate::models::{Entity, FieldKind};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One console action. Mirrors the interactions the admin pages expose:
/// screen/locale toggles, the live filter, the add/edit modal, and row
/// delete.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Products,
    Users,
    Lang(String),
    Filter(String),
    List,
    Refresh,
    Add,
    Edit(String),
    Set { field: String, value: String },
    Draft,
    Submit,
    Cancel,
    Delete(String),
    Help,
    Quit,
}

/// Parse a command from user input.
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err(ClientError::InvalidCommand(
            "commands start with '/', try /help".to_string(),
        ));
    }

    let (name, rest) = match input.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (input, ""),
    };

    match name {
        "/products" => Ok(Command::Products),
        "/users" => Ok(Command::Users),
        "/lang" => {
            if rest.is_empty() {
                Err(ClientError::InvalidCommand("usage: /lang <uz|en>".to_string()))
            } else {
                Ok(Command::Lang(rest.to_string()))
            }
        }
        // No argument clears the filter
        "/filter" => Ok(Command::Filter(rest.to_string())),
        "/list" => Ok(Command::List),
        "/refresh" => Ok(Command::Refresh),
        "/add" => Ok(Command::Add),
        "/edit" => {
            if rest.is_empty() {
                Err(ClientError::InvalidCommand("usage: /edit <id>".to_string()))
            } else {
                Ok(Command::Edit(rest.to_string()))
            }
        }
        "/set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                Err(ClientError::InvalidCommand(
                    "usage: /set <field> <value>".to_string(),
                ))
            } else {
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
        }
        "/draft" => Ok(Command::Draft),
        "/submit" => Ok(Command::Submit),
        "/cancel" => Ok(Command::Cancel),
        "/delete" => {
            if rest.is_empty() {
                Err(ClientError::InvalidCommand("usage: /delete <id>".to_string()))
            } else {
                Ok(Command::Delete(rest.to_string()))
            }
        }
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        other => Err(ClientError::InvalidCommand(other.to_string())),
    }
}

pub fn help_text() -> &'static str {
    "Commands:\n\
     /products            switch to the product catalog\n\
     /users               switch to the user directory\n\
     /lang <uz|en>        switch UI language\n\
     /list                show the current table\n\
     /filter [text]       live filter (no argument clears it)\n\
     /refresh             reload the collection from the server\n\
     /add                 open the add form\n\
     /edit <id>           open the edit form for a row\n\
     /set <field> <value> set one field of the open form\n\
     /draft               show the open form\n\
     /submit              submit the open form\n\
     /cancel              discard the open form\n\
     /delete <id>         delete a row\n\
     /help                show this help\n\
     /quit                exit"
}

/// Render the visible rows as an aligned text table: id column first, then
/// the entity's fields in column order with localized headers.
pub fn render_table<T: Entity>(rows: &[&T], locale: Locale) -> String {
    let mut headers = vec![text(locale, UiText::Id).to_string()];
    headers.extend(T::fields().iter().map(|f| f.label.get(locale).to_string()));

    let mut body: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = vec![row.id().to_string()];
        for field in T::fields() {
            let value = row.field(field.name).unwrap_or_default();
            // Absent optional values render as the locale's "none" marker
            if value.is_empty() && field.kind == FieldKind::OptionalText {
                cells.push(text(locale, UiText::Empty).to_string());
            } else {
                cells.push(value);
            }
        }
        body.push(cells);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (i, cell) in cells.iter().enumerate() {
            if cell.chars().count() > widths[i] {
                widths[i] = cell.chars().count();
            }
        }
    }

    let mut out = format_row(&headers, &widths);
    out.push('\n');
    out.push_str(&separator_row(&widths));
    for cells in &body {
        out.push('\n');
        out.push_str(&format_row(cells, &widths));
    }
    out
}

/// Render the open draft as "Label: value" lines.
pub fn render_draft<T: Entity>(draft: &T, locale: Locale) -> String {
    T::fields()
        .iter()
        .map(|f| {
            format!(
                "{}: {}",
                f.label.get(locale),
                draft.field(f.name).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<1$}", cell, width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn separator_row(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    dashes.join("  ")
}

/// Async stdin reader that yields one line at a time
///
/// Prints the prompt and flushes stdout before blocking on input.
///
/// # Returns
/// - `Ok(Some(line))` - User entered a line
/// - `Ok(None)` - EOF reached (Ctrl+D)
/// - `Err(e)` - I/O error
pub async fn read_line_async(reader: &mut BufReader<tokio::io::Stdin>) -> Result<Option<String>> {
    use std::io::stdout;

    print!("> ");
    stdout().flush()?;

    let mut line = String::new();
    match reader.read_line(&mut line).await {
        Ok(0) => Ok(None), // EOF
        Ok(_) => {
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            Ok(Some(line))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, User};

    #[test]
    fn test_parse_screen_switch_commands() {
        assert_eq!(parse_command("/products").unwrap(), Command::Products);
        assert_eq!(parse_command("/users").unwrap(), Command::Users);
    }

    #[test]
    fn test_parse_filter_with_and_without_argument() {
        assert_eq!(
            parse_command("/filter sho").unwrap(),
            Command::Filter("sho".to_string())
        );
        assert_eq!(
            parse_command("/filter").unwrap(),
            Command::Filter(String::new())
        );
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        let cmd = parse_command("/set title Red Running Shoe").unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                field: "title".to_string(),
                value: "Red Running Shoe".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_allows_empty_value() {
        let cmd = parse_command("/set additionalInfo").unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                field: "additionalInfo".to_string(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_edit_and_delete_require_id() {
        assert_eq!(
            parse_command("/edit 7").unwrap(),
            Command::Edit("7".to_string())
        );
        assert!(parse_command("/edit").is_err());
        assert!(parse_command("/delete").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(parse_command("/unknown").is_err());
        assert!(parse_command("hello").is_err());
    }

    #[test]
    fn test_render_table_localizes_headers() {
        let shoe = Product {
            id: "1".to_string(),
            title: "Shoe".to_string(),
            price: 10.0,
            ..Default::default()
        };
        let rows = vec![&shoe];

        let en = render_table::<Product>(&rows, Locale::En);
        assert!(en.contains("Title"));
        assert!(en.contains("Shoe"));

        let uz = render_table::<Product>(&rows, Locale::Uz);
        assert!(uz.contains("Sarlavha"));
    }

    #[test]
    fn test_render_table_marks_absent_optional_info() {
        let mut user = User::default();
        user.id = "1".to_string();
        user.first_name = "Ali".to_string();
        let rows = vec![&user];

        let en = render_table::<User>(&rows, Locale::En);
        assert!(en.contains("No"));

        let uz = render_table::<User>(&rows, Locale::Uz);
        assert!(uz.contains("Yoq"));
    }

    #[test]
    fn test_render_draft_lists_all_fields() {
        let mut product = Product::default();
        product.set_field("title", "Hat").unwrap();
        product.set_field("price", "5").unwrap();

        let rendered = render_draft(&product, Locale::En);
        assert!(rendered.contains("Title: Hat"));
        assert!(rendered.contains("Price: 5"));
        assert!(rendered.contains("Discount: 0"));
    }
}
