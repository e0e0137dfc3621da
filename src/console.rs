//! Interactive console holding both admin screens.
//!
//! One controller per screen, nothing shared between them beyond the HTTP
//! client. Commands are dispatched to the active screen; a screen's
//! collection is fetched the first time it becomes active, and kept as the
//! local mirror until an explicit refresh.

use crate::api::CollectionApi;
use crate::cli::{self, Command};
use crate::client::ScreenController;
use crate::error::{ClientError, Result};
use crate::i18n::Locale;
use crate::models::{Entity, Product, User};
use std::sync::Arc;
use tokio::io::BufReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Products,
    Users,
}

impl ScreenKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "products" => Ok(ScreenKind::Products),
            "users" => Ok(ScreenKind::Users),
            other => Err(ClientError::InvalidCommand(format!(
                "unknown screen: {}",
                other
            ))),
        }
    }
}

pub struct Console {
    products: ScreenController<Product>,
    users: ScreenController<User>,
    active: ScreenKind,
    locale: Locale,
}

impl Console {
    pub fn new(api: Arc<CollectionApi>, active: ScreenKind, locale: Locale) -> Self {
        Console {
            products: ScreenController::new(Arc::clone(&api)),
            users: ScreenController::new(api),
            active,
            locale,
        }
    }

    pub fn active(&self) -> ScreenKind {
        self.active
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn products(&self) -> &ScreenController<Product> {
        &self.products
    }

    pub fn users(&self) -> &ScreenController<User> {
        &self.users
    }

    /// Handle one parsed command and return the text to print. `Quit` is
    /// handled by the caller.
    pub async fn handle(&mut self, command: Command) -> String {
        match command {
            Command::Products => {
                self.active = ScreenKind::Products;
                self.products.activate().await;
                screen_view(&self.products, self.locale)
            }
            Command::Users => {
                self.active = ScreenKind::Users;
                self.users.activate().await;
                screen_view(&self.users, self.locale)
            }
            Command::Lang(code) => match Locale::parse(&code) {
                Ok(locale) => {
                    self.locale = locale;
                    self.render_active()
                }
                Err(e) => e.to_string(),
            },
            Command::Help => cli::help_text().to_string(),
            Command::Quit => String::new(),
            other => match self.active {
                ScreenKind::Products => {
                    handle_screen(&mut self.products, self.locale, other).await
                }
                ScreenKind::Users => handle_screen(&mut self.users, self.locale, other).await,
            },
        }
    }

    fn render_active(&self) -> String {
        match self.active {
            ScreenKind::Products => screen_view(&self.products, self.locale),
            ScreenKind::Users => screen_view(&self.users, self.locale),
        }
    }

    /// Run the interactive loop until EOF or /quit.
    pub async fn run(&mut self) -> Result<()> {
        match self.active {
            ScreenKind::Products => self.products.activate().await,
            ScreenKind::Users => self.users.activate().await,
        }

        println!("{}", cli::help_text());
        println!();
        println!("{}", self.render_active());

        let mut reader = BufReader::new(tokio::io::stdin());
        while let Some(line) = cli::read_line_async(&mut reader).await? {
            if line.trim().is_empty() {
                continue;
            }
            match cli::parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => println!("{}", self.handle(command).await),
                Err(e) => println!("{}", e),
            }
        }

        Ok(())
    }
}

/// Title plus the filtered table for one screen.
fn screen_view<T: Entity>(controller: &ScreenController<T>, locale: Locale) -> String {
    let screen = controller.screen();
    let title = T::labels().title.get(locale);
    let table = cli::render_table::<T>(&screen.visible(), locale);
    if screen.filter().is_empty() {
        format!("{}\n{}", title, table)
    } else {
        let placeholder = T::labels().search_placeholder.get(locale);
        format!(
            "{} ({}: {})\n{}",
            title,
            placeholder.trim_end_matches("..."),
            screen.filter(),
            table
        )
    }
}

/// Modal heading plus the draft's fields.
fn draft_view<T: Entity>(controller: &ScreenController<T>, locale: Locale) -> String {
    let screen = controller.screen();
    match screen.draft() {
        Some(draft) => {
            let heading = match screen.modal() {
                crate::screen::Modal::Editing { .. } => T::labels().edit_title.get(locale),
                _ => T::labels().add_title.get(locale),
            };
            format!("{}\n{}", heading, cli::render_draft(draft, locale))
        }
        None => "no open form".to_string(),
    }
}

/// Dispatch a screen-scoped command to the active screen's controller.
async fn handle_screen<T: Entity>(
    controller: &mut ScreenController<T>,
    locale: Locale,
    command: Command,
) -> String {
    match command {
        Command::List => screen_view(controller, locale),
        Command::Refresh => {
            controller.refresh().await;
            screen_view(controller, locale)
        }
        Command::Filter(filter) => {
            controller.screen_mut().set_filter(filter);
            screen_view(controller, locale)
        }
        Command::Add => {
            controller.screen_mut().open_add();
            draft_view(controller, locale)
        }
        Command::Edit(id) => match controller.screen_mut().open_edit(&id) {
            Ok(()) => draft_view(controller, locale),
            Err(e) => e.to_string(),
        },
        Command::Set { field, value } => {
            match controller.screen_mut().edit_field(&field, &value) {
                Ok(()) => draft_view(controller, locale),
                Err(e) => e.to_string(),
            }
        }
        Command::Draft => draft_view(controller, locale),
        Command::Submit => {
            controller.submit().await;
            // A successful submit closes the modal; a failure leaves the
            // draft open and is only logged.
            if controller.screen().is_modal_open() {
                draft_view(controller, locale)
            } else {
                screen_view(controller, locale)
            }
        }
        Command::Cancel => {
            controller.screen_mut().cancel();
            screen_view(controller, locale)
        }
        Command::Delete(id) => {
            controller.delete(&id).await;
            screen_view(controller, locale)
        }
        // Console-level commands are routed before this point
        _ => String::new(),
    }
}
