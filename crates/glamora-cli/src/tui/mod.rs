//! Glamora TUI
//!
//! Terminal storefront and admin console.
//!
//! ## Pages
//!
//! Public: Home, Products, Blog, About, Contact, Bulk Orders. The admin
//! console (Dashboard, Products, Leads, Settings tabs) sits behind a mock
//! login reached with `a`.
//!
//! ## Navigation
//!
//! - 1-6: Switch page (1-4 switches tabs inside the admin console)
//! - j/k or ↑/↓: Move selection up/down
//! - Enter: Open the inquiry form / sign in on the login page
//! - a: Admin login (public) / add product (admin Products tab)
//! - e: Edit selected product or settings (admin)
//! - d: Delete selected product (admin)
//! - ?: Help
//! - q: Quit

mod app;
mod ui;

use std::fs::File;
use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glamora_core::{Config, Store};

use app::{AdminTab, App, InputMode, Page};

/// Run the TUI application
pub fn run() -> Result<()> {
    let mut store = Store::open()?;
    let config = store.config().clone();

    // File-based logging, only if GLAMORA_LOG is set
    init_tui_logging(&config);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new();

    let result = run_app(&mut terminal, &mut app, &mut store);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, store: &mut Store) -> Result<()> {
    loop {
        app.check_status_timeout();

        terminal.draw(|frame| ui::draw(frame, app, store))?;

        // Poll with a short timeout so status messages still expire
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // If help is showing, any key dismisses it
                if app.show_help {
                    app.show_help = false;
                    continue;
                }

                match app.input_mode {
                    InputMode::Browse => handle_browse_mode(app, store, key.code, key.modifiers),
                    InputMode::Form => handle_form_mode(app, store, key.code, key.modifiers),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle key events while browsing pages
fn handle_browse_mode(app: &mut App, store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Selection movement
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(store);
        }

        // Help
        KeyCode::Char('?') => {
            app.toggle_help();
        }

        _ if app.page == Page::Admin => handle_admin_key(app, store, code),
        _ => handle_public_key(app, code),
    }
}

/// Public page keys: number navigation, login, inquiry forms
fn handle_public_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.navigate(Page::NAV[index]);
        }
        KeyCode::Char('a') => {
            app.navigate(Page::AdminLogin);
        }
        KeyCode::Enter => match app.page {
            Page::AdminLogin => {
                info!("admin login");
                app.admin_login();
            }
            Page::Contact | Page::BulkOrder => {
                app.open_lead_form();
            }
            _ => {}
        },
        KeyCode::Esc if app.page == Page::AdminLogin => {
            app.navigate(Page::Home);
        }
        _ => {}
    }
}

/// Admin console keys: tab switching and catalog/settings actions
fn handle_admin_key(app: &mut App, store: &mut Store, code: KeyCode) {
    match code {
        KeyCode::Char('1') => app.admin_tab = AdminTab::Dashboard,
        KeyCode::Char('2') => app.admin_tab = AdminTab::Products,
        KeyCode::Char('3') => app.admin_tab = AdminTab::Leads,
        KeyCode::Char('4') => app.admin_tab = AdminTab::Settings,
        KeyCode::Tab => app.next_admin_tab(),

        KeyCode::Char('a') if app.admin_tab == AdminTab::Products => {
            app.open_product_form_new();
        }
        KeyCode::Char('e') => match app.admin_tab {
            AdminTab::Products => app.open_product_form_edit(store),
            AdminTab::Settings => app.open_settings_form(store),
            _ => {}
        },
        KeyCode::Char('d') if app.admin_tab == AdminTab::Products => {
            if let Some(product) = store.products().get(app.product_index) {
                let id = product.id.clone();
                let name = product.name.clone();
                match store.delete_product(&id) {
                    Ok(()) => {
                        app.product_index = app.product_index.saturating_sub(1);
                        app.set_status(&format!("Deleted {}", name));
                    }
                    Err(e) => app.set_status(&format!("Delete failed: {}", e)),
                }
            }
        }

        KeyCode::Esc => {
            info!("admin logout");
            app.logout();
        }
        _ => {}
    }
}

/// Handle key events while a form is open
fn handle_form_mode(app: &mut App, store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc => {
            app.cancel_form();
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.cancel_form();
        }

        // Save
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            if let Err(e) = app.submit_form(store) {
                app.set_status(&format!("Save failed: {}", e));
            }
        }
        KeyCode::Enter => {
            if let Err(e) = app.submit_form(store) {
                app.set_status(&format!("Save failed: {}", e));
            }
        }

        // Field movement
        KeyCode::Tab | KeyCode::Down => {
            app.form_next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_prev_field();
        }

        // Special rows
        KeyCode::Left => {
            app.form_cycle(false);
        }
        KeyCode::Right => {
            app.form_cycle(true);
        }
        KeyCode::Char(' ') => {
            app.form_space();
        }

        // Text input
        KeyCode::Char(c) => {
            app.form_insert_char(c);
        }
        KeyCode::Backspace => {
            app.form_backspace();
        }

        _ => {}
    }
}

/// Initialize logging for TUI mode
///
/// Only initializes if the GLAMORA_LOG environment variable is set. Logs
/// to {data_dir}/debug.log so output never corrupts the terminal UI.
fn init_tui_logging(config: &Config) {
    let Ok(log_level) = std::env::var("GLAMORA_LOG") else {
        return;
    };

    let log_path = config.log_file_path();
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "glamora_core={},glamora_cli={}",
        log_level, log_level
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}
