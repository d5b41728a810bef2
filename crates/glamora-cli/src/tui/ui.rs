//! UI rendering
//!
//! Pure rendering: every widget is a projection of the store plus the app
//! state. Brand colors come from the store's derived theme, so a settings
//! change restyles the whole interface on the next frame.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use glamora_core::{LeadStatus, LeadType, Rgb, Store, Theme};

use super::app::{ActiveForm, AdminTab, App, FormField, Page, ProductForm};

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App, store: &Store) {
    let theme = store.theme();

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_nav(frame, app, store, &theme, outer_chunks[0]);

    match app.page {
        Page::Home => draw_home(frame, app, store, &theme, outer_chunks[1]),
        Page::Products => draw_products(frame, app, store, &theme, outer_chunks[1]),
        Page::Blog => draw_blog(frame, store, &theme, outer_chunks[1]),
        Page::About => draw_about(frame, store, &theme, outer_chunks[1]),
        Page::Contact => draw_contact(frame, store, &theme, outer_chunks[1]),
        Page::BulkOrder => draw_bulk_order(frame, store, &theme, outer_chunks[1]),
        Page::AdminLogin => draw_admin_login(frame, store, &theme, outer_chunks[1]),
        Page::Admin => draw_admin(frame, app, store, &theme, outer_chunks[1]),
    }

    draw_status_bar(frame, app, &theme, outer_chunks[2]);

    if app.form.is_some() {
        draw_form_overlay(frame, app, &theme);
    }

    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

/// Draw the top navigation bar
fn draw_nav(frame: &mut Frame, app: &App, store: &Store, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", store.settings().site_name),
        Style::default()
            .fg(color(theme.primary))
            .add_modifier(Modifier::BOLD),
    )];

    if app.page == Page::Admin {
        for (i, tab) in AdminTab::ALL.iter().enumerate() {
            let style = if *tab == app.admin_tab {
                Style::default()
                    .fg(color(theme.primary))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" [{}] {} ", i + 1, tab.title()), style));
        }
    } else {
        for (i, page) in Page::NAV.iter().enumerate() {
            let style = if *page == app.page {
                Style::default()
                    .fg(color(theme.primary))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(
                format!(" [{}] {} ", i + 1, page.title()),
                style,
            ));
        }
        if app.page == Page::AdminLogin {
            spans.push(Span::styled(
                " [a] Admin ",
                Style::default()
                    .fg(color(theme.primary))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::raw(" [a] Admin "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme.primary)));
    let nav = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(nav, area);
}

/// Draw the home page: hero copy, featured products, testimonials
fn draw_home(frame: &mut Frame, app: &App, store: &Store, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(area);

    let settings = store.settings();
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            settings.hero_headline.clone(),
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(settings.hero_subheadline.clone()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[0]);

    let featured: Vec<ListItem> = store
        .products()
        .iter()
        .filter(|p| p.is_featured)
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    p.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  ${:.2}  ", p.price)),
                Span::styled(
                    p.category.name(),
                    Style::default().fg(color(theme.accent)),
                ),
            ]))
        })
        .collect();
    let featured_list = List::new(featured).block(
        Block::default()
            .title(" Featured Products ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(theme.primary))),
    );
    let mut state = ListState::default();
    state.select(Some(app.product_index));
    frame.render_stateful_widget(featured_list, chunks[1], &mut state);

    let testimonials: Vec<Line> = store
        .testimonials()
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled(
                    "★".repeat(t.rating as usize),
                    Style::default().fg(color(theme.primary)),
                ),
                Span::raw(format!(" \"{}\" ", t.content)),
                Span::styled(
                    format!("- {}, {}", t.name, t.role),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        })
        .collect();
    let testimonial_block = Paragraph::new(testimonials)
        .block(Block::default().title(" Testimonials ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(testimonial_block, chunks[2]);
}

/// Draw the full catalog with a detail pane for the selection
fn draw_products(frame: &mut Frame, app: &App, store: &Store, theme: &Theme, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Category strip is display-only; selection never filters the list
    let mut spans = vec![Span::styled(
        " Categories: ",
        Style::default().add_modifier(Modifier::DIM),
    )];
    spans.push(Span::styled("All ", Style::default().fg(color(theme.primary))));
    for category in glamora_core::Category::ALL {
        spans.push(Span::styled(
            format!("· {} ", category.name()),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let items: Vec<ListItem> = store
        .products()
        .iter()
        .map(|p| {
            let stock = if p.stock == 0 {
                Span::styled(" out of stock", Style::default().fg(Color::Red))
            } else {
                Span::styled(
                    format!(" {} in stock", p.stock),
                    Style::default().add_modifier(Modifier::DIM),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    p.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  ${:.2}", p.price)),
                stock,
            ]))
        })
        .collect();

    let title = format!(" Products ({}) ", store.products().len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !store.products().is_empty() {
        state.select(Some(app.product_index));
    }
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let detail = if let Some(p) = store.products().get(app.product_index) {
        vec![
            Line::from(Span::styled(
                p.name.clone(),
                Style::default()
                    .fg(color(theme.primary))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Price:    ${:.2}", p.price)),
            Line::from(format!("Category: {}", p.category)),
            Line::from(format!("Stock:    {}", p.stock)),
            Line::from(format!(
                "Featured: {}",
                if p.is_featured { "yes" } else { "no" }
            )),
            Line::from(""),
            Line::from(p.description.clone()),
        ]
    } else {
        vec![Line::from("No products.")]
    };
    let detail_pane = Paragraph::new(detail)
        .block(Block::default().title(" Detail ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(detail_pane, chunks[1]);
}

/// Draw published blog posts
fn draw_blog(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let mut lines = Vec::new();
    for post in store.posts().iter().filter(|p| p.is_published) {
        lines.push(Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} · {} · {}", post.date, post.author, post.category),
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(post.excerpt.clone()));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from("No posts yet."));
    }

    let blog = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Blog ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(blog, area);
}

/// Draw the about page: story copy plus testimonials
fn draw_about(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let settings = store.settings();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("About {}", settings.site_name),
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(settings.hero_subheadline.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "What our customers say",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for t in store.testimonials() {
        lines.push(Line::from(format!(
            "  \"{}\" - {}, {}",
            t.content, t.name, t.role
        )));
    }

    let about = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(about, area);
}

/// Draw the contact page
fn draw_contact(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let settings = store.settings();
    let lines = vec![
        Line::from(Span::styled(
            "Get in touch",
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Email:   {}", settings.contact_email)),
        Line::from(format!("Phone:   {}", settings.contact_phone)),
        Line::from(format!("Address: {}", settings.address)),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to write us a message.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let contact = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Contact ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(contact, area);
}

/// Draw the bulk order page: pitch, FAQs, form hint
fn draw_bulk_order(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Wholesale & Bulk Orders",
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Stocking a salon or boutique? Tell us what you need and our"),
        Line::from("wholesale team will get back to you with volume pricing."),
        Line::from(""),
    ];
    for faq in store.faqs() {
        lines.push(Line::from(Span::styled(
            format!("Q: {}", faq.question),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("A: {}", faq.answer)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Enter to request a quote.",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let bulk = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Bulk Orders ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(bulk, area);
}

/// Draw the mock admin login page
fn draw_admin_login(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Admin", store.settings().site_name),
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Enter to sign in."),
        Line::from(Span::styled(
            "(Demo console - no credentials required.)",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let login = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Admin Login ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        );
    frame.render_widget(login, area);
}

/// Draw the admin console for the active tab
fn draw_admin(frame: &mut Frame, app: &App, store: &Store, theme: &Theme, area: Rect) {
    match app.admin_tab {
        AdminTab::Dashboard => draw_admin_dashboard(frame, store, theme, area),
        AdminTab::Products => draw_admin_products(frame, app, store, theme, area),
        AdminTab::Leads => draw_admin_leads(frame, app, store, theme, area),
        AdminTab::Settings => draw_admin_settings(frame, store, theme, area),
    }
}

fn draw_admin_dashboard(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Products:     {}", store.products().len())),
        Line::from(format!("Blog posts:   {}", store.posts().len())),
        Line::from(format!("Testimonials: {}", store.testimonials().len())),
        Line::from(format!("FAQs:         {}", store.faqs().len())),
        Line::from(vec![
            Span::raw(format!("Leads:        {} ", store.leads().len())),
            Span::styled(
                format!("({} new)", store.new_lead_count()),
                Style::default().fg(color(theme.accent)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Recent leads",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if store.leads().is_empty() {
        lines.push(Line::from(Span::styled(
            "  none yet",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    for lead in store.leads().iter().take(3) {
        lines.push(Line::from(format!(
            "  {}  {} <{}>  {}",
            lead.date.format("%Y-%m-%d"),
            lead.name,
            lead.email,
            lead.lead_type
        )));
    }

    let dashboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Admin · Dashboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(theme.primary))),
    );
    frame.render_widget(dashboard, area);
}

fn draw_admin_products(frame: &mut Frame, app: &App, store: &Store, theme: &Theme, area: Rect) {
    let items: Vec<ListItem> = store
        .products()
        .iter()
        .map(|p| {
            let featured = if p.is_featured { " ★" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<9} ", p.id),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    p.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  ${:.2}  stock {}", p.price, p.stock)),
                Span::styled(featured, Style::default().fg(color(theme.primary))),
            ]))
        })
        .collect();

    let title = format!(
        " Admin · Products ({})  [a]dd [e]dit [d]elete ",
        store.products().len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !store.products().is_empty() {
        state.select(Some(app.product_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_admin_leads(frame: &mut Frame, app: &App, store: &Store, theme: &Theme, area: Rect) {
    let items: Vec<ListItem> = store
        .leads()
        .iter()
        .map(|lead| {
            let status_style = match lead.status {
                LeadStatus::New => Style::default()
                    .fg(color(theme.accent))
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().add_modifier(Modifier::DIM),
            };
            let kind = match lead.lead_type {
                LeadType::Contact => "contact",
                LeadType::BulkOrder => "bulk",
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{:?}] ", lead.status).to_lowercase(), status_style),
                    Span::styled(
                        lead.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  <{}>  ", lead.email)),
                    Span::styled(kind, Style::default().add_modifier(Modifier::DIM)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · {}",
                        lead.date.format("%Y-%m-%d %H:%M"),
                        lead.message
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();

    let title = format!(
        " Admin · Leads ({}, {} new) ",
        store.leads().len(),
        store.new_lead_count()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !store.leads().is_empty() {
        state.select(Some(app.lead_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_admin_settings(frame: &mut Frame, store: &Store, theme: &Theme, area: Rect) {
    let s = store.settings();
    let swatch = |label: &str, value: &str, rgb: Rgb| {
        Line::from(vec![
            Span::raw(format!("{:<18}", label)),
            Span::styled("██ ", Style::default().fg(color(rgb))),
            Span::raw(value.to_string()),
        ])
    };

    let lines = vec![
        Line::from(format!("{:<18}{}", "Site name", s.site_name)),
        swatch("Primary color", &s.primary_color, theme.primary),
        swatch("Secondary color", &s.secondary_color, theme.secondary),
        swatch("Accent color", &s.accent_color, theme.accent),
        swatch("Dark color", &s.dark_color, theme.dark),
        Line::from(format!("{:<18}{}", "Hero headline", s.hero_headline)),
        Line::from(format!("{:<18}{}", "Hero subheadline", s.hero_subheadline)),
        Line::from(format!("{:<18}{}", "Contact email", s.contact_email)),
        Line::from(format!("{:<18}{}", "Contact phone", s.contact_phone)),
        Line::from(format!("{:<18}{}", "Address", s.address)),
        Line::from(format!("{:<18}{}", "Facebook", s.facebook_url)),
        Line::from(format!("{:<18}{}", "Instagram", s.instagram_url)),
    ];

    let settings = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Admin · Settings  [e]dit ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.primary))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(settings, area);
}

/// Draw the status bar with key hints and the current status message
fn draw_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let text = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", msg),
            Style::default()
                .fg(color(theme.primary))
                .add_modifier(Modifier::BOLD),
        ))
    } else if app.form.is_some() {
        Line::from(Span::styled(
            " Tab/↓ next field · ↑ previous · Ctrl+S save · Esc cancel",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        let hints = match app.page {
            Page::Admin => " 1-4 tabs · Tab next tab · j/k select · Esc logout · ? help · q quit",
            Page::AdminLogin => " Enter sign in · Esc back · q quit",
            _ => " 1-6 pages · a admin · j/k select · ? help · q quit",
        };
        Line::from(Span::styled(
            hints,
            Style::default().add_modifier(Modifier::DIM),
        ))
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Draw the active form as a centered overlay
fn draw_form_overlay(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(form) = &app.form else {
        return;
    };

    let (title, rows) = match form {
        ActiveForm::Lead(f) => {
            let title = match f.lead_type {
                LeadType::Contact => " Contact Us ",
                LeadType::BulkOrder => " Request a Quote ",
            };
            (title.to_string(), form_rows(&f.fields, f.selected))
        }
        ActiveForm::Product(f) => {
            let title = if f.is_new {
                " Add Product ".to_string()
            } else {
                format!(" Edit Product {} ", f.id)
            };
            let mut rows = form_rows(&f.fields, f.selected);
            rows.push(special_row(
                "Category",
                &format!("< {} >", f.category),
                f.selected == ProductForm::CATEGORY_ROW,
                theme,
            ));
            rows.push(special_row(
                "Featured",
                if f.is_featured { "[x]" } else { "[ ]" },
                f.selected == ProductForm::FEATURED_ROW,
                theme,
            ));
            (title, rows)
        }
        ActiveForm::Settings(f) => (
            " Edit Settings ".to_string(),
            form_rows(&f.fields, f.selected),
        ),
    };

    let height = rows.len() as u16 + 2;
    let area = centered_rect(60, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme.primary)));
    frame.render_widget(Paragraph::new(rows).block(block), area);
}

fn form_rows(fields: &[FormField], selected: usize) -> Vec<Line<'static>> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label_style = if i == selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let value = if i == selected {
                format!("{}▎", field.value)
            } else {
                field.value.clone()
            };
            Line::from(vec![
                Span::styled(format!("{:<18}", field.label), label_style),
                Span::raw(value),
            ])
        })
        .collect()
}

fn special_row(label: &str, value: &str, selected: bool, theme: &Theme) -> Line<'static> {
    let label_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let value_style = if selected {
        Style::default().fg(color(theme.primary))
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{:<18}", label), label_style),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Draw the help overlay
fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let lines = if app.page == Page::Admin {
        vec![
            Line::from(Span::styled(
                "Admin Console",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  1-4 / Tab     Switch tab"),
            Line::from("  j/k or ↑/↓    Move selection"),
            Line::from("  a             Add product (Products tab)"),
            Line::from("  e             Edit selection / settings"),
            Line::from("  d             Delete selected product"),
            Line::from("  Esc           Log out"),
            Line::from("  q             Quit"),
            Line::from(""),
            Line::from("Press any key to close"),
        ]
    } else {
        vec![
            Line::from(Span::styled(
                "Storefront",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  1-6           Switch page"),
            Line::from("  a             Admin login"),
            Line::from("  j/k or ↑/↓    Move selection"),
            Line::from("  Enter         Open form (Contact / Bulk Orders)"),
            Line::from("  q             Quit"),
            Line::from(""),
            Line::from("Press any key to close"),
        ]
    };

    let height = lines.len() as u16 + 2;
    let area = centered_rect(46, height, frame.area());
    frame.render_widget(Clear, area);
    let help = Paragraph::new(lines)
        .block(Block::default().title(" Help ").borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Centered rectangle of a fixed width percentage and row height
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
