//! TUI application state
//!
//! Holds the page selector, admin console state, and in-progress form
//! state. The app never owns domain data; it reads from the store at
//! render time and calls store mutation operations when forms are
//! submitted.

use anyhow::Result;
use glamora_core::{
    Category, LeadDraft, LeadType, Product, ProductDraft, SiteSettings, Store,
};

/// Public pages plus the admin console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Products,
    Blog,
    About,
    Contact,
    BulkOrder,
    AdminLogin,
    Admin,
}

impl Page {
    /// Public navigation order (the admin console is reached via login)
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Products,
        Page::Blog,
        Page::About,
        Page::Contact,
        Page::BulkOrder,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::Blog => "Blog",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::BulkOrder => "Bulk Orders",
            Page::AdminLogin => "Admin Login",
            Page::Admin => "Admin",
        }
    }
}

/// Admin console tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Dashboard,
    Products,
    Leads,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Dashboard,
        AdminTab::Products,
        AdminTab::Leads,
        AdminTab::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Products => "Products",
            AdminTab::Leads => "Leads",
            AdminTab::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AdminTab::Dashboard => AdminTab::Products,
            AdminTab::Products => AdminTab::Leads,
            AdminTab::Leads => AdminTab::Settings,
            AdminTab::Settings => AdminTab::Dashboard,
        }
    }
}

/// Input mode: browsing pages or typing into a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Form,
}

/// One text field in a form
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// The public inquiry form (contact or bulk order)
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub lead_type: LeadType,
    pub fields: Vec<FormField>,
    pub selected: usize,
}

impl LeadForm {
    fn new(lead_type: LeadType) -> Self {
        Self {
            lead_type,
            fields: vec![
                FormField::new("Name", ""),
                FormField::new("Email", ""),
                FormField::new("Phone", ""),
                FormField::new("Message", ""),
            ],
            selected: 0,
        }
    }

    fn draft(&self) -> LeadDraft {
        let phone = self.fields[2].value.trim();
        LeadDraft {
            lead_type: self.lead_type,
            name: self.fields[0].value.clone(),
            email: self.fields[1].value.clone(),
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            },
            message: self.fields[3].value.clone(),
        }
    }
}

/// The admin product add/edit form.
///
/// Text rows are followed by two special rows: category (cycled with
/// left/right) and featured (toggled with space).
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub is_new: bool,
    pub id: String,
    pub fields: Vec<FormField>,
    pub category: Category,
    pub is_featured: bool,
    pub selected: usize,
    meta_title: Option<String>,
    meta_description: Option<String>,
}

impl ProductForm {
    /// Index of the category row
    pub const CATEGORY_ROW: usize = 5;
    /// Index of the featured row
    pub const FEATURED_ROW: usize = 6;
    /// Total number of rows
    pub const ROWS: usize = 7;

    fn new() -> Self {
        let draft = ProductDraft::new();
        Self::from_draft(draft, true)
    }

    fn edit(product: &Product) -> Self {
        Self::from_draft(ProductDraft::from_product(product), false)
    }

    fn from_draft(draft: ProductDraft, is_new: bool) -> Self {
        Self {
            is_new,
            id: draft.id,
            fields: vec![
                FormField::new("Name", draft.name),
                FormField::new("Price ($)", draft.price),
                FormField::new("Stock", draft.stock),
                FormField::new("Image URL", draft.image),
                FormField::new("Description", draft.description),
            ],
            category: draft.category,
            is_featured: draft.is_featured,
            selected: 0,
            meta_title: draft.meta_title,
            meta_description: draft.meta_description,
        }
    }

    fn draft(&self) -> ProductDraft {
        ProductDraft {
            id: self.id.clone(),
            name: self.fields[0].value.clone(),
            price: self.fields[1].value.clone(),
            stock: self.fields[2].value.clone(),
            image: self.fields[3].value.clone(),
            description: self.fields[4].value.clone(),
            category: self.category,
            is_featured: self.is_featured,
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let all = Category::ALL;
        let pos = all.iter().position(|c| *c == self.category).unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        self.category = all[next];
    }
}

/// The admin settings form (the singleton is replaced wholesale on save)
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub fields: Vec<FormField>,
    pub selected: usize,
}

impl SettingsForm {
    fn new(settings: &SiteSettings) -> Self {
        Self {
            fields: vec![
                FormField::new("Site name", settings.site_name.clone()),
                FormField::new("Primary color", settings.primary_color.clone()),
                FormField::new("Secondary color", settings.secondary_color.clone()),
                FormField::new("Accent color", settings.accent_color.clone()),
                FormField::new("Dark color", settings.dark_color.clone()),
                FormField::new("Hero headline", settings.hero_headline.clone()),
                FormField::new("Hero subheadline", settings.hero_subheadline.clone()),
                FormField::new("Contact email", settings.contact_email.clone()),
                FormField::new("Contact phone", settings.contact_phone.clone()),
                FormField::new("Address", settings.address.clone()),
                FormField::new("Facebook URL", settings.facebook_url.clone()),
                FormField::new("Instagram URL", settings.instagram_url.clone()),
            ],
            selected: 0,
        }
    }

    fn settings(&self) -> SiteSettings {
        SiteSettings {
            site_name: self.fields[0].value.clone(),
            primary_color: self.fields[1].value.clone(),
            secondary_color: self.fields[2].value.clone(),
            accent_color: self.fields[3].value.clone(),
            dark_color: self.fields[4].value.clone(),
            hero_headline: self.fields[5].value.clone(),
            hero_subheadline: self.fields[6].value.clone(),
            contact_email: self.fields[7].value.clone(),
            contact_phone: self.fields[8].value.clone(),
            address: self.fields[9].value.clone(),
            facebook_url: self.fields[10].value.clone(),
            instagram_url: self.fields[11].value.clone(),
        }
    }
}

/// The form currently being edited, if any
#[derive(Debug, Clone)]
pub enum ActiveForm {
    Lead(LeadForm),
    Product(ProductForm),
    Settings(SettingsForm),
}

/// TUI application state
pub struct App {
    pub page: Page,
    pub is_admin: bool,
    pub admin_tab: AdminTab,
    pub input_mode: InputMode,
    pub form: Option<ActiveForm>,
    /// Selected row in product lists (public and admin)
    pub product_index: usize,
    /// Selected row in the admin leads list
    pub lead_index: usize,
    pub status_message: Option<String>,
    status_set_at: Option<std::time::Instant>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            is_admin: false,
            admin_tab: AdminTab::Dashboard,
            input_mode: InputMode::Browse,
            form: None,
            product_index: 0,
            lead_index: 0,
            status_message: None,
            status_set_at: None,
            show_help: false,
            should_quit: false,
        }
    }

    // ==================== Navigation ====================

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.product_index = 0;
        self.status_message = None;
    }

    /// Mock auth: any login attempt succeeds
    pub fn admin_login(&mut self) {
        self.is_admin = true;
        self.admin_tab = AdminTab::Dashboard;
        self.navigate(Page::Admin);
    }

    pub fn logout(&mut self) {
        self.is_admin = false;
        self.cancel_form();
        self.navigate(Page::Home);
    }

    pub fn next_admin_tab(&mut self) {
        self.admin_tab = self.admin_tab.next();
        self.product_index = 0;
        self.lead_index = 0;
    }

    pub fn move_up(&mut self) {
        match (self.page, self.admin_tab) {
            (Page::Admin, AdminTab::Leads) => {
                self.lead_index = self.lead_index.saturating_sub(1);
            }
            _ => {
                self.product_index = self.product_index.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self, store: &Store) {
        match (self.page, self.admin_tab) {
            (Page::Admin, AdminTab::Leads) => {
                let max = store.leads().len().saturating_sub(1);
                self.lead_index = (self.lead_index + 1).min(max);
            }
            _ => {
                let max = store.products().len().saturating_sub(1);
                self.product_index = (self.product_index + 1).min(max);
            }
        }
    }

    // ==================== Forms ====================

    /// Open the inquiry form for the current public page
    pub fn open_lead_form(&mut self) {
        let lead_type = match self.page {
            Page::BulkOrder => LeadType::BulkOrder,
            _ => LeadType::Contact,
        };
        self.form = Some(ActiveForm::Lead(LeadForm::new(lead_type)));
        self.input_mode = InputMode::Form;
    }

    pub fn open_product_form_new(&mut self) {
        self.form = Some(ActiveForm::Product(ProductForm::new()));
        self.input_mode = InputMode::Form;
    }

    /// Open the edit form for the selected product, if any
    pub fn open_product_form_edit(&mut self, store: &Store) {
        if let Some(product) = store.products().get(self.product_index) {
            self.form = Some(ActiveForm::Product(ProductForm::edit(product)));
            self.input_mode = InputMode::Form;
        }
    }

    pub fn open_settings_form(&mut self, store: &Store) {
        self.form = Some(ActiveForm::Settings(SettingsForm::new(store.settings())));
        self.input_mode = InputMode::Form;
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Browse;
    }

    /// Number of rows in the active form
    fn form_rows(&self) -> usize {
        match &self.form {
            Some(ActiveForm::Lead(f)) => f.fields.len(),
            Some(ActiveForm::Product(_)) => ProductForm::ROWS,
            Some(ActiveForm::Settings(f)) => f.fields.len(),
            None => 0,
        }
    }

    fn form_selected(&self) -> usize {
        match &self.form {
            Some(ActiveForm::Lead(f)) => f.selected,
            Some(ActiveForm::Product(f)) => f.selected,
            Some(ActiveForm::Settings(f)) => f.selected,
            None => 0,
        }
    }

    fn set_form_selected(&mut self, selected: usize) {
        match &mut self.form {
            Some(ActiveForm::Lead(f)) => f.selected = selected,
            Some(ActiveForm::Product(f)) => f.selected = selected,
            Some(ActiveForm::Settings(f)) => f.selected = selected,
            None => {}
        }
    }

    pub fn form_next_field(&mut self) {
        let rows = self.form_rows();
        if rows > 0 {
            self.set_form_selected((self.form_selected() + 1) % rows);
        }
    }

    pub fn form_prev_field(&mut self) {
        let rows = self.form_rows();
        if rows > 0 {
            let current = self.form_selected();
            self.set_form_selected((current + rows - 1) % rows);
        }
    }

    /// Whether the selected row accepts text input
    fn selected_text_field(&mut self) -> Option<&mut FormField> {
        match &mut self.form {
            Some(ActiveForm::Lead(f)) => f.fields.get_mut(f.selected),
            Some(ActiveForm::Product(f)) => {
                if f.selected < f.fields.len() {
                    f.fields.get_mut(f.selected)
                } else {
                    None
                }
            }
            Some(ActiveForm::Settings(f)) => f.fields.get_mut(f.selected),
            None => None,
        }
    }

    pub fn form_insert_char(&mut self, c: char) {
        if let Some(field) = self.selected_text_field() {
            field.value.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.selected_text_field() {
            field.value.pop();
        }
    }

    /// Space on the featured row toggles it; elsewhere it types a space
    pub fn form_space(&mut self) {
        if let Some(ActiveForm::Product(f)) = &mut self.form {
            if f.selected == ProductForm::FEATURED_ROW {
                f.is_featured = !f.is_featured;
                return;
            }
        }
        self.form_insert_char(' ');
    }

    /// Left/right on the category row cycles the category
    pub fn form_cycle(&mut self, forward: bool) {
        if let Some(ActiveForm::Product(f)) = &mut self.form {
            if f.selected == ProductForm::CATEGORY_ROW {
                f.cycle_category(forward);
            }
        }
    }

    /// Submit the active form.
    ///
    /// A committed lead or settings change closes the form and shows an
    /// acknowledgment. A product draft that fails validation keeps the
    /// form open with the error in the status line; nothing is saved.
    pub fn submit_form(&mut self, store: &mut Store) -> Result<()> {
        let Some(form) = self.form.clone() else {
            return Ok(());
        };

        match form {
            ActiveForm::Lead(f) => {
                store.add_lead(f.draft())?;
                self.cancel_form();
                self.set_status("Thank you! Your inquiry has been received.");
            }
            ActiveForm::Product(f) => match f.draft().commit() {
                Ok(product) => {
                    if f.is_new {
                        store.add_product(product)?;
                        self.set_status("Product added");
                    } else {
                        store.update_product(product)?;
                        self.set_status("Product updated");
                    }
                    self.cancel_form();
                }
                Err(e) => {
                    self.set_status(&e.to_string());
                }
            },
            ActiveForm::Settings(f) => {
                store.set_settings(f.settings())?;
                self.cancel_form();
                self.set_status("Settings saved");
            }
        }

        Ok(())
    }

    // ==================== Status line ====================

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
        self.status_set_at = Some(std::time::Instant::now());
    }

    /// Clear the status message after a few seconds
    pub fn check_status_timeout(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() > std::time::Duration::from_secs(5) {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glamora_core::Config;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> Store {
        Store::open_with_config(Config {
            data_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap()
    }

    #[test]
    fn test_navigation_resets_selection() {
        let mut app = App::new();
        app.product_index = 3;
        app.navigate(Page::Products);
        assert_eq!(app.page, Page::Products);
        assert_eq!(app.product_index, 0);
    }

    #[test]
    fn test_mock_login_and_logout() {
        let mut app = App::new();
        app.navigate(Page::AdminLogin);
        app.admin_login();
        assert!(app.is_admin);
        assert_eq!(app.page, Page::Admin);
        assert_eq!(app.admin_tab, AdminTab::Dashboard);

        app.logout();
        assert!(!app.is_admin);
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_lead_form_submission_captures_lead() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let mut app = App::new();

        app.navigate(Page::BulkOrder);
        app.open_lead_form();
        assert_eq!(app.input_mode, InputMode::Form);

        for c in "Acme Salon".chars() {
            app.form_insert_char(c);
        }
        app.form_next_field();
        for c in "a@acme.com".chars() {
            app.form_insert_char(c);
        }
        app.form_next_field(); // skip phone
        app.form_next_field();
        for c in "Need 200 units".chars() {
            app.form_insert_char(c);
        }

        app.submit_form(&mut store).unwrap();

        assert_eq!(store.leads().len(), 1);
        let lead = &store.leads()[0];
        assert_eq!(lead.lead_type, LeadType::BulkOrder);
        assert_eq!(lead.name, "Acme Salon");
        assert_eq!(lead.phone, None);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Thank you! Your inquiry has been received.")
        );
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.form.is_none());
    }

    #[test]
    fn test_product_edit_form_updates_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let mut app = App::new();

        app.admin_login();
        app.admin_tab = AdminTab::Products;
        app.product_index = 0;
        app.open_product_form_edit(&store);

        // Replace the price field
        app.form_next_field();
        if let Some(ActiveForm::Product(f)) = &mut app.form {
            f.fields[1].value = "95.00".to_string();
        }

        app.submit_form(&mut store).unwrap();

        assert_eq!(store.get_product("1").unwrap().price, 95.0);
        assert!(app.form.is_none());
    }

    #[test]
    fn test_invalid_product_draft_keeps_form_open() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let mut app = App::new();

        app.admin_login();
        app.open_product_form_edit(&store);
        if let Some(ActiveForm::Product(f)) = &mut app.form {
            f.fields[1].value = "not a price".to_string();
        }

        let before = store.products().to_vec();
        app.submit_form(&mut store).unwrap();

        assert!(app.form.is_some());
        assert!(app.status_message.as_deref().unwrap().contains("price"));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_category_row_cycles() {
        let mut app = App::new();
        app.open_product_form_new();
        app.set_form_selected(ProductForm::CATEGORY_ROW);

        app.form_cycle(true);
        if let Some(ActiveForm::Product(f)) = &app.form {
            assert_eq!(f.category, Category::Makeup); // Skin -> Makeup
        }
        app.form_cycle(false);
        if let Some(ActiveForm::Product(f)) = &app.form {
            assert_eq!(f.category, Category::Skin);
        }
    }

    #[test]
    fn test_featured_row_toggles_on_space() {
        let mut app = App::new();
        app.open_product_form_new();
        app.set_form_selected(ProductForm::FEATURED_ROW);

        app.form_space();
        if let Some(ActiveForm::Product(f)) = &app.form {
            assert!(f.is_featured);
        }
        app.form_space();
        if let Some(ActiveForm::Product(f)) = &app.form {
            assert!(!f.is_featured);
        }
    }

    #[test]
    fn test_settings_form_replaces_singleton_and_theme() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let mut app = App::new();

        app.admin_login();
        app.open_settings_form(&store);
        if let Some(ActiveForm::Settings(f)) = &mut app.form {
            f.fields[1].value = "#FF0000".to_string(); // primary color
        }

        app.submit_form(&mut store).unwrap();

        assert_eq!(store.settings().primary_color, "#FF0000");
        assert_eq!(store.theme().primary, glamora_core::Rgb(0xFF, 0, 0));
    }

    #[test]
    fn test_form_field_wrap_around() {
        let mut app = App::new();
        app.navigate(Page::Contact);
        app.open_lead_form();

        app.form_prev_field();
        assert_eq!(app.form_selected(), 3);
        app.form_next_field();
        assert_eq!(app.form_selected(), 0);
    }
}
