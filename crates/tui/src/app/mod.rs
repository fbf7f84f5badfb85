use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Utc};
use crossterm::event::{self, Event, KeyEvent};

use api_types::{
    ItemStatus, Location, QualityGrade,
    filter::{ItemFilter, TransactionFilter},
    waste::{ListingDraft, WELL_KNOWN_MATERIALS},
};
use engine::Tokens;

use crate::{
    config::AppConfig,
    error::Result,
    session::Session,
    ui::{self, keymap::AppAction},
};

const TOAST_TTL: Duration = Duration::from_secs(3);
const EXPORT_PATH: &str = "transactions.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Marketplace,
    ListWaste,
    Wallet,
    Tokens,
    Transactions,
    Impact,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Marketplace => "Marketplace",
            Self::ListWaste => "List Waste",
            Self::Wallet => "Wallet",
            Self::Tokens => "Token Market",
            Self::Transactions => "Transactions",
            Self::Impact => "Impact",
        }
    }

    pub const ALL: [Section; 6] = [
        Self::Marketplace,
        Self::ListWaste,
        Self::Wallet,
        Self::Tokens,
        Self::Transactions,
        Self::Impact,
    ];
}

#[derive(Debug)]
pub struct LoginState {
    pub username: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketMode {
    Browse,
    Search,
}

#[derive(Debug)]
pub struct MarketState {
    pub search: String,
    /// Index into the material cycle; 0 = all.
    material_idx: usize,
    status_idx: usize,
    location_idx: usize,
    pub min_credits: i64,
    pub min_quantity: u64,
    pub selected: usize,
    pub mode: MarketMode,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            search: String::new(),
            material_idx: 0,
            status_idx: 0,
            location_idx: 0,
            min_credits: 0,
            min_quantity: 0,
            selected: 0,
            mode: MarketMode::Browse,
        }
    }
}

impl MarketState {
    pub fn material(&self) -> Option<String> {
        (self.material_idx > 0).then(|| WELL_KNOWN_MATERIALS[self.material_idx - 1].to_string())
    }

    pub fn status(&self) -> Option<ItemStatus> {
        (self.status_idx > 0).then(|| ItemStatus::ALL[self.status_idx - 1])
    }

    pub fn location(&self) -> Option<Location> {
        (self.location_idx > 0).then(|| Location::ALL[self.location_idx - 1])
    }

    pub fn criteria(&self) -> ItemFilter {
        ItemFilter {
            search: self.search.clone(),
            material: self.material(),
            status: self.status(),
            location: self.location(),
            min_credits: self.min_credits,
            min_quantity: self.min_quantity,
        }
    }

    fn cycle_material(&mut self) {
        self.material_idx = (self.material_idx + 1) % (WELL_KNOWN_MATERIALS.len() + 1);
    }

    fn cycle_status(&mut self) {
        self.status_idx = (self.status_idx + 1) % (ItemStatus::ALL.len() + 1);
    }

    fn cycle_location(&mut self) {
        self.location_idx = (self.location_idx + 1) % (Location::ALL.len() + 1);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStep {
    Basics,
    Details,
    Review,
}

impl ListingStep {
    pub fn number(self) -> usize {
        match self {
            Self::Basics => 1,
            Self::Details => 2,
            Self::Review => 3,
        }
    }

    /// Focusable fields on this step.
    pub fn fields(self) -> usize {
        match self {
            Self::Basics => 3,  // material, quantity, quality
            Self::Details => 3, // description, location, status
            Self::Review => 1,  // images
        }
    }
}

/// The three-step listing wizard. Text fields take character input; the
/// enum fields cycle with Left/Right.
#[derive(Debug)]
pub struct ListingState {
    pub step: ListingStep,
    pub focus: usize,
    pub material_idx: usize,
    pub quantity: String,
    pub quality: QualityGrade,
    pub description: String,
    pub location: Location,
    pub status: ItemStatus,
    /// Comma-separated image reference paths.
    pub images: String,
    pub message: Option<String>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            step: ListingStep::Basics,
            focus: 0,
            material_idx: 0,
            quantity: "10".to_string(),
            quality: QualityGrade::B,
            description: String::new(),
            location: Location::Local,
            status: ItemStatus::Available,
            images: String::new(),
            message: None,
        }
    }
}

impl ListingState {
    pub fn material(&self) -> &'static str {
        WELL_KNOWN_MATERIALS[self.material_idx]
    }

    /// Builds the draft, or reports which field is invalid.
    pub fn draft(&self) -> std::result::Result<ListingDraft, String> {
        let quantity: u64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "quantity must be a whole number of kg".to_string())?;
        if quantity == 0 {
            return Err("quantity must be >= 1 kg".to_string());
        }

        let images = self
            .images
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(ListingDraft {
            material: self.material().to_string(),
            quantity,
            quality: self.quality,
            description: self.description.clone(),
            location: self.location,
            status: self.status,
            images,
        })
    }

    /// Live payout preview for the bottom of the wizard.
    pub fn estimated_credits(&self) -> Option<Tokens> {
        self.draft().ok().map(|draft| engine::listing_credits(&draft))
    }

    fn cycle_left(&mut self) {
        match (self.step, self.focus) {
            (ListingStep::Basics, 0) => {
                self.material_idx =
                    (self.material_idx + WELL_KNOWN_MATERIALS.len() - 1) % WELL_KNOWN_MATERIALS.len();
            }
            (ListingStep::Basics, 2) => self.quality = prev_in(&QualityGrade::ALL, self.quality),
            (ListingStep::Details, 1) => self.location = prev_in(&Location::ALL, self.location),
            (ListingStep::Details, 2) => self.status = prev_in(&ItemStatus::ALL, self.status),
            _ => {}
        }
    }

    fn cycle_right(&mut self) {
        match (self.step, self.focus) {
            (ListingStep::Basics, 0) => {
                self.material_idx = (self.material_idx + 1) % WELL_KNOWN_MATERIALS.len();
            }
            (ListingStep::Basics, 2) => self.quality = next_in(&QualityGrade::ALL, self.quality),
            (ListingStep::Details, 1) => self.location = next_in(&Location::ALL, self.location),
            (ListingStep::Details, 2) => self.status = next_in(&ItemStatus::ALL, self.status),
            _ => {}
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        match (self.step, self.focus) {
            (ListingStep::Basics, 1) => Some(&mut self.quantity),
            (ListingStep::Details, 0) => Some(&mut self.description),
            (ListingStep::Review, 0) => Some(&mut self.images),
            _ => None,
        }
    }
}

fn next_in<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

fn prev_in<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + all.len() - 1) % all.len()]
}

#[derive(Debug, Default)]
pub struct TokensState {
    pub amount: String,
}

impl TokensState {
    pub fn amount(&self) -> Option<Tokens> {
        self.amount
            .trim()
            .parse::<Tokens>()
            .ok()
            .filter(|amount| amount.is_positive())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    List,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxFilterFocus {
    Search,
    From,
    To,
}

const ACTION_FILTERS: [&str; 4] = ["all", "listed", "purchased", "tokens"];

#[derive(Debug)]
pub struct TransactionsState {
    pub search: String,
    action_idx: usize,
    pub from: String,
    pub to: String,
    pub selected: usize,
    pub mode: TxMode,
    pub focus: TxFilterFocus,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            search: String::new(),
            action_idx: 0,
            from: String::new(),
            to: String::new(),
            selected: 0,
            mode: TxMode::List,
            focus: TxFilterFocus::Search,
        }
    }
}

impl TransactionsState {
    pub fn action_label(&self) -> &'static str {
        ACTION_FILTERS[self.action_idx]
    }

    pub fn criteria(&self) -> TransactionFilter {
        TransactionFilter {
            search: self.search.clone(),
            action: (self.action_idx > 0).then(|| ACTION_FILTERS[self.action_idx].to_string()),
            from: parse_date(&self.from),
            to: parse_date(&self.to),
        }
    }

    fn cycle_action(&mut self) {
        self.action_idx = (self.action_idx + 1) % ACTION_FILTERS.len();
    }

    fn next_focus(&mut self) {
        self.focus = match self.focus {
            TxFilterFocus::Search => TxFilterFocus::From,
            TxFilterFocus::From => TxFilterFocus::To,
            TxFilterFocus::To => TxFilterFocus::Search,
        };
    }

    fn text_field_mut(&mut self) -> &mut String {
        match self.focus {
            TxFilterFocus::Search => &mut self.search,
            TxFilterFocus::From => &mut self.from,
            TxFilterFocus::To => &mut self.to,
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub login: LoginState,
    pub section: Section,
    pub session: Option<Session>,
    pub market: MarketState,
    pub listing: ListingState,
    pub tokens: TokensState,
    pub transactions: TransactionsState,
    pub toast: Option<ToastState>,
    pub last_action: Option<DateTime<Utc>>,
}

pub struct App {
    config: AppConfig,
    fresh: bool,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, fresh: bool) -> Self {
        let state = AppState {
            screen: Screen::Login,
            login: LoginState {
                username: config.username.clone(),
                message: None,
            },
            section: Section::Marketplace,
            session: None,
            market: MarketState::default(),
            listing: ListingState::default(),
            tokens: TokensState::default(),
            transactions: TransactionsState::default(),
            toast: None,
            last_action: None,
        };

        Self {
            config,
            fresh,
            state,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::enter_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::leave_terminal(&mut terminal)?;

        if let Some(session) = &self.state.session
            && let Err(err) = session.save(&self.config.state_path)
        {
            tracing::warn!("failed to cache session: {err}");
        }

        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::UiTerminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.expire_toast();

            terminal
                .draw(|frame| ui::render(frame, &self.state, &self.config))
                .map_err(|err| crate::error::AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = ui::keymap::map_key(key);

        if action == AppAction::ForceQuit {
            self.should_quit = true;
            return Ok(());
        }

        match self.state.screen {
            Screen::Login => self.handle_login_key(action).await?,
            Screen::Home => self.handle_home_key(action)?,
        }

        Ok(())
    }

    async fn handle_login_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Input(ch) => self.state.login.username.push(ch),
            AppAction::Backspace => {
                self.state.login.username.pop();
            }
            AppAction::Cancel => self.should_quit = true,
            AppAction::Submit => {
                let username = self.state.login.username.trim().to_string();
                if username.is_empty() {
                    self.state.login.message = Some("Enter a display name.".to_string());
                    return Ok(());
                }

                self.state.login.message = Some("Signing in...".to_string());
                let session =
                    Session::login(&username, &self.config.state_path, self.fresh).await?;
                self.state.session = Some(session);
                self.state.screen = Screen::Home;
                self.state.login.message = None;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_home_key(&mut self, action: AppAction) -> Result<()> {
        // Edit modes capture input before any navigation shortcut.
        if self.state.market.mode == MarketMode::Search
            && self.state.section == Section::Marketplace
        {
            return self.handle_market_search_key(action);
        }
        if self.state.transactions.mode == TxMode::Filter
            && self.state.section == Section::Transactions
        {
            return self.handle_tx_filter_key(action);
        }
        if self.state.section == Section::ListWaste {
            return self.handle_listing_key(action);
        }

        // Number keys switch tabs, except where digits feed an amount.
        if let AppAction::Input(ch) = action
            && let Some(digit) = ch.to_digit(10)
            && (1..=Section::ALL.len() as u32).contains(&digit)
            && self.state.section != Section::Tokens
        {
            self.state.section = Section::ALL[digit as usize - 1];
            return Ok(());
        }

        match self.state.section {
            Section::Marketplace => self.handle_market_key(action)?,
            Section::ListWaste => {}
            Section::Wallet => self.handle_nav_key(action),
            Section::Tokens => self.handle_tokens_key(action)?,
            Section::Transactions => self.handle_transactions_key(action)?,
            Section::Impact => self.handle_nav_key(action),
        }
        Ok(())
    }

    /// Letter navigation shared by the sections without text entry.
    fn handle_nav_key(&mut self, action: AppAction) {
        if let AppAction::Input(ch) = action {
            match ch.to_ascii_lowercase() {
                'm' => self.state.section = Section::Marketplace,
                'l' => self.state.section = Section::ListWaste,
                'w' => self.state.section = Section::Wallet,
                'g' => self.state.section = Section::Tokens,
                't' => self.state.section = Section::Transactions,
                'i' => self.state.section = Section::Impact,
                'q' => self.should_quit = true,
                _ => {}
            }
        }
    }

    fn handle_market_key(&mut self, action: AppAction) -> Result<()> {
        let shown = self.filtered_item_count();
        match action {
            AppAction::Up => {
                self.state.market.selected = self.state.market.selected.saturating_sub(1);
            }
            AppAction::Down => {
                if shown > 0 {
                    self.state.market.selected = (self.state.market.selected + 1).min(shown - 1);
                }
            }
            AppAction::Submit => self.buy_selected_item(),
            AppAction::Input('/') => self.state.market.mode = MarketMode::Search,
            AppAction::Input('c') => {
                self.state.market.cycle_material();
                self.state.market.selected = 0;
            }
            AppAction::Input('s') => {
                self.state.market.cycle_status();
                self.state.market.selected = 0;
            }
            AppAction::Input('o') => {
                self.state.market.cycle_location();
                self.state.market.selected = 0;
            }
            AppAction::Input('+') => self.state.market.min_credits += 10,
            AppAction::Input('-') => {
                self.state.market.min_credits = (self.state.market.min_credits - 10).max(0);
            }
            AppAction::Input('>') => self.state.market.min_quantity += 10,
            AppAction::Input('<') => {
                self.state.market.min_quantity = self.state.market.min_quantity.saturating_sub(10);
            }
            AppAction::Input('r') => self.state.market.reset(),
            AppAction::Input('j') => {
                if shown > 0 {
                    self.state.market.selected = (self.state.market.selected + 1).min(shown - 1);
                }
            }
            AppAction::Input('k') => {
                self.state.market.selected = self.state.market.selected.saturating_sub(1);
            }
            other => self.handle_nav_key(other),
        }
        Ok(())
    }

    fn handle_market_search_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Input(ch) => {
                self.state.market.search.push(ch);
                self.state.market.selected = 0;
            }
            AppAction::Backspace => {
                self.state.market.search.pop();
                self.state.market.selected = 0;
            }
            AppAction::Submit | AppAction::Cancel => {
                self.state.market.mode = MarketMode::Browse;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_listing_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Up => {
                self.state.listing.focus = self.state.listing.focus.saturating_sub(1);
            }
            AppAction::Down | AppAction::NextField => {
                let fields = self.state.listing.step.fields();
                self.state.listing.focus = (self.state.listing.focus + 1) % fields;
            }
            AppAction::Left => self.state.listing.cycle_left(),
            AppAction::Right => self.state.listing.cycle_right(),
            AppAction::Backspace => {
                if let Some(field) = self.state.listing.text_field_mut() {
                    field.pop();
                }
            }
            AppAction::Input(ch) => {
                if let Some(field) = self.state.listing.text_field_mut() {
                    field.push(ch);
                } else {
                    self.handle_nav_key(AppAction::Input(ch));
                }
            }
            AppAction::Cancel => match self.state.listing.step {
                ListingStep::Basics => self.state.section = Section::Marketplace,
                ListingStep::Details => {
                    self.state.listing.step = ListingStep::Basics;
                    self.state.listing.focus = 0;
                }
                ListingStep::Review => {
                    self.state.listing.step = ListingStep::Details;
                    self.state.listing.focus = 0;
                }
            },
            AppAction::Submit => match self.state.listing.step {
                ListingStep::Basics => {
                    if let Err(message) = self.state.listing.draft() {
                        self.state.listing.message = Some(message);
                    } else {
                        self.state.listing.message = None;
                        self.state.listing.step = ListingStep::Details;
                        self.state.listing.focus = 0;
                    }
                }
                ListingStep::Details => {
                    self.state.listing.step = ListingStep::Review;
                    self.state.listing.focus = 0;
                }
                ListingStep::Review => self.submit_listing(),
            },
            _ => {}
        }
        Ok(())
    }

    fn handle_tokens_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Input(ch) if ch.is_ascii_digit() => {
                if self.state.tokens.amount.len() < 6 {
                    self.state.tokens.amount.push(ch);
                }
            }
            AppAction::Backspace => {
                self.state.tokens.amount.pop();
            }
            AppAction::Input('a') => self.state.tokens.amount = "25".to_string(),
            AppAction::Input('b') => self.state.tokens.amount = "100".to_string(),
            AppAction::Submit => self.purchase_tokens(),
            other => self.handle_nav_key(other),
        }
        Ok(())
    }

    fn handle_transactions_key(&mut self, action: AppAction) -> Result<()> {
        let shown = self.filtered_tx_count();
        match action {
            AppAction::Up => {
                self.state.transactions.selected =
                    self.state.transactions.selected.saturating_sub(1);
            }
            AppAction::Down => {
                if shown > 0 {
                    self.state.transactions.selected =
                        (self.state.transactions.selected + 1).min(shown - 1);
                }
            }
            AppAction::Input('/') => {
                self.state.transactions.mode = TxMode::Filter;
                self.state.transactions.focus = TxFilterFocus::Search;
            }
            AppAction::Input('c') => {
                self.state.transactions.cycle_action();
                self.state.transactions.selected = 0;
            }
            AppAction::Input('x') => self.export_transactions(),
            AppAction::Input('j') => {
                if shown > 0 {
                    self.state.transactions.selected =
                        (self.state.transactions.selected + 1).min(shown - 1);
                }
            }
            AppAction::Input('k') => {
                self.state.transactions.selected =
                    self.state.transactions.selected.saturating_sub(1);
            }
            other => self.handle_nav_key(other),
        }
        Ok(())
    }

    fn handle_tx_filter_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::NextField => self.state.transactions.next_focus(),
            AppAction::Input(ch) => {
                self.state.transactions.text_field_mut().push(ch);
                self.state.transactions.selected = 0;
            }
            AppAction::Backspace => {
                self.state.transactions.text_field_mut().pop();
                self.state.transactions.selected = 0;
            }
            AppAction::Submit | AppAction::Cancel => {
                self.state.transactions.mode = TxMode::List;
            }
            _ => {}
        }
        Ok(())
    }

    fn buy_selected_item(&mut self) {
        let Some(session) = &self.state.session else {
            return;
        };
        let filtered = engine::filter::filter_items(
            &session.snapshot().items,
            &self.state.market.criteria(),
        );
        let Some(item) = filtered.get(self.state.market.selected) else {
            return;
        };
        let item_id = item.id;

        let Some(session) = &mut self.state.session else {
            return;
        };
        match session.buy_item(item_id) {
            Ok(bought) => {
                self.state.last_action = Some(Utc::now());
                self.toast(
                    ToastLevel::Success,
                    format!(
                        "{} purchased for {}",
                        bought.material,
                        Tokens::new(bought.credits)
                    ),
                );
            }
            Err(err) => self.toast(ToastLevel::Error, err.to_string()),
        }
    }

    fn submit_listing(&mut self) {
        let draft = match self.state.listing.draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.state.listing.message = Some(message);
                return;
            }
        };
        let Some(session) = &mut self.state.session else {
            return;
        };
        match session.create_listing(&draft) {
            Ok(credits) => {
                self.state.listing = ListingState::default();
                self.state.last_action = Some(Utc::now());
                self.state.section = Section::Marketplace;
                self.toast(
                    ToastLevel::Success,
                    format!("Listing created, {credits} earned"),
                );
            }
            Err(err) => self.state.listing.message = Some(err.to_string()),
        }
    }

    fn purchase_tokens(&mut self) {
        let Some(amount) = self.state.tokens.amount() else {
            self.toast(ToastLevel::Error, "Enter a positive amount".to_string());
            return;
        };
        let Some(session) = &mut self.state.session else {
            return;
        };
        match session.buy_tokens(amount) {
            Ok(()) => {
                self.state.tokens.amount.clear();
                self.state.last_action = Some(Utc::now());
                self.toast(ToastLevel::Success, format!("{amount} added to wallet"));
            }
            Err(err) => self.toast(ToastLevel::Error, err.to_string()),
        }
    }

    fn export_transactions(&mut self) {
        let criteria = self.state.transactions.criteria();
        let Some(session) = &self.state.session else {
            return;
        };
        match session.export_transactions(&criteria, EXPORT_PATH) {
            Ok(rows) => self.toast(
                ToastLevel::Info,
                format!("{rows} rows written to {EXPORT_PATH}"),
            ),
            Err(err) => self.toast(ToastLevel::Error, err.to_string()),
        }
    }

    fn filtered_item_count(&self) -> usize {
        self.state
            .session
            .as_ref()
            .map(|session| {
                engine::filter::filter_items(
                    &session.snapshot().items,
                    &self.state.market.criteria(),
                )
                .len()
            })
            .unwrap_or(0)
    }

    fn filtered_tx_count(&self) -> usize {
        self.state
            .session
            .as_ref()
            .map(|session| {
                engine::filter::filter_transactions(
                    &session.snapshot().transactions,
                    &self.state.transactions.criteria(),
                )
                .len()
            })
            .unwrap_or(0)
    }

    fn toast(&mut self, level: ToastLevel, message: String) {
        self.state.toast = Some(ToastState {
            message,
            level,
            expires: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.state.toast
            && toast.expires <= Instant::now()
        {
            self.state.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_cycles_wrap_back_to_all() {
        let mut market = MarketState::default();
        assert!(market.material().is_none());
        for _ in 0..WELL_KNOWN_MATERIALS.len() {
            market.cycle_material();
            assert!(market.material().is_some());
        }
        market.cycle_material();
        assert!(market.material().is_none());
    }

    #[test]
    fn listing_draft_validates_quantity() {
        let mut listing = ListingState::default();
        listing.quantity = "abc".to_string();
        assert!(listing.draft().is_err());
        listing.quantity = "0".to_string();
        assert!(listing.draft().is_err());
        listing.quantity = "25".to_string();
        let draft = listing.draft().unwrap();
        assert_eq!(draft.quantity, 25);
        assert_eq!(draft.material, "Plastic");
    }

    #[test]
    fn listing_images_split_on_commas() {
        let mut listing = ListingState::default();
        listing.images = "a.jpg, b.jpg,,  ".to_string();
        let draft = listing.draft().unwrap();
        assert_eq!(draft.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn tokens_amount_requires_positive_integer() {
        let mut tokens = TokensState::default();
        assert!(tokens.amount().is_none());
        tokens.amount = "25".to_string();
        assert_eq!(tokens.amount().unwrap().raw(), 25);
        tokens.amount = "0".to_string();
        assert!(tokens.amount().is_none());
    }

    #[test]
    fn transaction_criteria_parses_dates_leniently() {
        let mut txs = TransactionsState::default();
        txs.from = "2025-03-01".to_string();
        txs.to = "not a date".to_string();
        let criteria = txs.criteria();
        assert!(criteria.from.is_some());
        assert!(criteria.to.is_none());
        assert!(criteria.action.is_none());

        txs.cycle_action();
        assert_eq!(txs.criteria().action.as_deref(), Some("listed"));
    }
}
