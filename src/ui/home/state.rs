//! Home screen state management
//!
//! Contains the home state struct, sidebar items and key handling

use crate::auth;
use crate::consts::app_consts::UTILITY_GRID_COLUMNS;
use crate::error::Result;
use crate::session::Session;
use crate::store::{ConsumptionRecord, Store, User};
use crate::summary::{self, Period, Summary};
use crate::ui::app::UIConfig;
use crate::utility::{Readings, Utility};
use crossterm::event::{KeyCode, KeyEvent};
use strum::{EnumIter, IntoEnumIterator};

/// Content shown right of the sidebar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HomeView {
    Overview,
    Profile,
    Settings,
}

/// Entries of the sidebar, top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
pub enum SidebarItem {
    Home,
    Profile,
    Settings,
    AnalysisTime,
    Logout,
}

impl SidebarItem {
    pub fn label(&self) -> &'static str {
        match self {
            SidebarItem::Home => "Home",
            SidebarItem::Profile => "User Profile",
            SidebarItem::Settings => "Settings",
            SidebarItem::AnalysisTime => "Analysis Time",
            SidebarItem::Logout => "Logout",
        }
    }
}

/// Which part of the screen receives arrow keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HomeFocus {
    Sidebar,
    Grid,
}

/// What the app should do after a key press on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    None,
    /// Open the entry dialog for a utility.
    OpenEntry(Utility),
    /// The period changed; totals must be reloaded.
    Reload,
    ConfirmLogout,
}

#[derive(Debug)]
pub struct HomeState {
    pub session: Session,
    /// Profile of the logged-in user, reloaded with the totals.
    pub user: Option<User>,
    pub view: HomeView,
    pub period: Period,
    pub summary: Summary,
    pub totals: Readings,
    /// Every record of the user, oldest first.
    pub history: Vec<ConsumptionRecord>,
    pub focus: HomeFocus,
    pub sidebar_index: usize,
    pub grid_index: usize,
    pub ui_config: UIConfig,
}

impl HomeState {
    pub fn new(session: Session, ui_config: UIConfig) -> Self {
        Self {
            session,
            user: None,
            view: HomeView::Overview,
            period: Period::default(),
            summary: Summary::default(),
            totals: Readings::default(),
            history: Vec::new(),
            focus: HomeFocus::Grid,
            sidebar_index: 0,
            grid_index: 0,
            ui_config,
        }
    }

    /// Reloads the profile and the totals for the selected period.
    pub fn refresh(&mut self, store: &Store) -> Result<()> {
        let user_id = self.session.user_id;
        let today = self.session.today();
        self.user = auth::user_profile(store, user_id)?;
        self.history = store.records_for_user(user_id)?;
        self.totals = summary::get_totals(store, user_id, self.period, today)?;
        self.summary = summary::get_summary(store, user_id, self.period, today)?;
        Ok(())
    }

    /// Utilities with at least one non-zero reading on record.
    pub fn tracked_utilities(&self) -> Vec<Utility> {
        Utility::all()
            .into_iter()
            .filter(|u| {
                self.history
                    .iter()
                    .any(|record| record.readings.non_zero().contains(u))
            })
            .collect()
    }

    pub fn selected_sidebar_item(&self) -> SidebarItem {
        SidebarItem::iter()
            .nth(self.sidebar_index)
            .unwrap_or(SidebarItem::Home)
    }

    pub fn selected_utility(&self) -> Utility {
        Utility::all()
            .get(self.grid_index)
            .copied()
            .unwrap_or(Utility::Electricity)
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(User::display_name)
            .unwrap_or(&self.session.username)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('l') => {
                return HomeAction::ConfirmLogout;
            }
            KeyCode::Char('p') => return self.cycle_period(),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.view = HomeView::Overview;
                self.focus = HomeFocus::Grid;
                self.grid_index = idx;
                return HomeAction::OpenEntry(self.selected_utility());
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return HomeAction::None;
            }
            _ => {}
        }

        match self.focus {
            HomeFocus::Sidebar => self.handle_sidebar_key(key),
            HomeFocus::Grid => self.handle_grid_key(key),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Sidebar if self.view == HomeView::Overview => HomeFocus::Grid,
            _ => HomeFocus::Sidebar,
        };
    }

    fn cycle_period(&mut self) -> HomeAction {
        self.period = self.period.next();
        HomeAction::Reload
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) -> HomeAction {
        let n_items = SidebarItem::iter().count();
        match key.code {
            KeyCode::Up => {
                self.sidebar_index = (self.sidebar_index + n_items - 1) % n_items;
                HomeAction::None
            }
            KeyCode::Down => {
                self.sidebar_index = (self.sidebar_index + 1) % n_items;
                HomeAction::None
            }
            KeyCode::Enter => match self.selected_sidebar_item() {
                SidebarItem::Home => {
                    self.view = HomeView::Overview;
                    HomeAction::Reload
                }
                SidebarItem::Profile => {
                    self.view = HomeView::Profile;
                    HomeAction::None
                }
                SidebarItem::Settings => {
                    self.view = HomeView::Settings;
                    HomeAction::None
                }
                SidebarItem::AnalysisTime => {
                    self.view = HomeView::Overview;
                    self.cycle_period()
                }
                SidebarItem::Logout => HomeAction::ConfirmLogout,
            },
            _ => HomeAction::None,
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> HomeAction {
        let n = Utility::all().len();
        let cols = UTILITY_GRID_COLUMNS;
        match key.code {
            KeyCode::Left if self.grid_index % cols > 0 => self.grid_index -= 1,
            KeyCode::Right if self.grid_index % cols + 1 < cols && self.grid_index + 1 < n => {
                self.grid_index += 1
            }
            KeyCode::Up if self.grid_index >= cols => self.grid_index -= cols,
            KeyCode::Down if self.grid_index + cols < n => self.grid_index += cols,
            KeyCode::Enter => return HomeAction::OpenEntry(self.selected_utility()),
            _ => {}
        }
        HomeAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserId;
    use crossterm::event::KeyModifiers;

    fn state() -> HomeState {
        HomeState::new(Session::new(UserId(1), "alice"), UIConfig::default())
    }

    fn press(state: &mut HomeState, code: KeyCode) -> HomeAction {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn grid_navigation_stays_in_bounds() {
        let mut home = state();
        press(&mut home, KeyCode::Up);
        press(&mut home, KeyCode::Left);
        assert_eq!(home.selected_utility(), Utility::Electricity);

        press(&mut home, KeyCode::Right);
        press(&mut home, KeyCode::Right);
        assert_eq!(home.selected_utility(), Utility::Water);

        press(&mut home, KeyCode::Down);
        press(&mut home, KeyCode::Down);
        press(&mut home, KeyCode::Down);
        assert_eq!(home.selected_utility(), Utility::Petrol);
        assert_eq!(
            press(&mut home, KeyCode::Enter),
            HomeAction::OpenEntry(Utility::Petrol)
        );
    }

    #[test]
    fn digit_shortcuts_open_entry() {
        let mut home = state();
        assert_eq!(
            press(&mut home, KeyCode::Char('5')),
            HomeAction::OpenEntry(Utility::Cng)
        );
        assert_eq!(press(&mut home, KeyCode::Char('7')), HomeAction::None);
    }

    #[test]
    fn sidebar_switches_views() {
        let mut home = state();
        press(&mut home, KeyCode::Tab);
        assert_eq!(home.focus, HomeFocus::Sidebar);

        press(&mut home, KeyCode::Down);
        assert_eq!(press(&mut home, KeyCode::Enter), HomeAction::None);
        assert_eq!(home.view, HomeView::Profile);

        press(&mut home, KeyCode::Down);
        press(&mut home, KeyCode::Enter);
        assert_eq!(home.view, HomeView::Settings);

        // The grid is only reachable from the overview.
        press(&mut home, KeyCode::Tab);
        assert_eq!(home.focus, HomeFocus::Sidebar);
    }

    #[test]
    fn analysis_time_cycles_period() {
        let mut home = state();
        assert_eq!(home.period, Period::Daily);
        assert_eq!(press(&mut home, KeyCode::Char('p')), HomeAction::Reload);
        assert_eq!(home.period, Period::Weekly);

        press(&mut home, KeyCode::Tab);
        home.sidebar_index = 3;
        assert_eq!(press(&mut home, KeyCode::Enter), HomeAction::Reload);
        assert_eq!(home.period, Period::Monthly);
    }

    #[test]
    fn logout_asks_for_confirmation() {
        let mut home = state();
        assert_eq!(press(&mut home, KeyCode::Esc), HomeAction::ConfirmLogout);
        press(&mut home, KeyCode::Tab);
        home.sidebar_index = 0;
        press(&mut home, KeyCode::Up);
        assert_eq!(home.selected_sidebar_item(), SidebarItem::Logout);
        assert_eq!(press(&mut home, KeyCode::Enter), HomeAction::ConfirmLogout);
    }
}
