use crate::config::{Config, Profile, StartView};
use crate::resources::{CodingResource, FetchError, FETCH_FAILED_MESSAGE};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::resources::{grid_columns, ResourcesIntent, ResourcesReducer, ResourcesState};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum View {
    #[default]
    Home,
    Resources,
}

impl View {
    /// Tab order in the header.
    pub const ALL: [View; 2] = [View::Home, View::Resources];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Resources => "Coding Resources",
        }
    }
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Home => View::Home,
            StartView::Resources => View::Resources,
        }
    }
}

/// Side effects requested by the UI, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchResources,
    OpenLink { url: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    view: View,
    profile: Profile,
    /// State of the resources view (MVI pattern). Lives as long as the app.
    resources: ResourcesState,
    resource_limit: usize,
    command_sender: Option<UiCommandSender>,
    body_size: (u16, u16),
    home_scroll: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            view: config.ui.start_view.into(),
            profile: config.profile.clone(),
            resources: ResourcesState::default(),
            resource_limit: config.resources.limit,
            command_sender: None,
            body_size: (0, 0),
            home_scroll: 0,
        }
    }

    pub fn attach_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn resources(&self) -> &ResourcesState {
        &self.resources
    }

    pub fn resource_limit(&self) -> usize {
        self.resource_limit
    }

    pub fn home_scroll(&self) -> u16 {
        self.home_scroll
    }

    pub fn on_tick(&mut self) {
        if self.resources.loading {
            self.dispatch_resources(ResourcesIntent::AnimationTick);
        }
    }

    /// `cols`/`rows` are the full terminal size.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        self.body_size = (body.width, body.height);
    }

    pub fn scroll_home(&mut self, delta: i32) {
        let next = (self.home_scroll as i32 + delta).clamp(0, u16::MAX as i32);
        self.home_scroll = next as u16;
    }

    pub fn dispatch_resources(&mut self, intent: ResourcesIntent) {
        dispatch_mvi!(self, resources, ResourcesReducer, intent);
    }

    /// Start a fetch unless one is already outstanding.
    ///
    /// Returns true when a new fetch was started.
    pub fn request_load_resources(&mut self) -> bool {
        let was_loading = self.resources.loading;
        self.dispatch_resources(ResourcesIntent::FetchRequested);
        if was_loading || !self.resources.loading {
            return false;
        }

        if self.command_sender.is_some() && !self.send_command(UiCommand::FetchResources) {
            // Nothing will ever settle this attempt; fail it now.
            self.dispatch_resources(ResourcesIntent::FetchFailed {
                message: FETCH_FAILED_MESSAGE.to_string(),
            });
            return false;
        }
        true
    }

    /// Settle the outstanding fetch.
    pub fn on_resources_loaded(&mut self, result: Result<Vec<CodingResource>, FetchError>) {
        let intent = match result {
            Ok(resources) => ResourcesIntent::FetchSucceeded { resources },
            Err(err) => ResourcesIntent::FetchFailed {
                message: err.user_message().to_string(),
            },
        };
        self.dispatch_resources(intent);
    }

    /// Move the card cursor in grid coordinates.
    pub fn move_card(&mut self, dx: isize, dy: isize) {
        let columns = grid_columns(self.body_size.0) as isize;
        self.dispatch_resources(ResourcesIntent::MoveCard {
            delta: dx + dy * columns,
        });
    }

    /// Open the link of the card under the cursor in the system browser.
    pub fn open_selected_link(&mut self) -> bool {
        let Some(url) = self.resources.selected_resource().map(|r| r.url.clone()) else {
            return false;
        };
        self.send_command(UiCommand::OpenLink { url })
    }

    fn send_command(&self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Dropped UI command");
                false
            }
        }
    }
}
