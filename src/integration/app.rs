use color_eyre::eyre::Result;
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    action::Action,
    core::callback::{Callback, SetIsOpen},
    domain::catalog::{demo_catalog, CatalogProduct},
    infrastructure::{
        cart_store::InMemoryCartProvider,
        config::Config,
        scroll_lock::ScrollLock,
        tui::{Event, Frame, TuiLike},
    },
    presentation::components::{
        mini_cart::{MiniCart, MiniCartProps, DEFAULT_PANEL_WIDTH},
        status_bar::StatusBar,
        storefront::Storefront,
        Component,
    },
};

/// Storefront application
///
/// Owns the mini cart's open state and hands it down as props on every
/// frame; the mini cart asks to close through the `set_is_open` callback,
/// which comes back here as [`Action::SetMiniCartOpen`].
pub struct App {
    pub config: Config,
    pub should_quit: bool,
    is_open: bool,
    provider: InMemoryCartProvider,
    storefront: Storefront,
    status_bar: StatusBar,
    mini_cart: MiniCart<InMemoryCartProvider>,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: Config, provider: InMemoryCartProvider) -> Result<Self> {
        Self::with_catalog(config, provider, demo_catalog())
    }

    pub fn with_catalog(
        config: Config,
        mut provider: InMemoryCartProvider,
        catalog: Vec<CatalogProduct>,
    ) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        provider.register_action_handler(action_tx.clone());

        let scroll_lock = ScrollLock::new();
        let cart = provider.clone();
        let add_to_cart = Callback::new(move |product: CatalogProduct| cart.add_item(&product));
        let mut storefront = Storefront::new(catalog, scroll_lock.clone(), add_to_cart);
        let mut status_bar = StatusBar::default();
        for component in [&mut storefront as &mut dyn Component, &mut status_bar] {
            component.register_action_handler(action_tx.clone())?;
            component.register_config_handler(config.clone())?;
        }

        let mini_cart = MiniCart::new(provider.clone(), scroll_lock)
            .panel_width(config.panel_width.unwrap_or(DEFAULT_PANEL_WIDTH));

        Ok(Self {
            config,
            should_quit: false,
            is_open: false,
            provider,
            storefront,
            status_bar,
            mini_cart,
            action_tx,
            action_rx,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn provider(&self) -> &InMemoryCartProvider {
        &self.provider
    }

    pub fn mini_cart(&self) -> &MiniCart<InMemoryCartProvider> {
        &self.mini_cart
    }

    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn action_sender(&self) -> UnboundedSender<Action> {
        self.action_tx.clone()
    }

    fn set_is_open(&self) -> SetIsOpen {
        let tx = self.action_tx.clone();
        Callback::new(move |open| {
            if let Err(e) = tx.send(Action::SetMiniCartOpen(open)) {
                tracing::warn!("mini cart setter dropped: {e}");
            }
        })
    }

    pub fn props(&self) -> MiniCartProps {
        MiniCartProps {
            is_open: self.is_open,
            set_is_open: self.set_is_open(),
            classes: self.config.styles.mini_cart,
        }
    }

    fn open_mini_cart(&mut self, open: bool) -> Result<()> {
        if self.is_open != open {
            tracing::info!(open, "mini cart toggled");
        }
        self.is_open = open;
        self.mini_cart.sync_scroll_lock(open);
        self.action_tx.send(Action::Render)?;
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Tick => self.action_tx.send(Action::Tick)?,
            Event::Render => self.action_tx.send(Action::Render)?,
            Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
            Event::Key(key) => {
                if let Some(action) = self.config.keybindings.action_for(&key) {
                    log::debug!("Got action: {action:?}");
                    self.action_tx.send(action.clone())?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Drain the action queue, routing each action to the components
    pub fn handle_actions(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if action != Action::Tick && action != Action::Render {
                log::debug!("{action:?}");
            }
            match action {
                Action::Quit => self.should_quit = true,
                Action::Render => self.draw(tui)?,
                Action::Resize(w, h) => {
                    tui.resize(Rect::new(0, 0, w, h))?;
                    self.draw(tui)?;
                }
                Action::ToggleMiniCart => self.open_mini_cart(!self.is_open)?,
                Action::SetMiniCartOpen(open) => self.open_mini_cart(open)?,
                Action::Refresh => self.provider.clear_error(),
                Action::CartChanged => self.action_tx.send(Action::Render)?,
                _ => {}
            }

            let props = self.props();
            if let Some(next) = self.mini_cart.update(action.clone(), &props) {
                self.action_tx.send(next)?;
            }
            for component in [&mut self.storefront as &mut dyn Component, &mut self.status_bar] {
                if let Some(next) = component.update(action.clone())? {
                    self.action_tx.send(next)?;
                }
            }
        }
        Ok(())
    }

    pub fn draw(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        let props = self.props();
        let Self {
            storefront,
            status_bar,
            mini_cart,
            ..
        } = self;
        let mut result = Ok(());
        tui.draw(&mut |f: &mut Frame<'_>| {
            let area = f.area();
            let [page, _status] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);
            result = storefront
                .draw(f, area)
                .and_then(|()| status_bar.draw(f, area));
            mini_cart.view(&props, f, page);
        })?;
        if let Err(e) = result {
            self.action_tx
                .send(Action::Error(format!("Failed to draw: {e:?}")))?;
        }
        Ok(())
    }

    pub async fn run(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        tui.enter()?;
        self.action_tx.send(Action::Render)?;

        loop {
            let event = tui.next().await;
            let done = event.is_none();
            if let Some(event) = event {
                self.handle_event(event)?;
            }
            self.handle_actions(tui)?;
            if done || self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }
}
