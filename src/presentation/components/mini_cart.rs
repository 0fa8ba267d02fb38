//! Mini cart
//!
//! A compact summary of the shopping cart shown in an overlay panel: item
//! count, subtotal, the product listing, and checkout/edit actions.
//!
//! All cart state and mutations come from a [`CartProvider`]; the component
//! only maps the provider's snapshot to widgets and wires the provider's
//! callbacks to its two buttons.

pub mod classes;
pub mod handle;
pub mod render_state;

use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use crate::{
    action::Action,
    core::{
        callback::SetIsOpen,
        talon::{CartProvider, MiniCartArgs, MiniCartTalon, SHOPPING_BAG_OPERATIONS},
    },
    domain::cart::Money,
    infrastructure::{
        scroll_lock::{ScrollLock, ScrollLockBinding},
        tui::Frame,
    },
    presentation::widgets::{Button, Icon, IconSrc, Price, Priority, ProductListing},
};

pub use classes::{merge_classes, MiniCartClasses, ResolvedClasses};
pub use handle::MiniCartHandle;
pub use render_state::RenderState;

pub const LOADING_TEXT: &str = "Loading...";
// TODO: replace with a real error view once its content is decided
pub const ERROR_TEXT: &str = "TBD";
pub const CHECKOUT_LABEL: &str = "SECURE CHECKOUT";
pub const EDIT_CART_LABEL: &str = "Edit Shopping Bag";
pub const DEFAULT_PANEL_WIDTH: u16 = 44;

/// Inputs from the parent view
#[derive(Debug, Clone, Default)]
pub struct MiniCartProps {
    pub is_open: bool,
    pub set_is_open: SetIsOpen,
    pub classes: MiniCartClasses,
}

/// Which part of the panel receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Listing,
    Checkout,
    EditCart,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Listing => Focus::Checkout,
            Focus::Checkout => Focus::EditCart,
            Focus::EditCart => Focus::Listing,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Listing => Focus::EditCart,
            Focus::Checkout => Focus::Listing,
            Focus::EditCart => Focus::Checkout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterControl {
    Checkout,
    EditCart,
}

pub struct MiniCart<P> {
    provider: P,
    scroll_lock: ScrollLockBinding,
    handle: MiniCartHandle,
    defaults: ResolvedClasses,
    panel_width: u16,
    focus: Focus,
    selected: Option<usize>,
}

impl<P: CartProvider> MiniCart<P> {
    pub fn new(provider: P, scroll_lock: ScrollLock) -> Self {
        Self {
            provider,
            scroll_lock: ScrollLockBinding::new(scroll_lock),
            handle: MiniCartHandle::default(),
            defaults: ResolvedClasses::default(),
            panel_width: DEFAULT_PANEL_WIDTH,
            focus: Focus::default(),
            selected: None,
        }
    }

    pub fn panel_width(mut self, panel_width: u16) -> Self {
        self.panel_width = panel_width;
        self
    }

    pub fn handle(&self) -> MiniCartHandle {
        self.handle.clone()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_engaged()
    }

    /// Engage the page scroll lock while open, release it when closed
    pub fn sync_scroll_lock(&mut self, is_open: bool) {
        self.scroll_lock.sync(is_open);
    }

    /// Sync the scroll lock with `props` and fetch the provider snapshot
    pub fn talon(&mut self, props: &MiniCartProps) -> MiniCartTalon {
        self.sync_scroll_lock(props.is_open);
        let talon = self.provider.use_mini_cart(MiniCartArgs {
            set_is_open: props.set_is_open.clone(),
            operations: SHOPPING_BAG_OPERATIONS,
        });
        self.clamp_selection(talon.product_listings.len());
        talon
    }

    pub fn classes(&self, props: &MiniCartProps) -> ResolvedClasses {
        merge_classes(&self.defaults, &props.classes)
    }

    /// The root rect inside `area`: a right-aligned column when open,
    /// collapsed off the right edge when closed
    ///
    /// `panel_area(area, true)` is also the footprint the closed classes
    /// are applied to.
    pub fn panel_area(&self, area: Rect, is_open: bool) -> Rect {
        let width = if is_open {
            self.panel_width.min(area.width)
        } else {
            0
        };
        Rect {
            x: area.right() - width,
            width,
            ..area
        }
    }

    pub fn view(&mut self, props: &MiniCartProps, f: &mut Frame<'_>, area: Rect) {
        let talon = self.talon(props);
        self.render(props, &talon, area, f.buffer_mut());
    }

    pub fn render(&self, props: &MiniCartProps, talon: &MiniCartTalon, area: Rect, buf: &mut Buffer) {
        let state = RenderState::from_talon(talon);
        if let RenderState::Error(_) = state {
            self.handle.set(None);
            let placeholder = self.panel_area(area, true);
            Clear.render(placeholder, buf);
            Paragraph::new(ERROR_TEXT).render(placeholder, buf);
            return;
        }

        let classes = self.classes(props);
        let root = self.panel_area(area, props.is_open);
        self.handle.set(Some(root));
        if !props.is_open {
            // off-canvas: the closed variants style the cells the panel covers when shown
            let footprint = self.panel_area(area, true);
            buf.set_style(footprint, classes.root_for(false));
            buf.set_style(footprint, classes.contents_for(false));
            return;
        }
        if root.is_empty() {
            return;
        }

        Clear.render(root, buf);
        buf.set_style(root, classes.root_for(true));

        let contents = Block::bordered().style(classes.contents_for(true));
        let inner = contents.inner(root);
        contents.render(root, buf);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(Self::header_height(state, inner.width)),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(inner);

        Self::render_header(state, &classes, header, buf);

        let selected = match self.focus {
            Focus::Listing => self.selected,
            Focus::Checkout | Focus::EditCart => None,
        };
        ProductListing::new(
            &talon.product_listings,
            talon.loading,
            &talon.handle_remove_item,
        )
        .selected(selected)
        .style(classes.body)
        .render(body, buf);

        buf.set_style(footer, classes.footer);
        let [checkout, edit_cart] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(footer);
        self.footer_button(FooterControl::Checkout, talon, &classes)
            .render(checkout, buf);
        self.footer_button(FooterControl::EditCart, talon, &classes)
            .render(edit_cart, buf);
    }

    fn item_count_line(total_quantity: u32) -> Line<'static> {
        Line::from(format!("{total_quantity} Items"))
    }

    fn subtotal_line(sub_total: &Money, style: Style) -> Line<'static> {
        Line::from(vec![Span::raw("Subtotal: "), Price::from(sub_total).span()]).style(style)
    }

    /// Two rows when the count and the subtotal do not fit side by side
    fn header_height(state: RenderState<'_>, width: u16) -> u16 {
        match state {
            RenderState::Ready {
                total_quantity,
                sub_total,
            } => {
                let needed = Self::item_count_line(total_quantity).width()
                    + 1
                    + Self::subtotal_line(sub_total, Style::default()).width();
                if needed > usize::from(width) {
                    2
                } else {
                    1
                }
            }
            RenderState::Loading | RenderState::Error(_) => 1,
        }
    }

    fn render_header(state: RenderState<'_>, classes: &ResolvedClasses, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, classes.header);
        match state {
            RenderState::Ready {
                total_quantity,
                sub_total,
            } => {
                let subtotal = Self::subtotal_line(sub_total, classes.price);
                let [count_area, subtotal_area] = if area.height >= 2 {
                    Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area)
                } else {
                    let subtotal_width = u16::try_from(subtotal.width()).unwrap_or(u16::MAX);
                    Layout::horizontal([Constraint::Min(0), Constraint::Length(subtotal_width)])
                        .areas(area)
                };
                Paragraph::new(Self::item_count_line(total_quantity)).render(count_area, buf);
                Paragraph::new(subtotal)
                    .alignment(Alignment::Right)
                    .render(subtotal_area, buf);
            }
            RenderState::Loading | RenderState::Error(_) => {
                Paragraph::new(LOADING_TEXT).render(area, buf);
            }
        }
    }

    fn footer_button(
        &self,
        control: FooterControl,
        talon: &MiniCartTalon,
        classes: &ResolvedClasses,
    ) -> Button<'static> {
        let button = match control {
            FooterControl::Checkout => Button::new(Line::from(vec![
                Icon::new(IconSrc::Lock).style(classes.checkout_icon).span(),
                Span::raw(" "),
                Span::raw(CHECKOUT_LABEL),
            ]))
            .style(classes.checkout_button)
            .focused(self.focus == Focus::Checkout),
            FooterControl::EditCart => Button::new(EDIT_CART_LABEL)
                .style(classes.edit_cart_button)
                .focused(self.focus == Focus::EditCart),
        };
        button.priority(Priority::High).disabled(talon.loading)
    }

    /// Press a footer button; returns whether its callback fired
    pub fn activate(&self, control: FooterControl, talon: &MiniCartTalon) -> bool {
        let button = self.footer_button(control, talon, &self.defaults);
        let on_click = match control {
            FooterControl::Checkout => &talon.handle_proceed_to_checkout,
            FooterControl::EditCart => &talon.handle_edit_cart,
        };
        button.click(on_click)
    }

    /// Remove the selected line item; returns whether removal was requested
    pub fn remove_selected(&self, talon: &MiniCartTalon) -> bool {
        match (self.focus, self.selected) {
            (Focus::Listing, Some(index)) => ProductListing::new(
                &talon.product_listings,
                talon.loading,
                &talon.handle_remove_item,
            )
            .remove(index),
            _ => false,
        }
    }

    /// Handle a keyboard action while the panel is open
    pub fn update(&mut self, action: Action, props: &MiniCartProps) -> Option<Action> {
        if !props.is_open {
            return None;
        }
        match action {
            Action::Close => {
                props.set_is_open.emit(false);
                None
            }
            Action::FocusNext => {
                self.focus = self.focus.next();
                Some(Action::Render)
            }
            Action::FocusPrevious => {
                self.focus = self.focus.previous();
                Some(Action::Render)
            }
            Action::ScrollDown | Action::ScrollUp if self.focus == Focus::Listing => {
                let len = self.talon(props).product_listings.len();
                self.move_selection(action == Action::ScrollDown, len);
                Some(Action::Render)
            }
            Action::Activate => {
                let talon = self.talon(props);
                let control = match self.focus {
                    Focus::Checkout => FooterControl::Checkout,
                    Focus::EditCart => FooterControl::EditCart,
                    Focus::Listing => return None,
                };
                self.activate(control, &talon);
                None
            }
            Action::RemoveItem => {
                let talon = self.talon(props);
                self.remove_selected(&talon);
                None
            }
            _ => None,
        }
    }

    fn move_selection(&mut self, down: bool, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match (self.selected, down) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(len - 1),
            (Some(i), false) => i.saturating_sub(1),
        });
    }

    fn clamp_selection(&mut self, len: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::StubCartProvider;

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Listing.next(), Focus::Checkout);
        assert_eq!(Focus::Checkout.next(), Focus::EditCart);
        assert_eq!(Focus::EditCart.next(), Focus::Listing);
        assert_eq!(Focus::Listing.previous(), Focus::EditCart);
        assert_eq!(Focus::EditCart.previous(), Focus::Checkout);
    }

    #[test]
    fn test_panel_area_open_is_right_aligned() {
        let cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new()).panel_width(30);
        let area = Rect::new(0, 0, 100, 20);
        assert_eq!(cart.panel_area(area, true), Rect::new(70, 0, 30, 20));
    }

    #[test]
    fn test_panel_area_open_narrow_terminal() {
        let cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new()).panel_width(30);
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(cart.panel_area(area, true), area);
    }

    #[test]
    fn test_panel_area_closed_is_collapsed() {
        let cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
        let area = Rect::new(0, 0, 100, 20);
        assert_eq!(cart.panel_area(area, false), Rect::new(100, 0, 0, 20));
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
        cart.move_selection(true, 3);
        assert_eq!(cart.selected(), Some(0));
        cart.move_selection(true, 3);
        cart.move_selection(true, 3);
        cart.move_selection(true, 3);
        assert_eq!(cart.selected(), Some(2));
        cart.move_selection(false, 3);
        assert_eq!(cart.selected(), Some(1));

        cart.clamp_selection(1);
        assert_eq!(cart.selected(), Some(0));
        cart.clamp_selection(0);
        assert_eq!(cart.selected(), None);
    }

    #[test]
    fn test_update_ignored_while_closed() {
        let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
        let props = MiniCartProps::default();
        assert_eq!(cart.update(Action::FocusNext, &props), None);
        assert_eq!(cart.focus(), Focus::Listing);
    }
}
