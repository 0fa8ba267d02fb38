use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, buffer::Buffer, prelude::*};
use rstest::rstest;

use minicart::{
    action::Action,
    core::talon::SHOPPING_BAG_OPERATIONS,
    domain::cart::{LineItemId, Money},
    infrastructure::scroll_lock::ScrollLock,
    presentation::components::mini_cart::{
        Focus, MiniCart, MiniCartClasses, MiniCartProps, CHECKOUT_LABEL, EDIT_CART_LABEL,
        ERROR_TEXT, LOADING_TEXT,
    },
    test_helpers::{recording_setter, StubCartProvider},
};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;
const PANEL_X: u16 = WIDTH - 44;

fn open_props() -> MiniCartProps {
    MiniCartProps {
        is_open: true,
        ..Default::default()
    }
}

fn draw(cart: &mut MiniCart<StubCartProvider>, props: &MiniCartProps) -> Buffer {
    draw_sized(cart, props, WIDTH, HEIGHT)
}

fn draw_sized(
    cart: &mut MiniCart<StubCartProvider>,
    props: &MiniCartProps,
    width: u16,
    height: u16,
) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|f| cart.view(props, f, f.area()))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn screen(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn find_symbol(buffer: &Buffer, y: u16, symbol: &str) -> Option<u16> {
    (0..buffer.area.width).find(|&x| buffer[(x, y)].symbol() == symbol)
}

#[test]
fn test_ready_header_shows_count_and_subtotal() {
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let buffer = draw(&mut cart, &open_props());

    let header = row(&buffer, 1);
    assert!(header.contains("3 Items"), "header was {header:?}");
    assert!(header.contains("Subtotal: $42.50"), "header was {header:?}");
    assert!(!screen(&buffer).contains(LOADING_TEXT));

    // subtotal uses the price style
    let dollar = find_symbol(&buffer, 1, "$").expect("price rendered");
    assert_eq!(buffer[(dollar, 1)].fg, Color::Green);
}

#[test]
fn test_ready_body_lists_items() {
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let screen = screen(&draw(&mut cart, &open_props()));

    assert!(screen.contains("Tiki Mug"));
    assert!(screen.contains("Tote Bag"));
    assert!(screen.contains("Color: Sand"));
    assert!(screen.contains(CHECKOUT_LABEL));
    assert!(screen.contains(EDIT_CART_LABEL));
}

#[test]
fn test_empty_cart() {
    let mut cart = MiniCart::new(StubCartProvider::empty(), ScrollLock::new());
    let buffer = draw(&mut cart, &open_props());

    assert!(row(&buffer, 1).contains("0 Items"));
    assert!(row(&buffer, 1).contains("Subtotal: $0.00"));
    assert!(screen(&buffer).contains("There are no items in your cart."));
}

#[rstest]
#[case::loading_flag(StubCartProvider::ready().loading(true))]
#[case::no_subtotal(StubCartProvider::ready().sub_total(None))]
fn test_loading_header(#[case] provider: StubCartProvider) {
    let mut cart = MiniCart::new(provider, ScrollLock::new());
    let buffer = draw(&mut cart, &open_props());

    let header = row(&buffer, 1);
    assert!(header.contains(LOADING_TEXT), "header was {header:?}");
    assert!(!header.contains("Items"));
    assert!(!header.contains("Subtotal"));
}

#[test]
fn test_error_renders_only_placeholder() {
    let mut cart = MiniCart::new(StubCartProvider::ready().error("offline"), ScrollLock::new());
    let buffer = draw(&mut cart, &open_props());
    let screen = screen(&buffer);

    assert!(row(&buffer, 0).contains(ERROR_TEXT));
    assert!(!screen.contains("Items"));
    assert!(!screen.contains("Tiki Mug"));
    assert!(!screen.contains(CHECKOUT_LABEL));
    assert_eq!(cart.handle().area(), None);
}

#[test]
fn test_error_wins_over_loading() {
    let provider = StubCartProvider::ready().loading(true).error("offline");
    let mut cart = MiniCart::new(provider, ScrollLock::new());
    let screen = screen(&draw(&mut cart, &open_props()));

    assert!(screen.contains(ERROR_TEXT));
    assert!(!screen.contains(LOADING_TEXT));
}

#[test]
fn test_closed_panel_draws_nothing() {
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let buffer = draw(&mut cart, &MiniCartProps::default());

    assert_eq!(screen(&buffer).trim(), "");
    assert_eq!(cart.handle().width(), Some(0));
}

#[test]
fn test_open_panel_uses_open_classes() {
    let classes = MiniCartClasses {
        root_open: Some(Style::default().bg(Color::Magenta)),
        contents_open: Some(Style::default().fg(Color::Cyan)),
        ..Default::default()
    };
    let props = MiniCartProps {
        classes,
        ..open_props()
    };
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let buffer = draw(&mut cart, &props);

    let corner = &buffer[(PANEL_X, 0)];
    assert_eq!(corner.bg, Color::Magenta);
    assert_eq!(corner.fg, Color::Cyan);
    // outside the panel is untouched
    assert_eq!(buffer[(0, 0)].bg, Color::Reset);
}

#[test]
fn test_closed_panel_uses_closed_classes() {
    let classes = MiniCartClasses {
        root: Some(Style::default().bg(Color::Magenta)),
        contents: Some(Style::default().fg(Color::Cyan)),
        root_open: Some(Style::default().bg(Color::Red)),
        contents_open: Some(Style::default().fg(Color::Yellow)),
        ..Default::default()
    };
    let props = MiniCartProps {
        classes,
        ..Default::default()
    };
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let buffer = draw(&mut cart, &props);

    for (x, y) in [(PANEL_X, 0), (WIDTH - 1, HEIGHT - 1), (PANEL_X + 10, 5)] {
        let cell = &buffer[(x, y)];
        assert_eq!(cell.bg, Color::Magenta, "cell ({x}, {y})");
        assert_eq!(cell.fg, Color::Cyan, "cell ({x}, {y})");
    }
    assert_eq!(buffer[(PANEL_X - 1, 0)].bg, Color::Reset);
    // styled, but still empty
    assert_eq!(screen(&buffer).trim(), "");
    assert_eq!(cart.handle().width(), Some(0));
}

#[test]
fn test_narrow_panel_wraps_header() {
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let buffer = draw_sized(&mut cart, &open_props(), 20, HEIGHT);

    let count = row(&buffer, 1);
    let subtotal = row(&buffer, 2);
    assert!(count.contains("3 Items"), "count row was {count:?}");
    assert!(!count.contains("Subtotal"), "count row was {count:?}");
    assert!(subtotal.contains("Subtotal: $42.50"), "subtotal row was {subtotal:?}");
    // right-aligned against the border
    assert_eq!(buffer[(18, 2)].symbol(), "0");
}

#[test]
fn test_wide_panel_keeps_header_on_one_row() {
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let buffer = draw_sized(&mut cart, &open_props(), 26, HEIGHT);

    let header = row(&buffer, 1);
    assert!(header.contains("3 Items"), "header was {header:?}");
    assert!(header.contains("Subtotal: $42.50"), "header was {header:?}");
}

#[test]
fn test_handle_reports_panel_size() {
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());
    let handle = cart.handle();
    assert_eq!(handle.height(), None);

    draw(&mut cart, &open_props());
    assert_eq!(handle.area(), Some(Rect::new(PANEL_X, 0, 44, HEIGHT)));
    assert_eq!(handle.height(), Some(HEIGHT));
}

#[rstest]
#[case(false, Color::LightBlue)]
#[case(true, Color::DarkGray)]
fn test_buttons_disabled_exactly_while_loading(#[case] loading: bool, #[case] fg: Color) {
    let mut cart = MiniCart::new(StubCartProvider::ready().loading(loading), ScrollLock::new());
    let buffer = draw(&mut cart, &open_props());

    let edit_row = HEIGHT - 2;
    assert!(row(&buffer, edit_row).contains(EDIT_CART_LABEL));
    let x = find_symbol(&buffer, edit_row, "E").expect("edit label");
    let cell = &buffer[(x, edit_row)];
    assert_eq!(cell.fg, fg);
    assert_eq!(cell.modifier.contains(Modifier::DIM), loading);
}

#[test]
fn test_each_button_fires_once_per_activation() {
    let provider = StubCartProvider::ready();
    let calls = provider.calls();
    let mut cart = MiniCart::new(provider, ScrollLock::new());
    let props = open_props();

    cart.update(Action::FocusNext, &props);
    assert_eq!(cart.focus(), Focus::Checkout);
    cart.update(Action::Activate, &props);
    assert_eq!(calls.checkout_count(), 1);
    assert_eq!(calls.edit_cart_count(), 0);

    cart.update(Action::FocusNext, &props);
    cart.update(Action::Activate, &props);
    assert_eq!(calls.checkout_count(), 1);
    assert_eq!(calls.edit_cart_count(), 1);
}

#[test]
fn test_buttons_do_nothing_while_loading() {
    let provider = StubCartProvider::ready().loading(true);
    let calls = provider.calls();
    let mut cart = MiniCart::new(provider, ScrollLock::new());
    let props = open_props();

    cart.update(Action::FocusNext, &props);
    cart.update(Action::Activate, &props);
    cart.update(Action::FocusNext, &props);
    cart.update(Action::Activate, &props);

    assert_eq!(calls.checkout_count(), 0);
    assert_eq!(calls.edit_cart_count(), 0);
}

#[test]
fn test_remove_selected_item() {
    let provider = StubCartProvider::ready();
    let calls = provider.calls();
    let mut cart = MiniCart::new(provider, ScrollLock::new());
    let props = open_props();

    cart.update(Action::ScrollDown, &props);
    cart.update(Action::ScrollDown, &props);
    assert_eq!(cart.selected(), Some(1));
    cart.update(Action::RemoveItem, &props);

    assert_eq!(calls.removed(), vec![LineItemId::new("2")]);
}

#[test]
fn test_close_calls_setter_with_false() {
    let (values, set_is_open) = recording_setter();
    let props = MiniCartProps {
        set_is_open,
        ..open_props()
    };
    let mut cart = MiniCart::new(StubCartProvider::ready(), ScrollLock::new());

    cart.update(Action::Close, &props);
    assert_eq!(*values.lock().expect("lock"), vec![false]);
}

#[test]
fn test_provider_receives_shopping_bag_operations() {
    let provider = StubCartProvider::ready();
    let calls = provider.calls();
    let mut cart = MiniCart::new(provider, ScrollLock::new());

    draw(&mut cart, &open_props());
    assert_eq!(calls.provider_calls(), 1);
    assert_eq!(calls.last_operations(), Some(SHOPPING_BAG_OPERATIONS));
    assert_eq!(
        SHOPPING_BAG_OPERATIONS.queries.mini_cart_query,
        "MiniCartQuery"
    );
    assert_eq!(
        SHOPPING_BAG_OPERATIONS.mutations.remove_item_mutation,
        "RemoveItemForMiniCart"
    );
}

#[test]
fn test_scroll_lock_engaged_exactly_while_open() {
    let lock = ScrollLock::new();
    let mut cart = MiniCart::new(StubCartProvider::ready(), lock.clone());
    assert!(!lock.is_locked());

    draw(&mut cart, &open_props());
    assert!(lock.is_locked());
    draw(&mut cart, &open_props());
    assert_eq!(lock.holders(), 1);

    draw(&mut cart, &MiniCartProps::default());
    assert!(!lock.is_locked());

    draw(&mut cart, &open_props());
    assert!(lock.is_locked());
    drop(cart);
    assert!(!lock.is_locked());
}

#[test]
fn test_subtotal_formats_other_currencies() {
    let provider = StubCartProvider::ready().sub_total(Some(Money::new("EUR", 1234.5)));
    let mut cart = MiniCart::new(provider, ScrollLock::new());
    let buffer = draw(&mut cart, &open_props());

    assert!(row(&buffer, 1).contains("Subtotal: €1,234.50"));
}
