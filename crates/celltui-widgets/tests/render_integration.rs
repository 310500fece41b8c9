#![forbid(unsafe_code)]

//! End-to-end rendering: widgets emit cells, a `Buffer` composites them, and
//! the visible grid is checked as text.

use celltui_core::geometry::Rect;
use celltui_render::buffer::Buffer;
use celltui_render::cell::{Attribute, Color, StyleFlags};
use celltui_render::cell_list::CellList;
use celltui_widgets::block::{Alignment, Block};
use celltui_widgets::gauge::Gauge;
use celltui_widgets::menu::{Menu, MenuState, Overflow};
use celltui_widgets::theme::{GaugeConfig, MenuConfig};
use celltui_widgets::{StatefulWidget, Widget};

fn composite(cells: &CellList, area: Rect) -> Buffer {
    let mut buf = Buffer::new(area.right().max(1), area.bottom().max(1));
    buf.apply(cells);
    buf
}

#[test]
fn bordered_gauge_with_title() {
    let gauge = Gauge::new()
        .percent(50)
        .block(Block::bordered().title("Load"));
    let area = Rect::new(0, 0, 12, 5);

    let mut cells = CellList::new();
    gauge.render(area, &mut cells);
    let buf = composite(&cells, area);

    let lines = buf.to_lines();
    assert_eq!(lines[0], "┌Load──────┐");
    assert_eq!(lines[4], "└──────────┘");
    // inner width 10, label at 1 + 5
    assert_eq!(lines[2], "│     50%  │");
    for y in 1..4 {
        for x in 1..6 {
            assert_eq!(buf.get(x, y).map(|c| c.bg), Some(Attribute::new(Color::Red)));
        }
    }
}

#[test]
fn gauge_at_default_size() {
    let area = Rect::from_size(Gauge::DEFAULT_SIZE.width, Gauge::DEFAULT_SIZE.height);
    let gauge = Gauge::new().percent(25).block(Block::bordered());
    let mut cells = CellList::new();
    gauge.render(area, &mut cells);
    let buf = composite(&cells, area);
    assert_eq!(buf.to_lines()[2], "│     25%  │");
}

#[test]
fn gauge_from_custom_config() {
    let config = GaugeConfig {
        bar_color: Attribute::DEFAULT,
        percent_color: Attribute::new(Color::Yellow),
        left_margin: 1,
        right_margin: 1,
    };
    let gauge = Gauge::from_config(config).percent(100);
    let area = Rect::new(0, 0, 6, 1);
    let mut cells = CellList::new();
    gauge.render(area, &mut cells);
    let buf = composite(&cells, area);

    assert_eq!(buf.get(0, 0).map(|c| c.bg), Some(Attribute::DEFAULT));
    let filled = buf.get(1, 0).copied().unwrap_or_default();
    assert!(filled.bg.has_flag(StyleFlags::REVERSE));
    assert_eq!(buf.get(5, 0).map(|c| c.bg), Some(Attribute::DEFAULT));
}

#[test]
fn gauge_over_block_background() {
    let bg = Attribute::new(Color::Blue);
    let gauge = Gauge::new()
        .percent(0)
        .left_text("a")
        .block(Block::new().background(bg));
    let area = Rect::new(0, 0, 8, 3);
    let mut cells = CellList::new();
    gauge.render(area, &mut cells);
    let buf = composite(&cells, area);

    for y in 0..3 {
        for x in 0..8 {
            assert_eq!(buf.get(x, y).map(|c| c.bg), Some(bg), "({x},{y})");
        }
    }
    assert_eq!(buf.row_text(1), "a   0%  ");
}

#[test]
fn scrolling_menu_follows_cursor() {
    let menu = Menu::new()
        .items(["alpha", "beta", "gamma", "delta"])
        .block(Block::bordered().title("Pick").title_alignment(Alignment::Center));
    let area = Rect::new(0, 0, 9, 4);
    let mut state = MenuState::new();

    for _ in 0..3 {
        menu.select_down(&mut state, area);
    }
    assert_eq!(state.selected_index(), 3);
    assert_eq!(state.scroll(), 2);

    let mut cells = CellList::new();
    StatefulWidget::render(&menu, area, &mut cells, &state);
    let buf = composite(&cells, area);
    assert_eq!(
        buf.to_lines(),
        vec!["┌─Pick──┐", "│gamma  │", "│delta  │", "└───────┘"]
    );
    for x in 1..8 {
        assert_eq!(buf.get(x, 2).map(|c| c.bg), Some(menu.active_bg));
    }
    assert_eq!(buf.get(6, 1).map(|c| c.bg), Some(Attribute::DEFAULT));

    menu.select_up(&mut state);
    menu.select_up(&mut state);
    assert_eq!((state.selected_index(), state.scroll()), (1, 1));
}

#[test]
fn menu_resize_leaves_window_until_next_step() {
    let menu = Menu::new().items(["a", "b", "c", "d", "e"]);
    let mut state = MenuState::new();
    let tall = Rect::new(0, 0, 3, 5);
    for _ in 0..3 {
        menu.select_down(&mut state, tall);
    }
    assert_eq!((state.selected_index(), state.scroll()), (3, 0));

    let short = Rect::new(0, 0, 3, 2);
    let mut cells = CellList::new();
    StatefulWidget::render(&menu, short, &mut cells, &state);
    // active row 3 is outside the window [0, 2); nothing is highlighted
    assert!(cells.iter().all(|p| p.cell.bg == menu.item_bg));

    menu.select_down(&mut state, short);
    assert_eq!((state.selected_index(), state.scroll()), (4, 1));
}

#[test]
fn wrap_menu_in_block() {
    let menu = Menu::from_config(MenuConfig {
        overflow: Overflow::Wrap,
        ..MenuConfig::default()
    })
    .items(["hello", "wide 你好"])
    .block(Block::bordered());
    let area = Rect::new(0, 0, 6, 6);

    let mut cells = CellList::new();
    Widget::render(&menu, area, &mut cells);
    let buf = composite(&cells, area);
    assert_eq!(
        buf.to_lines(),
        vec!["┌────┐", "│hell│", "│o   │", "│wide│", "│ 你 │", "└────┘"]
    );
}

#[test]
fn widgets_share_one_cell_list() {
    let area_gauge = Rect::new(0, 0, 10, 1);
    let area_menu = Rect::new(0, 1, 10, 2);
    let mut cells = CellList::new();

    Gauge::new().percent(30).render(area_gauge, &mut cells);
    StatefulWidget::render(
        &Menu::new().items(["x", "y"]),
        area_menu,
        &mut cells,
        &MenuState::new(),
    );

    let buf = composite(&cells, Rect::new(0, 0, 10, 3));
    assert_eq!(buf.to_lines(), vec!["     30%", "x", "y"]);
}
