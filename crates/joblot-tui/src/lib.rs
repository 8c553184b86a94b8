// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use joblot_app::{
    CellHandle, ColumnId, ColumnLayout, ColumnPolicy, ColumnSpec, Field, FocusGrid, FooterTab,
    NavKey, Priority, RenderMode, Row, SheetCommand, SheetMode, SheetState, Status, column_spec,
    next_focus, sheet_columns,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Column widths are kept in the sheet's own width units; the terminal maps
/// them to cells at this ratio, so the hide threshold and default widths
/// stay on their natural scale.
pub const UNITS_PER_CELL: u16 = 7;

const MIN_COLUMN_CELLS: u16 = 2;
const HALF_PAGE_ROWS: isize = 10;
const FULL_PAGE_ROWS: isize = 20;
const HEADER_LINES: u16 = 2;
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(450);
const COLUMN_SEPARATOR: &str = "│";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetSnapshot {
    pub rows: Vec<Row>,
    pub max_rows: usize,
}

/// Seam to whatever owns the row store. The view never touches the store
/// directly; edits and link activation go through here.
pub trait SheetRuntime {
    fn load_snapshot(&mut self) -> Result<SheetSnapshot>;
    fn apply_edit(&mut self, row: usize, field: Field, input: &str) -> Result<()>;
    fn open_url(&mut self, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub policy: ColumnPolicy,
    pub show_footer: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            policy: ColumnPolicy::default(),
            show_footer: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditState {
    buffer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    column: ColumnId,
    start_width: u16,
    start_x: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug)]
struct ViewData {
    snapshot: SheetSnapshot,
    layout: ColumnLayout,
    focus_grid: FocusGrid,
    focus_row: usize,
    focus_col: usize,
    scroll_row: usize,
    edit: Option<EditState>,
    drag: Option<DragState>,
    last_divider_click: Option<(ColumnId, Instant)>,
    help_visible: bool,
    show_footer: bool,
    status_token: u64,
}

impl ViewData {
    fn new(options: UiOptions) -> Self {
        Self {
            snapshot: SheetSnapshot::default(),
            layout: ColumnLayout::new(options.policy),
            focus_grid: FocusGrid::default(),
            focus_row: 0,
            focus_col: 0,
            scroll_row: 0,
            edit: None,
            drag: None,
            last_divider_click: None,
            help_visible: false,
            show_footer: options.show_footer,
            status_token: 0,
        }
    }
}

pub fn run_app<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(options);
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        state.dispatch(SheetCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let screen = match terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(error) => {
                result = Err(error).context("query terminal size");
                break;
            }
        };

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key, screen) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(state, &mut view_data, &internal_tx, mouse, screen);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen)
        .context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut SheetState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(SheetCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(SheetCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn refresh_view_data<R: SheetRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.snapshot = runtime.load_snapshot()?;
    rebuild_focus_grid(view_data);
    coerce_focus(view_data);
    Ok(())
}

/// Repopulates the routing table for the current visible column set: every
/// row slot of every visible input column mounts a handle, badge columns
/// leave a gap. Must run after any visibility change so handles into hidden
/// columns cannot survive.
fn rebuild_focus_grid(view_data: &mut ViewData) {
    let leaves = view_data.layout.visible_leaves();
    view_data
        .focus_grid
        .reset(view_data.snapshot.max_rows, leaves.len());
    for row in 0..view_data.snapshot.max_rows {
        for (col, spec) in leaves.iter().enumerate() {
            if spec.mode == RenderMode::Input {
                view_data.focus_grid.register(
                    row,
                    col,
                    CellHandle {
                        row,
                        column: spec.id,
                    },
                );
            }
        }
    }
}

/// Keeps focus on a slot that still exists (and holds a handle) after the
/// column set changed.
fn coerce_focus(view_data: &mut ViewData) {
    let rows = view_data.focus_grid.rows();
    let cols = view_data.focus_grid.cols();
    view_data.focus_row = view_data.focus_row.min(rows.saturating_sub(1));
    view_data.focus_col = view_data.focus_col.min(cols.saturating_sub(1));
    if view_data
        .focus_grid
        .get(view_data.focus_row, view_data.focus_col)
        .is_some()
    {
        return;
    }
    let row = view_data.focus_row;
    let left = (0..=view_data.focus_col)
        .rev()
        .find(|col| view_data.focus_grid.get(row, *col).is_some());
    let right = (view_data.focus_col..cols)
        .find(|col| view_data.focus_grid.get(row, *col).is_some());
    if let Some(col) = left.or(right) {
        view_data.focus_col = col;
    }
}

fn focused_handle(view_data: &ViewData) -> Option<CellHandle> {
    view_data
        .focus_grid
        .get(view_data.focus_row, view_data.focus_col)
}

fn focused_column(view_data: &ViewData) -> Option<ColumnId> {
    view_data
        .layout
        .visible_leaf_ids()
        .get(view_data.focus_col)
        .copied()
}

fn cell_text(view_data: &ViewData, row: usize, column: ColumnId) -> String {
    if row >= view_data.snapshot.rows.len() {
        return String::new();
    }
    match column_spec(column).field {
        Some(field) => view_data.snapshot.rows[row].value(field).display(),
        None => String::new(),
    }
}

fn sync_edit_buffer(state: &SheetState, view_data: &mut ViewData) {
    if state.mode != SheetMode::Edit {
        view_data.edit = None;
        return;
    }
    let buffer = focused_handle(view_data)
        .map(|handle| cell_text(view_data, handle.row, handle.column))
        .unwrap_or_default();
    view_data.edit = Some(EditState { buffer });
}

// ───────────────────────── key handling ─────────────────────────

fn handle_key_event<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    screen: Rect,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if let Some(nav) = nav_key_for(key.code) {
        // Navigation keys never reach the cell editor; their editing effect
        // is suppressed in both modes.
        move_focus(state, view_data, nav, screen);
        return false;
    }

    match state.mode {
        SheetMode::Edit => handle_edit_key(state, runtime, view_data, internal_tx, key),
        SheetMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key, screen),
    }

    false
}

const fn nav_key_for(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Left => Some(NavKey::Left),
        KeyCode::Right => Some(NavKey::Right),
        _ => None,
    }
}

/// Directional move through the routing table. A coordinate without a
/// registered handle (the badge column, a cleared table) swallows the move.
fn move_focus(state: &SheetState, view_data: &mut ViewData, key: NavKey, screen: Rect) {
    let (row, col) = next_focus(
        key,
        view_data.focus_row,
        view_data.focus_col,
        view_data.focus_grid.rows(),
        view_data.focus_grid.cols(),
    );
    move_focus_to(state, view_data, row, col, screen);
}

fn move_focus_to(
    state: &SheetState,
    view_data: &mut ViewData,
    row: usize,
    col: usize,
    screen: Rect,
) {
    if view_data.focus_grid.get(row, col).is_none() {
        return;
    }
    view_data.focus_row = row;
    view_data.focus_col = col;
    ensure_focus_visible(view_data, body_height(screen, view_data.show_footer));
    sync_edit_buffer(state, view_data);
}

fn handle_nav_key<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    screen: Rect,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) => move_focus(state, view_data, NavKey::Down, screen),
        (KeyCode::Char('k'), _) => move_focus(state, view_data, NavKey::Up, screen),
        (KeyCode::Char('h'), _) => move_focus(state, view_data, NavKey::Left, screen),
        (KeyCode::Char('l'), _) => move_focus(state, view_data, NavKey::Right, screen),
        (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            move_focus_by(state, view_data, HALF_PAGE_ROWS, screen);
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            move_focus_by(state, view_data, -HALF_PAGE_ROWS, screen);
        }
        (KeyCode::PageDown, _) => move_focus_by(state, view_data, FULL_PAGE_ROWS, screen),
        (KeyCode::PageUp, _) => move_focus_by(state, view_data, -FULL_PAGE_ROWS, screen),
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            move_focus_to(state, view_data, 0, view_data.focus_col, screen);
        }
        (KeyCode::Char('G'), _) => {
            let last = view_data.focus_grid.rows().saturating_sub(1);
            move_focus_to(state, view_data, last, view_data.focus_col, screen);
        }
        (KeyCode::Char('^'), _) => move_focus_to(state, view_data, view_data.focus_row, 0, screen),
        (KeyCode::Char('$'), _) => {
            let last = view_data.focus_grid.cols().saturating_sub(1);
            move_focus_to(state, view_data, view_data.focus_row, last, screen);
        }
        (KeyCode::Char('i'), KeyModifiers::NONE) => {
            state.dispatch(SheetCommand::EnterEditMode);
            sync_edit_buffer(state, view_data);
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            hide_focused_column(state, view_data, internal_tx);
        }
        (KeyCode::Char('['), _) => resize_focused_column(state, view_data, internal_tx, -1),
        (KeyCode::Char(']'), _) => resize_focused_column(state, view_data, internal_tx, 1),
        (KeyCode::Tab, _) => {
            state.dispatch(SheetCommand::NextFooterTab);
        }
        (KeyCode::BackTab, _) => {
            state.dispatch(SheetCommand::PrevFooterTab);
        }
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
        }
        (KeyCode::Enter, _) => {
            if focused_column(view_data) == Some(ColumnId::Url) {
                open_focused_link(state, runtime, view_data, internal_tx);
            } else {
                state.dispatch(SheetCommand::EnterEditMode);
                sync_edit_buffer(state, view_data);
            }
        }
        _ => {}
    }
}

fn handle_edit_key<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.dispatch(SheetCommand::ExitToNav);
            view_data.edit = None;
        }
        (KeyCode::Enter, _) => {
            if focused_column(view_data) == Some(ColumnId::Url) {
                open_focused_link(state, runtime, view_data, internal_tx);
            }
        }
        (KeyCode::Backspace, _) => {
            apply_buffer_change(state, runtime, view_data, internal_tx, |buffer| {
                buffer.pop();
            });
        }
        (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            apply_buffer_change(state, runtime, view_data, internal_tx, |buffer| {
                buffer.push(c);
            });
        }
        _ => {}
    }
}

/// Every keystroke is a store write: the raw buffer is what the user sees,
/// the coerced value is what lands in the row.
fn apply_buffer_change<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    change: impl FnOnce(&mut String),
) {
    let Some(handle) = focused_handle(view_data) else {
        return;
    };
    let Some(field) = column_spec(handle.column).field else {
        return;
    };
    let Some(edit) = view_data.edit.as_mut() else {
        return;
    };
    change(&mut edit.buffer);
    let buffer = edit.buffer.clone();
    if let Err(error) = runtime.apply_edit(handle.row, field, &buffer) {
        emit_status(state, view_data, internal_tx, format!("edit failed: {error}"));
        return;
    }
    if let Err(error) = reload_snapshot(runtime, view_data) {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("reload failed: {error}"),
        );
    }
}

/// Snapshot refresh that leaves the edit buffer alone (the buffer may hold
/// text the store coerced away, e.g. a half-typed priority).
fn reload_snapshot<R: SheetRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.snapshot = runtime.load_snapshot()?;
    rebuild_focus_grid(view_data);
    coerce_focus(view_data);
    Ok(())
}

fn open_focused_link<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(handle) = focused_handle(view_data) else {
        return;
    };
    let target = cell_text(view_data, handle.row, handle.column);
    if target.trim().is_empty() {
        emit_status(state, view_data, internal_tx, "no link target");
        return;
    }
    match runtime.open_url(&target) {
        Ok(()) => emit_status(state, view_data, internal_tx, format!("opened {target}")),
        Err(error) => emit_status(
            state,
            view_data,
            internal_tx,
            format!("open link failed: {error}"),
        ),
    }
}

fn move_focus_by(state: &SheetState, view_data: &mut ViewData, delta: isize, screen: Rect) {
    let rows = view_data.focus_grid.rows();
    if rows == 0 {
        return;
    }
    let target = (view_data.focus_row as isize + delta).clamp(0, rows as isize - 1) as usize;
    move_focus_to(state, view_data, target, view_data.focus_col, screen);
}

fn hide_focused_column(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(column) = focused_column(view_data) else {
        emit_status(state, view_data, internal_tx, "no column to hide");
        return;
    };
    if view_data.layout.hide(column) {
        after_visibility_change(state, view_data, internal_tx, column);
    }
}

fn resize_focused_column(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    direction: i16,
) {
    let Some(column) = focused_column(view_data) else {
        return;
    };
    let current = view_data.layout.width(column);
    let step = i32::from(UNITS_PER_CELL) * i32::from(direction);
    let next = (i32::from(current) + step).clamp(0, i32::from(u16::MAX)) as u16;
    view_data.layout.resize(column, next);
    let label = column_spec(column).label;
    let width = view_data.layout.width(column);
    emit_status(state, view_data, internal_tx, format!("{label} width {width}"));
}

fn after_visibility_change(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    column: ColumnId,
) {
    rebuild_focus_grid(view_data);
    coerce_focus(view_data);
    sync_edit_buffer(state, view_data);
    let label = column_spec(column).label;
    let visible = view_data.layout.visible_leaves().len();
    emit_status(
        state,
        view_data,
        internal_tx,
        format!("{label} hidden ({visible} visible)"),
    );
}

// ───────────────────────── mouse handling ─────────────────────────

fn handle_mouse_event(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
    screen: Rect,
) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_down(state, view_data, internal_tx, mouse, screen, Instant::now());
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(drag) = view_data.drag {
                let delta_cells = mouse.column as i32 - drag.start_x as i32;
                let units = drag.start_width as i32 + delta_cells * UNITS_PER_CELL as i32;
                view_data
                    .layout
                    .resize(drag.column, units.clamp(0, u16::MAX as i32) as u16);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(drag) = view_data.drag.take() {
                if view_data.layout.finish_resize(drag.column) {
                    after_visibility_change(state, view_data, internal_tx, drag.column);
                }
            }
        }
        _ => {}
    }
}

fn handle_mouse_down(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
    screen: Rect,
    now: Instant,
) {
    let grid_inner = grid_inner_area(screen, view_data.show_footer);
    if !grid_inner.contains((mouse.column, mouse.row).into()) {
        return;
    }
    let x_rel = mouse.column - grid_inner.x;
    let y_rel = mouse.row - grid_inner.y;

    if y_rel < HEADER_LINES {
        if let Some(column) = divider_at(view_data, x_rel) {
            if is_double_activation(view_data, column, now) {
                // Double-activation on the handle hides outright.
                view_data.drag = None;
                if view_data.layout.hide(column) {
                    after_visibility_change(state, view_data, internal_tx, column);
                }
                return;
            }
            view_data.drag = Some(DragState {
                column,
                start_width: view_data.layout.width(column),
                start_x: mouse.column,
            });
        }
        return;
    }

    let slot = view_data.scroll_row + (y_rel - HEADER_LINES) as usize;
    if slot >= view_data.snapshot.max_rows {
        return;
    }
    if let Some(col) = leaf_at(view_data, x_rel) {
        move_focus_to(state, view_data, slot, col, screen);
    }
}

fn is_double_activation(view_data: &mut ViewData, column: ColumnId, now: Instant) -> bool {
    let double = matches!(
        view_data.last_divider_click,
        Some((last, at)) if last == column && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
    );
    view_data.last_divider_click = if double { None } else { Some((column, now)) };
    double
}

// ───────────────────────── geometry ─────────────────────────

fn screen_chunks(area: Rect, show_footer: bool) -> (Rect, Rect, Option<Rect>, Rect) {
    if show_footer {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(area);
        (chunks[0], chunks[1], Some(chunks[2]), chunks[3])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(area);
        (chunks[0], chunks[1], None, chunks[2])
    }
}

fn grid_inner_area(screen: Rect, show_footer: bool) -> Rect {
    let (_, grid, _, _) = screen_chunks(screen, show_footer);
    Block::default().borders(Borders::ALL).inner(grid)
}

fn body_height(screen: Rect, show_footer: bool) -> usize {
    let inner = grid_inner_area(screen, show_footer);
    inner.height.saturating_sub(HEADER_LINES) as usize
}

fn ensure_focus_visible(view_data: &mut ViewData, body_rows: usize) {
    if body_rows == 0 {
        return;
    }
    if view_data.focus_row < view_data.scroll_row {
        view_data.scroll_row = view_data.focus_row;
    } else if view_data.focus_row >= view_data.scroll_row + body_rows {
        view_data.scroll_row = view_data.focus_row + 1 - body_rows;
    }
}

fn column_cells(view_data: &ViewData, column: ColumnId) -> u16 {
    (view_data.layout.width(column) / UNITS_PER_CELL).max(MIN_COLUMN_CELLS)
}

/// Every rendered table column in order: the row-number gutter, the visible
/// leaves, the trailing blank slot.
fn table_columns(view_data: &ViewData) -> Vec<&'static ColumnSpec> {
    let mut columns = vec![column_spec(ColumnId::RowNumber)];
    columns.extend(view_data.layout.visible_leaves());
    columns.push(column_spec(ColumnId::AddSlot));
    columns
}

/// (column, x offset, width in cells) for each rendered column; offsets
/// include the single separator cell between columns.
fn column_spans(view_data: &ViewData) -> Vec<(ColumnId, u16, u16)> {
    let mut spans = Vec::new();
    let mut x = 0u16;
    for spec in table_columns(view_data) {
        let cells = column_cells(view_data, spec.id);
        spans.push((spec.id, x, cells));
        x += cells + 1;
    }
    spans
}

/// Resize handle hit test: the separator cell at a leaf column's right
/// edge (give or take one cell) grabs that column.
fn divider_at(view_data: &ViewData, x: u16) -> Option<ColumnId> {
    for (column, offset, cells) in column_spans(view_data) {
        if column_spec(column).mode == RenderMode::Decoration {
            continue;
        }
        let boundary = offset + cells;
        if x == boundary || x + 1 == boundary {
            return Some(column);
        }
    }
    None
}

/// Maps an x position to the visible-leaf index under it, if any.
fn leaf_at(view_data: &ViewData, x: u16) -> Option<usize> {
    let mut leaf_index = 0usize;
    for (column, offset, cells) in column_spans(view_data) {
        if column_spec(column).mode == RenderMode::Decoration {
            continue;
        }
        if (offset..offset + cells).contains(&x) {
            return Some(leaf_index);
        }
        leaf_index += 1;
    }
    None
}

// ───────────────────────── rendering ─────────────────────────

fn render(frame: &mut ratatui::Frame<'_>, state: &SheetState, view_data: &ViewData) {
    let (banner, grid, footer, status) = screen_chunks(frame.area(), view_data.show_footer);

    let breadcrumb = Paragraph::new("Workspace › Folder 2 › Spreadsheet 3")
        .block(Block::default().title("joblot").borders(Borders::ALL));
    frame.render_widget(breadcrumb, banner);

    render_grid(frame, grid, view_data);

    if let Some(area) = footer {
        let selected = FooterTab::ALL
            .iter()
            .position(|tab| *tab == state.active_footer)
            .unwrap_or(0);
        let titles = FooterTab::ALL
            .iter()
            .map(|tab| format!(" {} ", tab.label()))
            .collect::<Vec<String>>();
        let tabs = Tabs::new(titles)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .select(selected);
        frame.render_widget(tabs, area);
    }

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status_widget, status);

    if view_data.help_visible {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_grid(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let block = Block::default()
        .title(grid_title(view_data))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![header_group_line(view_data), header_leaf_line(view_data)];
    let body_rows = inner.height.saturating_sub(HEADER_LINES) as usize;
    let last = (view_data.scroll_row + body_rows).min(view_data.snapshot.max_rows);
    for slot in view_data.scroll_row..last {
        lines.push(body_line(view_data, slot));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn grid_title(view_data: &ViewData) -> String {
    let leaf_total = sheet_columns()
        .iter()
        .flat_map(|group| group.columns)
        .filter(|spec| spec.mode != RenderMode::Decoration)
        .count();
    format!(
        "Spreadsheet 3 r:{}/{} c:{}/{}",
        view_data.snapshot.rows.len(),
        view_data.snapshot.max_rows,
        view_data.layout.visible_leaves().len(),
        leaf_total,
    )
}

fn group_accent(group_id: &str) -> Style {
    match group_id {
        "financial" => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        "abc" => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        "answer" => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        "extract" => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    }
}

/// Top header band: one span per group, stretched over the group's visible
/// columns. Fully hidden groups disappear with their columns.
fn header_group_line(view_data: &ViewData) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut first = true;
    for group in sheet_columns() {
        let visible: Vec<u16> = group
            .columns
            .iter()
            .filter(|spec| {
                spec.mode == RenderMode::Decoration || view_data.layout.is_visible(spec.id)
            })
            .map(|spec| column_cells(view_data, spec.id))
            .collect();
        if visible.is_empty() {
            continue;
        }
        let width = visible.iter().sum::<u16>() + (visible.len() as u16 - 1);
        if !first {
            spans.push(separator_span());
        }
        first = false;
        spans.push(Span::styled(
            pad_cell(group.label, width),
            group_accent(group.id),
        ));
    }
    Line::from(spans)
}

fn header_leaf_line(view_data: &ViewData) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut first = true;
    for spec in table_columns(view_data) {
        if !first {
            spans.push(separator_span());
        }
        first = false;
        spans.push(Span::styled(
            pad_cell(spec.label, column_cells(view_data, spec.id)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn body_line(view_data: &ViewData, slot: usize) -> Line<'static> {
    let padding = slot >= view_data.snapshot.rows.len();
    let row = view_data.snapshot.rows.get(slot);
    let leaves = view_data.layout.visible_leaves();

    let mut spans: Vec<Span<'static>> = Vec::new();
    let number_cells = column_cells(view_data, ColumnId::RowNumber);
    spans.push(Span::styled(
        pad_cell(
            &format!("{:>width$}", slot + 1, width = number_cells as usize),
            number_cells,
        ),
        Style::default().fg(Color::DarkGray),
    ));

    for (col, spec) in leaves.iter().enumerate() {
        spans.push(separator_span());
        let focused = slot == view_data.focus_row && col == view_data.focus_col;
        let editing = focused && view_data.edit.is_some();
        let text = if editing {
            view_data
                .edit
                .as_ref()
                .map(|edit| edit.buffer.clone())
                .unwrap_or_default()
        } else if padding {
            String::new()
        } else {
            row.map(|record| {
                spec.field
                    .map(|field| record.value(field).display())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
        };
        let mut style = cell_style(spec, row.filter(|_| !padding));
        if focused {
            style = Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            if editing {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
        }
        spans.push(Span::styled(
            pad_cell(&text, column_cells(view_data, spec.id)),
            style,
        ));
    }

    spans.push(separator_span());
    spans.push(Span::styled(
        pad_cell("", column_cells(view_data, ColumnId::AddSlot)),
        Style::default(),
    ));
    Line::from(spans)
}

fn cell_style(spec: &ColumnSpec, row: Option<&Row>) -> Style {
    match spec.id {
        ColumnId::Status => match row.map(|record| record.status) {
            Some(Status::InProcess) => Style::default().fg(Color::Yellow),
            Some(Status::NeedToStart) => Style::default().fg(Color::Gray),
            Some(Status::Complete) => Style::default().fg(Color::Green),
            Some(Status::Blocked) => Style::default().fg(Color::Red),
            None => Style::default(),
        },
        ColumnId::Priority => match row.map(|record| record.priority) {
            Some(Priority::High) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Some(Priority::Medium) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Some(Priority::Low) => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            None => Style::default(),
        },
        ColumnId::Url => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        _ => Style::default(),
    }
}

fn separator_span() -> Span<'static> {
    Span::styled(COLUMN_SEPARATOR.to_owned(), Style::default().fg(Color::DarkGray))
}

fn pad_cell(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

fn status_text(state: &SheetState, view_data: &ViewData) -> String {
    let mode = mode_label(state.mode);
    let default = default_hint(state.mode, view_data);
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {default}"),
        None => format!("{mode} | {default}"),
    }
}

fn default_hint(mode: SheetMode, view_data: &ViewData) -> &'static str {
    match mode {
        SheetMode::Edit => "type to edit · arrows move · esc nav",
        SheetMode::Nav => {
            if focused_column(view_data) == Some(ColumnId::Url) {
                "enter follow · i edit · c hide col · ? help"
            } else {
                "enter/i edit · c hide col · ? help · ctrl-q quit"
            }
        }
    }
}

const fn mode_label(mode: SheetMode) -> &'static str {
    match mode {
        SheetMode::Nav => "nav",
        SheetMode::Edit => "edit",
    }
}

fn help_overlay_text() -> String {
    [
        "arrows / hjkl   move between cells",
        "i or enter      edit the focused cell",
        "esc             back to navigation",
        "enter (URL)     open the link in a browser",
        "c               hide the focused column",
        "[ / ]           shrink / widen the focused column",
        "drag divider    resize; release below threshold hides",
        "double-click    hide the column at the divider",
        "tab / shift-tab switch footer tab",
        "ctrl-d/u pgup/dn page moves",
        "ctrl-q          quit",
    ]
    .join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{
        DOUBLE_CLICK_WINDOW, SheetRuntime, SheetSnapshot, UiOptions, ViewData, body_line,
        cell_text, coerce_focus, divider_at, ensure_focus_visible, grid_title, handle_key_event,
        header_group_line, is_double_activation, leaf_at, move_focus, open_focused_link, pad_cell,
        rebuild_focus_grid, refresh_view_data, status_text, sync_edit_buffer,
    };
    use anyhow::Result;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use joblot_app::{
        ColumnId, Field, NavKey, Priority, Row, SheetCommand, SheetMode, SheetState, Status,
    };
    use ratatui::layout::Rect;
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 200,
        height: 40,
    };

    #[derive(Debug, Default)]
    struct TestRuntime {
        rows: Vec<Row>,
        max_rows: usize,
        edits: Vec<(usize, Field, String)>,
        opened: Vec<String>,
        fail_open: bool,
    }

    impl TestRuntime {
        fn seeded(max_rows: usize) -> Self {
            let row = Row {
                job_request: "Launch campaign".to_owned(),
                submitted: "15-11-2024".to_owned(),
                status: Status::InProcess,
                submitter: "Aisha Patel".to_owned(),
                url: "www.aishapatel.com".to_owned(),
                assigned: "Sophie Choudhury".to_owned(),
                priority: Priority::Medium,
                due_date: "20-11-2024".to_owned(),
                est_value: 6_200_000.0,
            };
            Self {
                rows: vec![row],
                max_rows,
                ..Self::default()
            }
        }
    }

    impl SheetRuntime for TestRuntime {
        fn load_snapshot(&mut self) -> Result<SheetSnapshot> {
            Ok(SheetSnapshot {
                rows: self.rows.clone(),
                max_rows: self.max_rows,
            })
        }

        fn apply_edit(&mut self, row: usize, field: Field, input: &str) -> Result<()> {
            self.edits.push((row, field, input.to_owned()));
            while self.rows.len() <= row {
                self.rows.push(Row::default());
            }
            self.rows[row].apply_text(field, input);
            Ok(())
        }

        fn open_url(&mut self, value: &str) -> Result<()> {
            if self.fail_open {
                anyhow::bail!("no browser available");
            }
            self.opened.push(value.to_owned());
            Ok(())
        }
    }

    fn fresh_view(runtime: &mut TestRuntime) -> ViewData {
        let mut view = ViewData::new(UiOptions::default());
        refresh_view_data(runtime, &mut view).expect("refresh");
        view
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn focus_grid_covers_all_slots_of_input_columns() {
        let mut runtime = TestRuntime::seeded(100);
        let view = fresh_view(&mut runtime);
        assert_eq!(view.focus_grid.rows(), 100);
        assert_eq!(view.focus_grid.cols(), 9);
        // Padding slots register handles too; the badge column never does.
        assert!(view.focus_grid.get(99, 0).is_some());
        assert!(view.focus_grid.get(0, 2).is_none());
    }

    #[test]
    fn arrow_navigation_clamps_at_edges() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let state = SheetState::default();

        move_focus(&state, &mut view, NavKey::Up, SCREEN);
        assert_eq!((view.focus_row, view.focus_col), (0, 0));
        move_focus(&state, &mut view, NavKey::Left, SCREEN);
        assert_eq!((view.focus_row, view.focus_col), (0, 0));
        move_focus(&state, &mut view, NavKey::Down, SCREEN);
        assert_eq!((view.focus_row, view.focus_col), (1, 0));
    }

    #[test]
    fn navigation_onto_the_badge_column_is_a_silent_no_op() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let state = SheetState::default();

        move_focus(&state, &mut view, NavKey::Right, SCREEN);
        assert_eq!(view.focus_col, 1);
        // Column 2 is the status badge: no handle, so the move is swallowed.
        move_focus(&state, &mut view, NavKey::Right, SCREEN);
        assert_eq!(view.focus_col, 1);
    }

    #[test]
    fn hiding_a_column_closes_the_navigation_gap() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let state = SheetState::default();

        view.layout.hide(ColumnId::Status);
        rebuild_focus_grid(&mut view);
        assert_eq!(view.focus_grid.cols(), 8);

        view.focus_col = 1;
        move_focus(&state, &mut view, NavKey::Right, SCREEN);
        // Submitter now sits where the badge used to be.
        assert_eq!(view.focus_col, 2);
        assert_eq!(
            view.layout.visible_leaf_ids()[view.focus_col],
            ColumnId::Submitter
        );
    }

    #[test]
    fn hide_key_shrinks_routing_space_by_one() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        let before = view.focus_grid.cols();
        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Char('c')), SCREEN);
        assert_eq!(view.focus_grid.cols(), before - 1);
        assert!(!view.layout.is_visible(ColumnId::JobRequest));
        assert!(state.status_line.as_deref().is_some_and(|s| s.contains("hidden")));
    }

    #[test]
    fn typing_routes_edits_through_the_runtime() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Char('i')), SCREEN);
        assert_eq!(state.mode, SheetMode::Edit);
        assert_eq!(
            view.edit.as_ref().map(|edit| edit.buffer.clone()),
            Some("Launch campaign".to_owned())
        );

        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Char('!')), SCREEN);
        assert_eq!(
            runtime.edits.last(),
            Some(&(0, Field::JobRequest, "Launch campaign!".to_owned()))
        );

        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Backspace), SCREEN);
        assert_eq!(runtime.rows[0].job_request, "Launch campaign");
    }

    #[test]
    fn editing_a_padding_row_targets_its_own_index() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        view.focus_row = 5;
        view.focus_col = 5; // assigned
        sync_edit_buffer(&state, &mut view);
        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Char('i')), SCREEN);
        assert_eq!(view.edit.as_ref().map(|edit| edit.buffer.as_str()), Some(""));

        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Char('X')), SCREEN);
        assert_eq!(runtime.edits.last(), Some(&(5, Field::Assigned, "X".to_owned())));
        assert_eq!(runtime.rows.len(), 6);
        assert_eq!(view.snapshot.rows.len(), 6);
    }

    #[test]
    fn navigation_keys_never_reach_the_editor() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Char('i')), SCREEN);
        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Down), SCREEN);
        assert_eq!(view.focus_row, 1);
        assert!(runtime.edits.is_empty());
        // Moving reseeds the buffer from the new (padding) cell.
        assert_eq!(view.edit.as_ref().map(|edit| edit.buffer.as_str()), Some(""));
    }

    #[test]
    fn enter_on_the_url_column_opens_the_stored_value() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        view.focus_col = 4; // url
        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Enter), SCREEN);
        assert_eq!(runtime.opened, vec!["www.aishapatel.com".to_owned()]);
        assert_eq!(state.mode, SheetMode::Nav);
    }

    #[test]
    fn enter_on_an_empty_url_cell_reports_no_target() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        view.focus_row = 7;
        view.focus_col = 4;
        open_focused_link(&mut state, &mut runtime, &mut view, &tx);
        assert!(runtime.opened.is_empty());
        assert_eq!(state.status_line.as_deref(), Some("no link target"));
    }

    #[test]
    fn failed_open_surfaces_in_the_status_line() {
        let mut runtime = TestRuntime::seeded(100);
        runtime.fail_open = true;
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        view.focus_col = 4;
        open_focused_link(&mut state, &mut runtime, &mut view, &tx);
        assert!(
            state
                .status_line
                .as_deref()
                .is_some_and(|s| s.contains("open link failed"))
        );
    }

    #[test]
    fn enter_elsewhere_starts_an_edit() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        let (tx, _rx) = mpsc::channel();

        handle_key_event(&mut state, &mut runtime, &mut view, &tx, key(KeyCode::Enter), SCREEN);
        assert_eq!(state.mode, SheetMode::Edit);
    }

    #[test]
    fn drag_release_below_threshold_hides_the_column() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);

        view.layout.resize(ColumnId::Submitted, 20);
        assert!(view.layout.is_visible(ColumnId::Submitted));
        assert!(view.layout.finish_resize(ColumnId::Submitted));
        rebuild_focus_grid(&mut view);
        coerce_focus(&mut view);
        assert_eq!(view.focus_grid.cols(), 8);
        assert!(!view.layout.visible_leaf_ids().contains(&ColumnId::Submitted));
    }

    #[test]
    fn double_activation_detection_requires_same_divider_twice() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        let start = Instant::now();

        assert!(!is_double_activation(&mut view, ColumnId::Url, start));
        assert!(is_double_activation(
            &mut view,
            ColumnId::Url,
            start + Duration::from_millis(100)
        ));
        // Consumed: a third click starts a new cycle.
        assert!(!is_double_activation(
            &mut view,
            ColumnId::Url,
            start + Duration::from_millis(200)
        ));
        assert!(!is_double_activation(
            &mut view,
            ColumnId::Url,
            start + Duration::from_millis(200) + DOUBLE_CLICK_WINDOW * 2
        ));
    }

    #[test]
    fn divider_hit_test_matches_column_edges() {
        let mut runtime = TestRuntime::seeded(100);
        let view = fresh_view(&mut runtime);

        // Row gutter: 30/7 -> 4 cells, then a separator; job request spans
        // 20 cells, so its right edge sits at x = 4 + 1 + 20.
        assert_eq!(divider_at(&view, 25), Some(ColumnId::JobRequest));
        assert_eq!(divider_at(&view, 4), None);
        assert_eq!(leaf_at(&view, 5), Some(0));
        assert_eq!(leaf_at(&view, 2), None);
    }

    #[test]
    fn scroll_follows_focus() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);

        view.focus_row = 50;
        ensure_focus_visible(&mut view, 20);
        assert_eq!(view.scroll_row, 31);

        view.focus_row = 10;
        ensure_focus_visible(&mut view, 20);
        assert_eq!(view.scroll_row, 10);
    }

    #[test]
    fn coerce_focus_slides_off_vanished_columns() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);

        view.focus_col = 8; // est. value, last leaf
        view.layout.hide(ColumnId::EstValue);
        rebuild_focus_grid(&mut view);
        coerce_focus(&mut view);
        assert_eq!(view.focus_col, 7);
        assert_eq!(
            view.layout.visible_leaf_ids()[view.focus_col],
            ColumnId::DueDate
        );
    }

    #[test]
    fn grid_title_counts_rows_and_columns() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);
        assert_eq!(grid_title(&view), "Spreadsheet 3 r:1/100 c:9/9");

        view.layout.hide(ColumnId::Url);
        assert_eq!(grid_title(&view), "Spreadsheet 3 r:1/100 c:8/9");
    }

    #[test]
    fn group_band_drops_fully_hidden_groups() {
        let mut runtime = TestRuntime::seeded(100);
        let mut view = fresh_view(&mut runtime);

        let line = header_group_line(&view);
        let text: String = line.spans.iter().map(|span| span.content.clone()).collect();
        assert!(text.contains("Q3 Financial Overview"));

        for id in [
            ColumnId::JobRequest,
            ColumnId::Submitted,
            ColumnId::Status,
            ColumnId::Submitter,
        ] {
            view.layout.hide(id);
        }
        let line = header_group_line(&view);
        let text: String = line.spans.iter().map(|span| span.content.clone()).collect();
        assert!(!text.contains("Q3"));
        assert!(text.contains("ABC"));
    }

    #[test]
    fn padding_rows_render_numbered_but_empty() {
        let mut runtime = TestRuntime::seeded(100);
        let view = fresh_view(&mut runtime);

        let line = body_line(&view, 40);
        let text: String = line.spans.iter().map(|span| span.content.clone()).collect();
        assert!(text.trim_start().starts_with("41"));
        // No badge text leaks into an unpopulated slot.
        assert!(!text.contains("Need to start"));
    }

    #[test]
    fn populated_rows_render_cell_values() {
        let mut runtime = TestRuntime::seeded(100);
        let view = fresh_view(&mut runtime);

        let line = body_line(&view, 0);
        let text: String = line.spans.iter().map(|span| span.content.clone()).collect();
        assert!(text.contains("Launch campaign"));
        assert!(text.contains("In-process"));
        assert!(text.contains("6200000"));
    }

    #[test]
    fn cell_text_defaults_past_data_length() {
        let mut runtime = TestRuntime::seeded(100);
        let view = fresh_view(&mut runtime);
        assert_eq!(cell_text(&view, 0, ColumnId::Url), "www.aishapatel.com");
        assert_eq!(cell_text(&view, 41, ColumnId::Url), "");
    }

    #[test]
    fn pad_cell_pads_and_truncates() {
        assert_eq!(pad_cell("abc", 5), "abc  ");
        assert_eq!(pad_cell("abcdef", 4), "abcd");
        assert_eq!(pad_cell("", 3), "   ");
    }

    #[test]
    fn status_text_folds_in_the_status_line() {
        let mut runtime = TestRuntime::seeded(100);
        let view = fresh_view(&mut runtime);
        let mut state = SheetState::default();
        assert!(status_text(&state, &view).starts_with("nav | "));

        state.dispatch(SheetCommand::SetStatus("URL hidden (8 visible)".to_owned()));
        assert!(status_text(&state, &view).contains("URL hidden"));
    }
}
