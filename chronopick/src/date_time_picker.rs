//! The date & time picker panel and its session state machine.
//!
//! ## Usage
//!
//! Drives the date → hour → minute selection flow. Embed the panel
//! directly with [`date_time_picker`], or let
//! [`date_time_field`](crate::date_time_field::date_time_field) own it.
use std::time::{Duration, Instant};

use derive_setters::Setters;
use tessera_ui::{
    Color, DimensionValue, Dp, Modifier, State, remember, tessera, use_context, with_frame_nanos,
};

use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    boxed::{BoxedArgs, boxed},
    column::{ColumnArgs, column},
    flow_row::{FlowRowArgs, flow_row},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::spacer,
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

use crate::{
    calendar::{
        CalendarDate, CalendarDateTime, GRID_COLUMNS, GridCell, WEEKDAY_LABELS, YearMonth,
        build_month_grid, format_field_value, format_headline, parse_date_time,
    },
    dial::{DIAL_SIZE, DialTick, TICK_SIZE, hour_ticks, minute_ticks},
};

const DATE_CELL_SIZE: Dp = Dp(40.0);
const DATE_CELL_RADIUS: Dp = Dp(20.0);
const DATE_GRID_SPACING: Dp = Dp(4.0);
const HEADER_PADDING: Dp = Dp(12.0);
const NAV_BUTTON_SIZE: Dp = Dp(28.0);

/// Delay between a selection click and the next phase becoming visible.
///
/// The value update itself is synchronous; the delay only gates when the
/// following selector appears.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(350);

/// The picker's current step in the date → hour → minute sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    /// The picker is hidden. Reopening restarts at [`PickerPhase::DateSelect`].
    Closed,
    /// The calendar month grid is shown.
    DateSelect,
    /// The 24-tick hour dial is shown.
    HourSelect,
    /// The 12-tick minute dial is shown.
    MinuteSelect,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    target: PickerPhase,
    since: Instant,
}

/// State of one picker session.
///
/// Holds the current date-time value, the visible grid month, the phase,
/// and at most one pending delayed phase transition. A newer selection
/// replaces a pending transition, so a stale delayed transition can never
/// fire after the flow has moved on.
pub struct DateTimePickerState {
    value: CalendarDateTime,
    visible_month: YearMonth,
    phase: PickerPhase,
    pending: Option<PendingTransition>,
    transition_delay: Duration,
    written_value: Option<String>,
}

impl DateTimePickerState {
    /// Creates a closed session with the given transition delay.
    pub fn new(transition_delay: Duration) -> Self {
        let value = CalendarDateTime::now_utc();
        Self {
            value,
            visible_month: YearMonth::of(value.date()),
            phase: PickerPhase::Closed,
            pending: None,
            transition_delay,
            written_value: None,
        }
    }

    /// Returns the session's current date-time value.
    pub fn value(&self) -> CalendarDateTime {
        self.value
    }

    /// Returns the month the calendar grid is anchored at.
    pub fn visible_month(&self) -> YearMonth {
        self.visible_month
    }

    /// Returns the current phase.
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// Returns true while the picker is in any selection phase.
    pub fn is_open(&self) -> bool {
        self.phase != PickerPhase::Closed
    }

    /// Returns the value last written to the owning field, if any.
    pub fn written_value(&self) -> Option<&str> {
        self.written_value.as_deref()
    }

    /// Returns true while a delayed phase transition is pending.
    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// Opens the session at [`PickerPhase::DateSelect`] with the given value.
    pub fn open_with_value(&mut self, value: CalendarDateTime) {
        self.value = value;
        self.visible_month = YearMonth::of(value.date());
        self.phase = PickerPhase::DateSelect;
        self.pending = None;
    }

    /// Opens the session, seeding the value from the field's text.
    ///
    /// The text is parsed as `YYYY-MM-DD HH:MM` (`T` separator and a
    /// seconds suffix tolerated). Empty or unparsable text falls back to
    /// `fallback` — a deliberate best-effort default, never an error.
    pub fn open_seeded(&mut self, text: &str, fallback: CalendarDateTime) {
        let value = parse_date_time(text).unwrap_or_else(|reason| {
            tracing::debug!(?reason, "seeding picker from the current moment");
            fallback
        });
        self.open_with_value(value);
    }

    /// Closes the picker. The value and written text are retained.
    pub fn close(&mut self) {
        self.phase = PickerPhase::Closed;
        self.pending = None;
    }

    /// Applies a day-cell click during [`PickerPhase::DateSelect`].
    ///
    /// Sets the value's date, writes the field value, and schedules the
    /// delayed transition to [`PickerPhase::HourSelect`]. The visible
    /// month stays untouched, even when an outer-month cell is selected.
    pub fn select_date(&mut self, date: CalendarDate, now: Instant) -> bool {
        if self.phase != PickerPhase::DateSelect {
            return false;
        }
        self.value = self.value.with_date(date);
        self.write_value();
        self.schedule(PickerPhase::HourSelect, now);
        true
    }

    /// Applies an hour-tick click during [`PickerPhase::HourSelect`].
    pub fn select_hour(&mut self, hour: u8, now: Instant) -> bool {
        if self.phase != PickerPhase::HourSelect {
            return false;
        }
        self.value = self.value.with_hour(hour);
        self.write_value();
        self.schedule(PickerPhase::MinuteSelect, now);
        true
    }

    /// Applies a minute-tick click during [`PickerPhase::MinuteSelect`].
    ///
    /// The final step closes the picker immediately, without a delay.
    pub fn select_minute(&mut self, minute: u8, _now: Instant) -> bool {
        if self.phase != PickerPhase::MinuteSelect {
            return false;
        }
        self.value = self.value.with_minute(minute);
        self.write_value();
        self.close();
        true
    }

    /// Moves the visible month forward, keeping phase and value.
    pub fn next_month(&mut self) {
        self.visible_month = self.visible_month.add_months(1);
    }

    /// Moves the visible month backward, keeping phase and value.
    pub fn previous_month(&mut self) {
        self.visible_month = self.visible_month.add_months(-1);
    }

    /// Completes the pending transition once its delay has elapsed.
    ///
    /// Returns true when a phase change was applied.
    pub fn resolve_pending(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now.duration_since(pending.since) < self.transition_delay {
            return false;
        }
        self.phase = pending.target;
        self.pending = None;
        true
    }

    fn schedule(&mut self, target: PickerPhase, now: Instant) {
        // Replaces any stale pending transition; only one may be in flight.
        self.pending = Some(PendingTransition { target, since: now });
    }

    fn write_value(&mut self) {
        self.written_value = Some(format_field_value(self.value));
    }
}

impl Default for DateTimePickerState {
    fn default() -> Self {
        Self::new(TRANSITION_DELAY)
    }
}

/// Configuration options for [`date_time_picker`].
///
/// Initial-state fields apply only when the picker owns its state.
#[derive(Clone, Setters)]
pub struct DateTimePickerArgs {
    /// Modifier chain applied to the panel.
    pub modifier: Modifier,
    /// Initial value for an internally-owned state.
    #[setters(strip_option)]
    pub initial_value: Option<CalendarDateTime>,
    /// Delay applied between selection steps.
    pub transition_delay: Duration,
    /// Whether the weekday label row is rendered above the grid.
    pub show_weekday_labels: bool,
}

impl Default for DateTimePickerArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            initial_value: None,
            transition_delay: TRANSITION_DELAY,
            show_weekday_labels: true,
        }
    }
}

/// # date_time_picker
///
/// Render a date & time picker panel that owns its session state.
///
/// ## Usage
///
/// Use when embedding the panel directly, without an owning text field.
///
/// ## Parameters
///
/// - `args` — panel configuration; see [`DateTimePickerArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # use tessera_components::theme::{MaterialTheme, material_theme};
/// # #[tessera]
/// # fn component() {
/// use chronopick::date_time_picker::{DateTimePickerArgs, date_time_picker};
///
/// material_theme(MaterialTheme::default, || {
///     date_time_picker(DateTimePickerArgs::default());
/// });
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_time_picker(args: impl Into<DateTimePickerArgs>) {
    let args: DateTimePickerArgs = args.into();
    let initial_value = args.initial_value;
    let transition_delay = args.transition_delay;

    let state = remember(move || {
        let mut state = DateTimePickerState::new(transition_delay);
        state.open_with_value(initial_value.unwrap_or_else(CalendarDateTime::now_utc));
        state
    });
    date_time_picker_with_state(args, state);
}

/// # date_time_picker_with_state
///
/// Render a date & time picker panel using an external session state.
///
/// ## Usage
///
/// Use when the host needs to observe or drive the selection flow, for
/// example from an owning text field.
///
/// ## Parameters
///
/// - `args` — panel configuration; see [`DateTimePickerArgs`].
/// - `state` — the [`DateTimePickerState`] session.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # use tessera_components::theme::{MaterialTheme, material_theme};
/// # #[tessera]
/// # fn component() {
/// use tessera_ui::remember;
/// use chronopick::calendar::CalendarDateTime;
/// use chronopick::date_time_picker::{
///     DateTimePickerArgs, DateTimePickerState, date_time_picker_with_state,
/// };
///
/// let state = remember(|| {
///     let mut state = DateTimePickerState::default();
///     state.open_with_value(CalendarDateTime::now_utc());
///     state
/// });
/// material_theme(MaterialTheme::default, || {
///     date_time_picker_with_state(DateTimePickerArgs::default(), state);
/// });
/// assert!(state.with(|s| s.is_open()));
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_time_picker_with_state(
    args: impl Into<DateTimePickerArgs>,
    state: State<DateTimePickerState>,
) {
    let args: DateTimePickerArgs = args.into();

    state.with_mut(|s| s.resolve_pending(Instant::now()));
    if state.with(|s| s.has_pending_transition()) {
        let state_for_frame = state;
        with_frame_nanos(move |_| {
            state_for_frame.with_mut(|s| s.resolve_pending(Instant::now()));
        });
    }

    let (phase, value_date, visible_month) =
        state.with(|s| (s.phase(), s.value().date(), s.visible_month()));
    if phase == PickerPhase::Closed {
        return;
    }

    let show_weekday_labels = args.show_weekday_labels;
    column(
        ColumnArgs::default()
            .modifier(args.modifier)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(move || picker_header(phase, visible_month, state));

            match phase {
                PickerPhase::DateSelect => {
                    if show_weekday_labels {
                        scope.child(weekday_labels_row);
                    }
                    scope.child(move || date_grid(value_date, visible_month, state));
                }
                PickerPhase::HourSelect => {
                    scope.child(move || hour_dial(state));
                }
                PickerPhase::MinuteSelect => {
                    scope.child(move || minute_dial(state));
                }
                PickerPhase::Closed => {}
            }
        },
    );
}

fn picker_header(phase: PickerPhase, visible_month: YearMonth, state: State<DateTimePickerState>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let headline = match phase {
        PickerPhase::DateSelect => format_headline(visible_month),
        PickerPhase::HourSelect => "Select Hour".to_string(),
        PickerPhase::MinuteSelect => "Select Minutes".to_string(),
        PickerPhase::Closed => String::new(),
    };

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width().padding_all(HEADER_PADDING))
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            // The month switchers exist only while the calendar is shown.
            if phase == PickerPhase::DateSelect {
                scope.child(move || {
                    nav_button("<", move || {
                        state.with_mut(|s| s.previous_month());
                    });
                });
            }

            scope.child(move || {
                text(
                    TextArgs::default()
                        .text(headline.clone())
                        .size(typography.title_medium.font_size)
                        .color(scheme.on_surface),
                );
            });

            if phase == PickerPhase::DateSelect {
                scope.child(move || {
                    nav_button(">", move || {
                        state.with_mut(|s| s.next_month());
                    });
                });
            }
        },
    );
}

fn weekday_labels_row() {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let label_color = theme.color_scheme.on_surface_variant;
    let label_size = theme.typography.label_small.font_size;

    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(GRID_COLUMNS)
            .item_spacing(DATE_GRID_SPACING),
        move |scope| {
            for label in WEEKDAY_LABELS {
                scope.child(move || {
                    surface(
                        SurfaceArgs::default()
                            .modifier(Modifier::new().size(DATE_CELL_SIZE, DATE_CELL_SIZE))
                            .style(Color::TRANSPARENT.into())
                            .content_alignment(Alignment::Center),
                        move || {
                            text(
                                TextArgs::default()
                                    .text(label)
                                    .size(label_size)
                                    .color(label_color),
                            );
                        },
                    );
                });
            }
        },
    );
}

fn date_grid(value_date: CalendarDate, visible_month: YearMonth, state: State<DateTimePickerState>) {
    let grid = build_month_grid(visible_month);

    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(GRID_COLUMNS)
            .item_spacing(DATE_GRID_SPACING)
            .line_spacing(DATE_GRID_SPACING),
        move |scope| {
            for cell in grid {
                scope.child(move || match cell {
                    GridCell::Day { date, outer_month } => {
                        day_cell(date, outer_month, date == value_date, state);
                    }
                    GridCell::Blank => {
                        spacer(Modifier::new().size(DATE_CELL_SIZE, DATE_CELL_SIZE));
                    }
                });
            }
        },
    );
}

fn day_cell(
    date: CalendarDate,
    outer_month: bool,
    selected: bool,
    state: State<DateTimePickerState>,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let text_color = if selected {
        scheme.on_primary
    } else if outer_month {
        scheme.on_surface_variant
    } else {
        scheme.on_surface
    };
    let style = if selected {
        SurfaceStyle::Filled {
            color: scheme.primary,
        }
    } else {
        SurfaceStyle::Filled {
            color: Color::TRANSPARENT,
        }
    };

    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(DATE_CELL_SIZE, DATE_CELL_SIZE))
            .style(style)
            .shape(Shape::rounded_rectangle(DATE_CELL_RADIUS))
            .content_alignment(Alignment::Center)
            .accessibility_label(crate::calendar::format_date_key(date))
            .on_click(move || {
                state.with_mut(|s| s.select_date(date, Instant::now()));
            }),
        move || {
            text(
                TextArgs::default()
                    .text(date.day().to_string())
                    .size(typography.body_medium.font_size)
                    .color(text_color),
            );
        },
    );
}

fn hour_dial(state: State<DateTimePickerState>) {
    dial_view(hour_ticks(), move |hour| {
        state.with_mut(|s| s.select_hour(hour, Instant::now()));
    });
}

fn minute_dial(state: State<DateTimePickerState>) {
    dial_view(minute_ticks(), move |minute| {
        state.with_mut(|s| s.select_minute(minute, Instant::now()));
    });
}

fn dial_view(ticks: Vec<DialTick>, on_pick: impl Fn(u8) + Send + Sync + Clone + 'static) {
    boxed(
        BoxedArgs::default().modifier(Modifier::new().size(DIAL_SIZE, DIAL_SIZE)),
        move |scope| {
            for tick in ticks {
                let on_pick = on_pick.clone();
                scope.child(move || dial_tick_view(tick.clone(), on_pick.clone()));
            }
        },
    );
}

fn dial_tick_view(tick: DialTick, on_pick: impl Fn(u8) + Send + Sync + 'static) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let (x, y) = tick.offset();
    let value = tick.value;
    let label_style = if tick.prominent {
        typography.body_medium
    } else {
        typography.label_small
    };

    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().offset(x, y).size(TICK_SIZE, TICK_SIZE))
            .style(Color::TRANSPARENT.into())
            .shape(Shape::rounded_rectangle(Dp(TICK_SIZE.0 / 2.0)))
            .content_alignment(Alignment::Center)
            .on_click(move || on_pick(value)),
        move || {
            text(
                TextArgs::default()
                    .text(tick.label.clone())
                    .size(label_style.font_size)
                    .color(scheme.on_surface),
            );
        },
    );
}

fn nav_button(label: &'static str, on_click: impl Fn() + Send + Sync + 'static) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .on_click(on_click),
        move || {
            text(
                TextArgs::default()
                    .text(label)
                    .size(typography.body_medium.font_size)
                    .color(scheme.on_surface),
            );
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::format_date_key;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn seeded(text: &str) -> DateTimePickerState {
        let mut state = DateTimePickerState::default();
        let fallback =
            CalendarDateTime::new(date(2024, 2, 10), 9, 15).unwrap();
        state.open_seeded(text, fallback);
        state
    }

    #[test]
    fn full_selection_flow_writes_the_expected_value() {
        let mut state = seeded("");
        let t0 = Instant::now();

        assert!(state.select_date(date(2024, 2, 15), t0));
        assert_eq!(state.written_value(), Some("2024-02-15 09:15"));
        assert!(state.resolve_pending(t0 + TRANSITION_DELAY));
        assert_eq!(state.phase(), PickerPhase::HourSelect);

        assert!(state.select_hour(14, t0 + TRANSITION_DELAY));
        assert_eq!(state.written_value(), Some("2024-02-15 14:15"));
        assert!(state.resolve_pending(t0 + TRANSITION_DELAY * 2));
        assert_eq!(state.phase(), PickerPhase::MinuteSelect);

        assert!(state.select_minute(30, t0 + TRANSITION_DELAY * 2));
        assert_eq!(state.written_value(), Some("2024-02-15 14:30"));
        assert_eq!(state.phase(), PickerPhase::Closed);
        assert!(!state.has_pending_transition());
    }

    #[test]
    fn empty_or_unparsable_text_seeds_from_the_fallback() {
        for text in ["", "   ", "soon", "2024-99-99 27:61"] {
            let state = seeded(text);
            assert_eq!(state.phase(), PickerPhase::DateSelect);
            assert_eq!(state.value().date(), date(2024, 2, 10));
            assert_eq!(state.value().hour(), 9);
            assert_eq!(state.value().minute(), 15);
        }
    }

    #[test]
    fn valid_text_seeds_the_session() {
        let state = seeded("2023-11-05T21:40:10");
        assert_eq!(state.value().date(), date(2023, 11, 5));
        assert_eq!(state.value().hour(), 21);
        assert_eq!(state.value().minute(), 40);
        assert_eq!(
            state.visible_month(),
            YearMonth::new(2023, 11).unwrap()
        );
    }

    #[test]
    fn transition_fires_only_after_the_delay() {
        let mut state = seeded("");
        let t0 = Instant::now();
        state.select_date(date(2024, 2, 15), t0);

        assert!(!state.resolve_pending(t0));
        assert!(!state.resolve_pending(t0 + Duration::from_millis(100)));
        assert_eq!(state.phase(), PickerPhase::DateSelect);
        assert!(state.resolve_pending(t0 + Duration::from_millis(350)));
        assert_eq!(state.phase(), PickerPhase::HourSelect);
    }

    #[test]
    fn a_new_selection_cancels_the_stale_pending_transition() {
        let mut state = seeded("");
        let t0 = Instant::now();

        state.select_date(date(2024, 2, 15), t0);
        state.select_date(date(2024, 2, 16), t0 + Duration::from_millis(200));

        // The first click's deadline passes without a phase change.
        assert!(!state.resolve_pending(t0 + Duration::from_millis(360)));
        assert_eq!(state.phase(), PickerPhase::DateSelect);

        assert!(state.resolve_pending(t0 + Duration::from_millis(551)));
        assert_eq!(state.phase(), PickerPhase::HourSelect);
        assert_eq!(state.value().date(), date(2024, 2, 16));
    }

    #[test]
    fn month_navigation_keeps_phase_and_value() {
        let mut state = seeded("2024-02-15 14:30");
        let starting_month = state.visible_month();

        state.next_month();
        assert_eq!(state.visible_month(), YearMonth::new(2024, 3).unwrap());
        state.previous_month();
        assert_eq!(state.visible_month(), starting_month);
        assert_eq!(state.phase(), PickerPhase::DateSelect);
        assert_eq!(state.value().date(), date(2024, 2, 15));
    }

    #[test]
    fn outer_month_selection_does_not_recenter_the_grid() {
        let mut state = seeded("2024-02-15 14:30");
        // January 31st appears as a leading outer-month cell of February.
        assert!(state.select_date(date(2024, 1, 31), Instant::now()));
        assert_eq!(state.value().date(), date(2024, 1, 31));
        assert_eq!(state.visible_month(), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn closing_during_hour_select_keeps_the_written_value() {
        let mut state = seeded("");
        let t0 = Instant::now();
        state.select_date(date(2024, 2, 15), t0);
        state.resolve_pending(t0 + TRANSITION_DELAY);
        assert_eq!(state.phase(), PickerPhase::HourSelect);

        let written = state.written_value().map(str::to_string);
        state.close();
        assert!(!state.is_open());
        assert!(!state.has_pending_transition());
        assert_eq!(state.written_value().map(str::to_string), written);
    }

    #[test]
    fn reopening_restarts_at_date_select_with_the_written_seed() {
        let mut state = seeded("");
        let t0 = Instant::now();
        state.select_date(date(2024, 2, 15), t0);
        state.resolve_pending(t0 + TRANSITION_DELAY);
        state.close();

        let written = state.written_value().unwrap().to_string();
        let fallback = CalendarDateTime::now_utc();
        state.open_seeded(&written, fallback);
        assert_eq!(state.phase(), PickerPhase::DateSelect);
        assert_eq!(state.value().date(), date(2024, 2, 15));
    }

    #[test]
    fn selections_are_ignored_outside_their_phase() {
        let mut state = seeded("2024-02-15 14:30");
        let now = Instant::now();

        assert!(!state.select_hour(5, now));
        assert!(!state.select_minute(5, now));
        assert_eq!(state.written_value(), None);

        state.close();
        assert!(!state.select_date(date(2024, 2, 16), now));
        assert_eq!(state.value().date(), date(2024, 2, 15));
    }

    #[test]
    fn selected_cell_matches_the_grid_date_key() {
        let state = seeded("2024-02-15 14:30");
        let grid = build_month_grid(state.visible_month());
        let selected: Vec<_> = grid
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Day { date, .. } if *date == state.value().date() => Some(*date),
                _ => None,
            })
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(format_date_key(selected[0]), "2024-02-15");
    }
}
