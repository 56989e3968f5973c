//! A text field with an attached date & time picker.
//!
//! ## Usage
//!
//! Drop-in field for forms: clicking the field opens the picker panel
//! directly below it, and every selection step writes the canonical
//! `YYYY-MM-DD HH:MM` value back into the field.
use std::time::Duration;

use derive_setters::Setters;
use tessera_ui::{
    Callback, ComputedData, CursorEventContent, DimensionValue, Dp, Modifier, PressKeyEventType,
    Px, PxPosition, State, remember, tessera, use_context, winit,
};

use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    shape_def::Shape,
    spacer::spacer,
    surface::{SurfaceArgs, surface},
    text_field::{TextFieldArgs, TextFieldLineLimit, text_field_with_controller},
    text_input::TextInputController,
    theme::MaterialTheme,
};

use crate::{
    calendar::CalendarDateTime,
    date_time_picker::{
        DateTimePickerArgs, DateTimePickerState, TRANSITION_DELAY, date_time_picker_with_state,
    },
    registry::{FieldKind, PickerFieldId, PickerRegistry},
};

/// Defaults for [`date_time_field`].
pub struct DateTimeFieldDefaults;

impl DateTimeFieldDefaults {
    /// Minimum width of the input field.
    pub const FIELD_MIN_WIDTH: Dp = Dp(260.0);
    /// Gap between the field and the opened panel.
    pub const PANEL_GAP: Dp = Dp(4.0);
    /// Corner radius of the panel surface.
    pub const PANEL_RADIUS: Dp = Dp(12.0);
    /// Padding inside the panel surface.
    pub const PANEL_PADDING: Dp = Dp(8.0);
    /// Shadow elevation of the panel surface.
    pub const PANEL_ELEVATION: Dp = Dp(3.0);
}

/// Configuration options for [`date_time_field`].
#[derive(Clone, Setters)]
pub struct DateTimeFieldArgs {
    /// Modifier chain applied to the field-and-panel column.
    pub modifier: Modifier,
    /// Optional floating label for the text field.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Optional placeholder shown while the field is empty.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
    /// Whether the field reacts to input.
    pub enabled: bool,
    /// Delay between selection steps of the picker.
    pub transition_delay: Duration,
    /// Whether the weekday label row is rendered above the grid.
    pub show_weekday_labels: bool,
    /// Optional registry this field attaches to on first composition.
    #[setters(skip)]
    pub registry: Option<State<PickerRegistry>>,
}

impl Default for DateTimeFieldArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            label: None,
            placeholder: Some("YYYY-MM-DD HH:MM".to_string()),
            enabled: true,
            transition_delay: TRANSITION_DELAY,
            show_weekday_labels: true,
            registry: None,
        }
    }
}

impl DateTimeFieldArgs {
    /// Attaches the field to a host-owned registry.
    pub fn registry(mut self, registry: State<PickerRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }
}

/// # date_time_field
///
/// Render a text field that opens a date & time picker when clicked.
///
/// ## Usage
///
/// Use in forms where users enter a date and time. Typed text is kept:
/// the next open parses the field content and seeds the picker from it,
/// falling back to the current moment when the text is empty or not a
/// date.
///
/// ## Parameters
///
/// - `args` — field configuration; see [`DateTimeFieldArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # use tessera_components::theme::{MaterialTheme, material_theme};
/// # #[tessera]
/// # fn component() {
/// use chronopick::date_time_field::{DateTimeFieldArgs, date_time_field};
///
/// material_theme(MaterialTheme::default, || {
///     date_time_field(DateTimeFieldArgs::default().label("Starts at"));
/// });
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_time_field(args: impl Into<DateTimeFieldArgs>) {
    let args: DateTimeFieldArgs = args.into();
    let transition_delay = args.transition_delay;
    let state = remember(move || DateTimePickerState::new(transition_delay));
    date_time_field_with_state(args, state);
}

/// # date_time_field_with_state
///
/// Render a date & time field using an external picker session state.
///
/// ## Usage
///
/// Use when the host observes the selected value, for example to show it
/// elsewhere or to prefill the session.
///
/// ## Parameters
///
/// - `args` — field configuration; see [`DateTimeFieldArgs`].
/// - `state` — the [`DateTimePickerState`] session owned by the host.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # use tessera_components::theme::{MaterialTheme, material_theme};
/// # #[tessera]
/// # fn component() {
/// use tessera_ui::remember;
/// use chronopick::date_time_field::{DateTimeFieldArgs, date_time_field_with_state};
/// use chronopick::date_time_picker::DateTimePickerState;
///
/// let state = remember(DateTimePickerState::default);
/// material_theme(MaterialTheme::default, || {
///     date_time_field_with_state(DateTimeFieldArgs::default(), state);
/// });
/// assert!(state.with(|s| !s.is_open()));
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_time_field_with_state(
    args: impl Into<DateTimeFieldArgs>,
    state: State<DateTimePickerState>,
) {
    let args: DateTimeFieldArgs = args.into();

    let mut field_args = TextFieldArgs::filled()
        .min_width(DateTimeFieldDefaults::FIELD_MIN_WIDTH)
        .line_limit(TextFieldLineLimit::SingleLine)
        .enabled(args.enabled);
    if let Some(label) = args.label.clone() {
        field_args = field_args.label(label);
    }
    if let Some(placeholder) = args.placeholder.clone() {
        field_args = field_args.placeholder(placeholder);
    }
    let font_size = field_args.font_size;
    let line_height = field_args.line_height;

    let input_controller = remember(|| TextInputController::new(font_size, line_height));
    let field_text = remember(String::new);
    let synced_value = remember(String::new);

    // Attach to the host registry once, on first composition. A text
    // field is always text-like, so this cannot be rejected; the result
    // is still checked so a rejection registers nothing.
    let registry = args.registry;
    let field_id: State<Option<PickerFieldId>> = remember(move || {
        let registry = registry?;
        let dismiss = Callback::new(move || {
            state.with_mut(|s| s.close());
        });
        registry
            .with_mut(|r| r.attach(FieldKind::Text, dismiss))
            .inspect_err(|error| tracing::warn!(%error, "field left unattached"))
            .ok()
    });

    // Mirror picker writes into the field, preserving anything the user
    // typed since the last write.
    let written = state.with(|s| s.written_value().map(str::to_string));
    if let Some(written) = written
        && synced_value.with(|synced| synced.as_str() != written)
    {
        input_controller.with_mut(|c| c.set_text(&written));
        field_text.set(written.clone());
        synced_value.set(written);
    }

    field_args = field_args.on_change(move |text| {
        field_text.set(text.clone());
        text
    });

    let enabled = args.enabled;
    input_handler(move |input| {
        if !enabled {
            return;
        }
        let is_open = state.with(|s| s.is_open());
        let pressed = input.cursor_events.iter().any(|event| {
            matches!(
                event.content,
                CursorEventContent::Pressed(PressKeyEventType::Left)
            )
        });

        if pressed {
            match input.cursor_position_rel {
                Some(position) if is_position_in_component(input.computed_data, position) => {
                    if !is_open {
                        if let (Some(registry), Some(id)) = (registry, field_id.get()) {
                            registry.with(|r| r.dismiss_others(id));
                        }
                        let seed = field_text.get();
                        state.with_mut(|s| {
                            s.open_seeded(&seed, CalendarDateTime::now_utc());
                        });
                    }
                }
                // A press anywhere else while open closes the picker.
                Some(_) if is_open => {
                    state.with_mut(|s| s.close());
                }
                _ => {}
            }
        }

        for event in input.keyboard_events.iter() {
            if event.state == winit::event::ElementState::Pressed
                && matches!(
                    event.physical_key,
                    winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
                )
                && is_open
            {
                state.with_mut(|s| s.close());
            }
        }
    });

    let is_open = state.with(|s| s.is_open());
    let show_weekday_labels = args.show_weekday_labels;
    let transition_delay = args.transition_delay;
    column(ColumnArgs::default().modifier(args.modifier), move |scope| {
        let field_args = field_args.clone();
        scope.child(move || {
            text_field_with_controller(field_args.clone(), input_controller);
        });

        if is_open {
            scope.child(|| spacer(Modifier::new().height(DateTimeFieldDefaults::PANEL_GAP)));
            scope.child(move || {
                panel_surface(state, show_weekday_labels, transition_delay);
            });
        }
    });
}

fn panel_surface(
    state: State<DateTimePickerState>,
    show_weekday_labels: bool,
    transition_delay: Duration,
) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;

    surface(
        SurfaceArgs::default()
            .style(scheme.surface_container_high.into())
            .shape(Shape::rounded_rectangle(DateTimeFieldDefaults::PANEL_RADIUS))
            .elevation(DateTimeFieldDefaults::PANEL_ELEVATION)
            .block_input(true),
        move || {
            Modifier::new()
                .padding_all(DateTimeFieldDefaults::PANEL_PADDING)
                .run(move || {
                    date_time_picker_with_state(
                        DateTimePickerArgs::default()
                            .show_weekday_labels(show_weekday_labels)
                            .transition_delay(transition_delay),
                        state,
                    );
                });
        },
    );
}

fn is_position_in_component(size: ComputedData, position: PxPosition) -> bool {
    position.x >= Px::ZERO
        && position.x <= size.width
        && position.y >= Px::ZERO
        && position.y <= size.height
}
