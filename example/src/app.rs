use chronopick::{
    date_time_field::{DateTimeFieldArgs, date_time_field_with_state},
    date_time_picker::DateTimePickerState,
    registry::{FieldKind, PickerRegistry},
};
use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    spacer::spacer,
    surface::{SurfaceArgs, surface},
    text::{TextArgs, text},
    theme::{MaterialTheme, material_theme},
};
use tessera_ui::{Callback, Dp, Modifier, State, remember, tessera, use_context};

#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, || {
        surface(
            SurfaceArgs::default().modifier(Modifier::new().fill_max_size()),
            app_content,
        );
    });
}

#[tessera]
fn app_content() {
    let registry = remember(PickerRegistry::new);
    let start_state = remember(DateTimePickerState::default);
    let end_state = remember(DateTimePickerState::default);

    // The attachment contract in action: a picker refuses non-text fields.
    let rejected = remember(move || {
        registry
            .with_mut(|r| r.attach(FieldKind::Checkbox, Callback::new(|| {})))
            .err()
            .map(|error| error.to_string())
    });

    column(
        ColumnArgs::default().modifier(Modifier::new().fill_max_width().padding_all(Dp(24.0))),
        move |scope| {
            scope.child(|| {
                text(TextArgs::default().text("Date & time fields").size(Dp(20.0)));
            });
            scope.child(|| spacer(Modifier::new().height(Dp(16.0))));

            scope.child(move || {
                date_time_field_with_state(
                    DateTimeFieldArgs::default()
                        .label("Starts at")
                        .registry(registry),
                    start_state,
                );
            });
            scope.child(|| spacer(Modifier::new().height(Dp(16.0))));

            scope.child(move || {
                date_time_field_with_state(
                    DateTimeFieldArgs::default()
                        .label("Ends at")
                        .registry(registry),
                    end_state,
                );
            });
            scope.child(|| spacer(Modifier::new().height(Dp(24.0))));

            scope.child(move || selection_summary("Start", start_state));
            scope.child(|| spacer(Modifier::new().height(Dp(4.0))));
            scope.child(move || selection_summary("End", end_state));

            if let Some(rejected) = rejected.get() {
                scope.child(|| spacer(Modifier::new().height(Dp(24.0))));
                scope.child(move || {
                    let scheme = use_context::<MaterialTheme>()
                        .expect("MaterialTheme must be provided")
                        .get()
                        .color_scheme;
                    text(
                        TextArgs::default()
                            .text(rejected.clone())
                            .size(Dp(12.0))
                            .color(scheme.error),
                    );
                });
            }
        },
    );
}

fn selection_summary(label: &'static str, state: State<DateTimePickerState>) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let value = state.with(|s| {
        s.written_value()
            .map(str::to_string)
            .unwrap_or_else(|| "not selected yet".to_string())
    });
    text(
        TextArgs::default()
            .text(format!("{label}: {value}"))
            .size(Dp(14.0))
            .color(scheme.on_surface_variant),
    );
}
