//! A date & time picker field for Tessera.
//!
//! Attach a picker to a text field with
//! [`date_time_field`](date_time_field::date_time_field), or embed the
//! panel directly with
//! [`date_time_picker`](date_time_picker::date_time_picker). The picker
//! walks the user through a calendar month grid and circular hour and
//! minute dials, writing a canonical `YYYY-MM-DD HH:MM` value back into
//! the field after every selection step.
//!
//! # Example
//!
//! ```
//! # use tessera_ui::tessera;
//! # use tessera_components::theme::{MaterialTheme, material_theme};
//! # #[tessera]
//! # fn component() {
//! use chronopick::date_time_field::{DateTimeFieldArgs, date_time_field};
//!
//! material_theme(MaterialTheme::default, || {
//!     date_time_field(DateTimeFieldArgs::default().label("Starts at"));
//! });
//! # }
//! # component();
//! ```

pub mod calendar;
pub mod date_time_field;
pub mod date_time_picker;
pub mod dial;
pub mod registry;
