//! # agenda-forms
//!
//! Django-like form helpers for the booking platform's profile pages:
//! national-ID input masks, field validators, Bootstrap 5 widgets (including
//! the availability grid editor and the multi-select combobox) and the two
//! concrete profile forms.
//!
//! This crate provides:
//! - CPF/CRP masks mirroring the client-side formatting scripts
//! - Field validators with pt-BR messages (CPF check digits, CRP registry
//!   patterns, session price range)
//! - Widgets: masked text inputs, the multi-select combobox, the
//!   availability grid, hidden inputs
//! - Field constructors and the `PatientForm` / `PsychologistForm` pair
//!
//! ## Quick Start
//!
//! ```rust
//! use agenda_forms::{FormBuilder, ValidationErrors, render_bootstrap_form};
//! use agenda_forms::fields::{cpf_field, name_field};
//! use std::collections::HashMap;
//!
//! let fields = FormBuilder::new()
//!     .field(name_field("nome", "Nome"))
//!     .field(cpf_field())
//!     .build();
//!
//! let html = render_bootstrap_form(
//!     &fields, &HashMap::new(), &ValidationErrors::new(), "/perfil", "post",
//! );
//! assert!(html.contains("000.000.000-00"));
//! ```
//!
//! ## Masks
//!
//! ```rust
//! use agenda_forms::masks::{format_cpf, format_crp};
//!
//! assert_eq!(format_cpf("12345678901"), "123.456.789-01");
//! assert_eq!(format_cpf("1234"), "123.4"); // partial input stays partial
//! assert_eq!(format_crp("crp 06124424"), "06/124424");
//! ```

mod error;
pub mod fields;
mod form;
pub mod forms;
pub mod masks;
pub mod validation;
pub mod widgets;

pub use error::{FormError, Result, ValidationErrors};
pub use form::{
    render_bootstrap_field, render_bootstrap_form, validate_fields, Form, FormBuilder,
    FormFieldDef,
};
pub use forms::{PatientForm, PsychologistForm};
