//! Ready-made field constructors for the profile forms.
//!
//! Labels, length limits and help texts match the persisted profile
//! models, so markup rendered here lines up with what the server expects
//! back.

use crate::form::FormFieldDef;
use crate::validation::{
    CpfValidator, CrpValidator, MaxLengthValidator, SessionPriceValidator,
};
use crate::widgets::{
    AvailabilityGridWidget, BootstrapTextInput, BootstrapTextarea, ComboboxSelect, HiddenInput,
    MaskedTextInput,
};

/// A required display-name field, capped at 50 characters.
#[must_use]
pub fn name_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, BootstrapTextInput::new())
        .required()
        .validator(MaxLengthValidator::new(50))
}

/// The patient's CPF: masked input plus check-digit validation.
#[must_use]
pub fn cpf_field() -> FormFieldDef {
    FormFieldDef::new("cpf", "CPF", MaskedTextInput::cpf())
        .required()
        .validator(CpfValidator::new())
}

/// The psychologist's CRP registry number.
#[must_use]
pub fn crp_field() -> FormFieldDef {
    FormFieldDef::new("crp", "CRP", MaskedTextInput::crp())
        .required()
        .validator(MaxLengthValidator::new(20))
        .validator(CrpValidator::new())
}

/// The free-text "about me" section.
#[must_use]
pub fn about_field() -> FormFieldDef {
    FormFieldDef::new("sobre_mim", "Sobre Mim", BootstrapTextarea::new(6))
}

/// The optional session price, in reais with comma decimals.
#[must_use]
pub fn price_field() -> FormFieldDef {
    FormFieldDef::new(
        "valor_consulta",
        "Valor da Consulta",
        BootstrapTextInput::new().placeholder("150,00"),
    )
    .help_text("Entre R$ 20,00 e R$ 4.999,99")
    .validator(SessionPriceValidator::new())
}

/// The weekly availability grid editor.
#[must_use]
pub fn availability_field() -> FormFieldDef {
    FormFieldDef::new(
        "disponibilidade",
        "Disponibilidade",
        AvailabilityGridWidget::new(),
    )
}

/// The hidden field carrying the chosen appointment slots as a JSON list.
#[must_use]
pub fn appointments_field() -> FormFieldDef {
    FormFieldDef::new("agendamentos", "Agendamentos", HiddenInput).initial("[]")
}

/// The specializations multi-select, enhanced client-side into a combobox.
#[must_use]
pub fn specializations_field(choices: Vec<(String, String)>, selected: Vec<String>) -> FormFieldDef {
    FormFieldDef::new(
        "especializacoes",
        "Especializações",
        ComboboxSelect { choices, selected },
    )
}
