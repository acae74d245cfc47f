//! The psychologist profile form.

use std::collections::HashMap;

use agenda_availability::{validate_schedule, WeeklySchedule};

use crate::error::{Result, ValidationErrors};
use crate::fields::{about_field, availability_field, crp_field, name_field, price_field};
use crate::form::{render_bootstrap_form, validate_fields, Form, FormFieldDef};

/// Psychologist registration/edit form.
///
/// `disponibilidade` carries the interval-list JSON the grid editor writes
/// into its hidden input; `especializacoes` holds the selected choice
/// values of the multi-select.
#[derive(Debug, Clone, Default)]
pub struct PsychologistForm {
    /// Full display name.
    pub nome_completo: String,
    /// CRP registry number.
    pub crp: String,
    /// Free-text presentation.
    pub sobre_mim: String,
    /// Session price in reais, comma decimals, blank when unset.
    pub valor_consulta: String,
    /// Weekly availability as interval-list JSON.
    pub disponibilidade: String,
    /// Selected specialization values.
    pub especializacoes: Vec<String>,
}

impl PsychologistForm {
    fn values(&self) -> HashMap<String, String> {
        HashMap::from([
            ("nome_completo".to_string(), self.nome_completo.clone()),
            ("crp".to_string(), self.crp.clone()),
            ("sobre_mim".to_string(), self.sobre_mim.clone()),
            ("valor_consulta".to_string(), self.valor_consulta.clone()),
            ("disponibilidade".to_string(), self.disponibilidade.clone()),
            (
                "especializacoes".to_string(),
                self.especializacoes.join(","),
            ),
        ])
    }

    /// The submitted schedule, when the availability payload parses.
    pub fn schedule(&self) -> Option<WeeklySchedule> {
        if self.disponibilidade.trim().is_empty() {
            return None;
        }
        serde_json::from_str(&self.disponibilidade).ok()
    }
}

impl Form for PsychologistForm {
    fn fields() -> Vec<FormFieldDef> {
        vec![
            name_field("nome_completo", "Nome Completo"),
            crp_field(),
            about_field(),
            price_field(),
            availability_field(),
        ]
    }

    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = match validate_fields(&Self::fields(), &self.values()).into_result() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !self.disponibilidade.trim().is_empty() {
            match self.schedule() {
                Some(schedule) => {
                    if let Err(reason) = validate_schedule(&schedule) {
                        errors.add("disponibilidade", reason.to_string());
                    }
                }
                None => errors.add("disponibilidade", "Formato de disponibilidade inválido."),
            }
        }

        errors.into_result()
    }

    fn from_data(data: &HashMap<String, String>) -> Result<Self> {
        let especializacoes = data
            .get("especializacoes")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            nome_completo: data.get("nome_completo").cloned().unwrap_or_default(),
            crp: data.get("crp").cloned().unwrap_or_default(),
            sobre_mim: data.get("sobre_mim").cloned().unwrap_or_default(),
            valor_consulta: data.get("valor_consulta").cloned().unwrap_or_default(),
            disponibilidade: data.get("disponibilidade").cloned().unwrap_or_default(),
            especializacoes,
        })
    }

    fn as_bootstrap(&self) -> String {
        render_bootstrap_form(
            &Self::fields(),
            &self.values(),
            &ValidationErrors::new(),
            "",
            "post",
        )
    }
}
