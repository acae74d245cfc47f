//! The patient profile form.

use std::collections::HashMap;

use crate::error::{Result, ValidationErrors};
use crate::fields::{cpf_field, name_field};
use crate::form::{render_bootstrap_form, validate_fields, Form, FormFieldDef};

/// Patient registration/edit form: display name plus CPF.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    /// Display name.
    pub nome: String,
    /// CPF, masked or raw.
    pub cpf: String,
}

impl PatientForm {
    fn values(&self) -> HashMap<String, String> {
        HashMap::from([
            ("nome".to_string(), self.nome.clone()),
            ("cpf".to_string(), self.cpf.clone()),
        ])
    }
}

impl Form for PatientForm {
    fn fields() -> Vec<FormFieldDef> {
        vec![name_field("nome", "Nome"), cpf_field()]
    }

    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        validate_fields(&Self::fields(), &self.values()).into_result()
    }

    fn from_data(data: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            nome: data.get("nome").cloned().unwrap_or_default(),
            cpf: data.get("cpf").cloned().unwrap_or_default(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_patient_passes() {
        let form = PatientForm {
            nome: "Ana Souza".to_string(),
            cpf: "529.982.247-25".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_fields_are_required() {
        let form = PatientForm::default();
        let errors = form.validate().unwrap_err();
        assert!(errors.get("nome").is_some());
        assert!(errors.get("cpf").is_some());
    }

    #[test]
    fn bad_cpf_is_reported() {
        let form = PatientForm {
            nome: "Ana Souza".to_string(),
            cpf: "111.111.111-11".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("cpf").unwrap(),
            &vec!["Este CPF é inválido".to_string()]
        );
    }

    #[test]
    fn from_data_fills_missing_with_blank() {
        let mut data = HashMap::new();
        data.insert("nome".to_string(), "Ana".to_string());
        let form = PatientForm::from_data(&data).unwrap();
        assert_eq!(form.nome, "Ana");
        assert_eq!(form.cpf, "");
    }

    #[test]
    fn renders_both_fields() {
        let form = PatientForm {
            nome: "Ana".to_string(),
            cpf: "52998224725".to_string(),
        };
        let html = form.as_bootstrap();
        assert!(html.contains(r#"name="nome""#));
        assert!(html.contains("529.982.247-25"));
    }
}
