//! The two concrete profile forms.

mod patient;
mod psychologist;

pub use patient::PatientForm;
pub use psychologist::PsychologistForm;
