use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use validator::Validate;

use super::{FieldError, clean_text, ensure, finish, parse_enum, rule_errors, trimmed};
use crate::{api, models};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SeizureForm {
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub location: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub seized_species: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub responsible: String,
    pub animal_destination: String,
    pub legal_document: String,
    pub suspect: String,
}

impl SeizureForm {
    pub fn validate(self, today: NaiveDate) -> Result<api::police::NewSeizure, Vec<FieldError>> {
        let mut errors = rule_errors(&self);
        ensure(
            &mut errors,
            self.date.is_none_or(|d| d <= today),
            "date",
            "La fecha no puede ser futura",
        );

        finish(
            errors,
            api::police::NewSeizure {
                date: self.date.unwrap_or(today),
                location: clean_text(&self.location),
                seized_species: clean_text(&self.seized_species),
                responsible: clean_text(&self.responsible),
                animal_destination: clean_text(&self.animal_destination),
                legal_document: clean_text(&self.legal_document),
                suspect: clean_text(&self.suspect),
            },
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PoliceReportForm {
    pub date: Option<NaiveDate>,
    pub report_type: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub responsible: String,
    pub unit: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub subject: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub description: String,
    pub recommendations: String,
    pub attachments: String,
}

impl PoliceReportForm {
    pub fn validate(
        self,
        today: NaiveDate,
    ) -> Result<api::police::NewPoliceReport, Vec<FieldError>> {
        let mut errors = rule_errors(&self);

        let report_type = parse_enum::<models::police::ReportType>(&self.report_type);
        ensure(
            &mut errors,
            report_type.is_some(),
            "report_type",
            "Tipo de reporte inválido",
        );

        finish(
            errors,
            api::police::NewPoliceReport {
                date: self.date.unwrap_or(today),
                report_type: report_type.unwrap_or_default(),
                responsible: clean_text(&self.responsible),
                unit: clean_text(&self.unit),
                subject: clean_text(&self.subject),
                description: clean_text(&self.description),
                recommendations: clean_text(&self.recommendations),
                attachments: clean_text(&self.attachments),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 8).unwrap()
    }

    #[test]
    fn test_seizure_form() {
        let form = SeizureForm {
            location: "Terminal de Transporte, Cali".into(),
            seized_species: "Loro orejiamarillo".into(),
            responsible: "Patrullero Díaz".into(),
            ..Default::default()
        };

        let new_seizure = form.clone().validate(today()).unwrap();
        assert_eq!(new_seizure.date, today());

        let errors = SeizureForm {
            responsible: "".into(),
            date: NaiveDate::from_ymd_opt(2024, 8, 1),
            ..form
        }
        .validate(today())
        .unwrap_err();
        assert_eq!(
            errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            vec!["date", "responsible"]
        );
    }

    #[test]
    fn test_police_report_form_type() {
        let form = PoliceReportForm {
            report_type: "seguimiento".into(),
            responsible: "Subintendente Rojas".into(),
            subject: "Monitoreo de tortugas".into(),
            description: "Seguimiento mensual".into(),
            ..Default::default()
        };

        let new_report = form.clone().validate(today()).unwrap();
        assert_eq!(
            new_report.report_type,
            models::police::ReportType::Seguimiento
        );

        let errors = PoliceReportForm {
            report_type: "mensual".into(),
            ..form
        }
        .validate(today())
        .unwrap_err();
        assert_eq!(errors[0].field, "reportType");
    }
}
