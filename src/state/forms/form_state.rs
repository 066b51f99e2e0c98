//! Form structs for the AMT panel and the inspection report

use super::field::Field;
use crate::lifecycle::mark_on_blur;
use chrono::{Local, NaiveDate};

/// Trait for common form operations.
///
/// Field indices run over the form's fields; one extra index past the last
/// field is the submit button row.
pub trait Form {
    fn fields(&self) -> &[Field];
    fn fields_mut(&mut self) -> &mut [Field];
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.fields().len() + 1
    }
    fn is_button_row_active(&self) -> bool {
        self.active_field() >= self.fields().len()
    }
    fn next_field(&mut self) {
        self.blur_active_field();
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        self.blur_active_field();
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut Field> {
        let index = self.active_field();
        self.fields_mut().get_mut(index)
    }
    fn blur_active_field(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            mark_on_blur(field);
        }
    }
}

/// Today's date in the inspection form's format
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// Inspection Form
#[derive(Debug, Clone)]
pub struct InspectionForm {
    pub fields: Vec<Field>,
    pub active_field_index: usize,
}

impl InspectionForm {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            fields: vec![
                Field::required("date", "Inspection Date (YYYY-MM-DD)")
                    .with_value(date.format("%Y-%m-%d").to_string()),
                Field::required("batchNumber", "Batch Number"),
                Field::required("section", "Section"),
            ],
            active_field_index: 0,
        }
    }

    /// Clear every field and put the given date back as the default
    pub fn reset(&mut self, date: NaiveDate) {
        *self = Self::new(date);
    }
}

impl Default for InspectionForm {
    fn default() -> Self {
        Self::new(today())
    }
}

impl Form for InspectionForm {
    fn fields(&self) -> &[Field] {
        &self.fields
    }
    fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

/// A titled group of consecutive AMT fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmtSection {
    pub title: &'static str,
    pub len: usize,
}

// AMT Form
#[derive(Debug, Clone)]
pub struct AmtForm {
    pub sections: Vec<AmtSection>,
    pub fields: Vec<Field>,
    pub active_field_index: usize,
}

impl AmtForm {
    pub fn new() -> Self {
        let groups: Vec<(&'static str, Vec<Field>)> = vec![
            (
                "Sample Parameters",
                vec![
                    Field::text("sample_number", "Sample Number"),
                    Field::text("heat_number", "Heat Number"),
                    Field::required("mass", "Mass (g)"),
                    Field::required("length", "Length (mm)"),
                ],
            ),
            (
                "Water System",
                vec![
                    Field::text("water_pressure_in", "Water Pressure In (bar)"),
                    Field::text("water_pressure_out", "Water Pressure Out (bar)"),
                    Field::text("water_in_temperature", "Water In Temperature (°C)"),
                    Field::text("water_out_temperature", "Water Out Temperature (°C)"),
                ],
            ),
            (
                "Scale Load Measurements",
                vec![
                    Field::required("utn_scale", "UTN Scale"),
                    Field::required("yield_load_main_scale", "Yield Load Main Scale"),
                    Field::required("yield_load_counter_part", "Yield Load Counter Part"),
                    Field::required("tensile_load_main_scale", "Tensile Load Main Scale"),
                    Field::required("tensile_load_counter_part", "Tensile Load Counter Part"),
                ],
            ),
        ];

        let mut sections = Vec::with_capacity(groups.len());
        let mut fields = Vec::new();
        for (title, group) in groups {
            sections.push(AmtSection {
                title,
                len: group.len(),
            });
            fields.extend(group);
        }

        Self {
            sections,
            fields,
            active_field_index: 0,
        }
    }

    /// Fields grouped by section, in display order
    pub fn sections_with_fields(&self) -> Vec<(&AmtSection, &[Field])> {
        let mut start = 0;
        self.sections
            .iter()
            .map(|section| {
                let end = (start + section.len).min(self.fields.len());
                let group = &self.fields[start..end];
                start = end;
                (section, group)
            })
            .collect()
    }
}

impl Default for AmtForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AmtForm {
    fn fields(&self) -> &[Field] {
        &self.fields
    }
    fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldMark;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod inspection_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = InspectionForm::new(date(2024, 7, 9));
            let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["date", "batchNumber", "section"]);
            assert_eq!(form.fields[0].value, "2024-07-09");
            assert!(form.fields.iter().all(|f| f.required));
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_field_count_includes_button_row() {
            let form = InspectionForm::new(date(2024, 1, 1));
            assert_eq!(form.field_count(), 4);
        }

        #[test]
        fn test_reset_restores_date_and_clears_values() {
            let mut form = InspectionForm::new(date(2024, 1, 1));
            form.fields[1].value = "B-1".to_string();
            form.fields[1].mark = FieldMark::Success;
            form.active_field_index = 2;

            form.reset(date(2024, 2, 2));

            assert_eq!(form.fields[0].value, "2024-02-02");
            assert!(form.fields[1].value.is_empty());
            assert_eq!(form.fields[1].mark, FieldMark::Neutral);
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = InspectionForm::new(date(2024, 1, 1));
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = InspectionForm::new(date(2024, 1, 1));
            form.prev_field();
            assert_eq!(form.active_field_index, 3); // Wrapped to button row
            assert!(form.is_button_row_active());
        }

        #[test]
        fn test_leaving_blank_required_field_marks_error() {
            let mut form = InspectionForm::new(date(2024, 1, 1));
            form.active_field_index = 1;
            form.next_field();
            assert_eq!(form.fields[1].mark, FieldMark::Error);
            // Date was never left blank
            assert_eq!(form.fields[0].mark, FieldMark::Neutral);
        }

        #[test]
        fn test_button_row_has_no_field() {
            let mut form = InspectionForm::new(date(2024, 1, 1));
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
            assert!(form.get_active_field_mut().is_none());
        }
    }

    mod amt_form {
        use super::*;

        #[test]
        fn test_sections_cover_all_fields() {
            let form = AmtForm::new();
            let total: usize = form.sections.iter().map(|s| s.len).sum();
            assert_eq!(total, form.fields.len());
            assert_eq!(form.fields.len(), 13);
        }

        #[test]
        fn test_required_fields() {
            let form = AmtForm::new();
            let required: Vec<&str> = form
                .fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.name.as_str())
                .collect();
            assert_eq!(
                required,
                vec![
                    "mass",
                    "length",
                    "utn_scale",
                    "yield_load_main_scale",
                    "yield_load_counter_part",
                    "tensile_load_main_scale",
                    "tensile_load_counter_part",
                ]
            );
        }

        #[test]
        fn test_sections_with_fields_groups_in_order() {
            let form = AmtForm::new();
            let groups = form.sections_with_fields();
            assert_eq!(groups.len(), 3);
            assert_eq!(groups[0].0.title, "Sample Parameters");
            assert_eq!(groups[0].1[0].name, "sample_number");
            assert_eq!(groups[1].1[0].name, "water_pressure_in");
            assert_eq!(groups[2].1.last().unwrap().name, "tensile_load_counter_part");
        }

        #[test]
        fn test_get_active_field_mut_returns_field() {
            let mut form = AmtForm::new();
            form.set_active_field(2);
            assert_eq!(form.get_active_field_mut().unwrap().name, "mass");
        }
    }
}
