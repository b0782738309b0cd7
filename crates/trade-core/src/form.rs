//! Search form state.
//!
//! Field values stay local until `submit`, which builds a fresh
//! `SearchCondition`. The form never talks to the network.

use crate::model::SearchCondition;

const MONTH_LEN: usize = 7; // YYYY-MM
const AMOUNT_MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    RegionCode,
    StartPeriod,
    EndPeriod,
    MinAmount,
    MaxAmount,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::RegionCode,
        FormField::StartPeriod,
        FormField::EndPeriod,
        FormField::MinAmount,
        FormField::MaxAmount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::RegionCode => "지역 코드",
            FormField::StartPeriod => "시작 년월",
            FormField::EndPeriod => "종료 년월",
            FormField::MinAmount => "최소 거래금액 (만원)",
            FormField::MaxAmount => "최대 거래금액 (만원)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::RegionCode => "예: 11110 (서울 종로구)",
            FormField::StartPeriod | FormField::EndPeriod => "2023-01",
            FormField::MinAmount => "예: 50000",
            FormField::MaxAmount => "예: 100000",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::RegionCode => FormField::StartPeriod,
            FormField::StartPeriod => FormField::EndPeriod,
            FormField::EndPeriod => FormField::MinAmount,
            FormField::MinAmount => FormField::MaxAmount,
            FormField::MaxAmount => FormField::RegionCode,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::RegionCode => FormField::MaxAmount,
            FormField::StartPeriod => FormField::RegionCode,
            FormField::EndPeriod => FormField::StartPeriod,
            FormField::MinAmount => FormField::EndPeriod,
            FormField::MaxAmount => FormField::MinAmount,
        }
    }

    /// Input filtering the way a native `number` / `month` input would.
    fn accepts(self, current: &str, c: char) -> bool {
        match self {
            FormField::RegionCode => !c.is_whitespace() && !c.is_control(),
            FormField::StartPeriod | FormField::EndPeriod => {
                current.chars().count() < MONTH_LEN && (c.is_ascii_digit() || c == '-')
            }
            FormField::MinAmount | FormField::MaxAmount => {
                current.len() < AMOUNT_MAX_DIGITS && c.is_ascii_digit()
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    region_code: String,
    start_period: String,
    end_period: String,
    min_amount: String,
    max_amount: String,
    focused: FormField,
    disabled: bool,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::RegionCode => &self.region_code,
            FormField::StartPeriod => &self.start_period,
            FormField::EndPeriod => &self.end_period,
            FormField::MinAmount => &self.min_amount,
            FormField::MaxAmount => &self.max_amount,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::RegionCode => &mut self.region_code,
            FormField::StartPeriod => &mut self.start_period,
            FormField::EndPeriod => &mut self.end_period,
            FormField::MinAmount => &mut self.min_amount,
            FormField::MaxAmount => &mut self.max_amount,
        }
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// While disabled, submit and reset do nothing. Typing still works.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Type into the focused field. Returns false if the char was rejected.
    pub fn enter_char(&mut self, c: char) -> bool {
        let field = self.focused;
        if !field.accepts(self.value(field), c) {
            return false;
        }
        self.value_mut(field).push(c);
        true
    }

    pub fn delete_char(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Replace a field's value, keeping only what the field would accept.
    pub fn set_value(&mut self, field: FormField, value: &str) {
        self.value_mut(field).clear();
        for c in value.chars() {
            if field.accepts(self.value(field), c) {
                self.value_mut(field).push(c);
            }
        }
    }

    /// The region code is the one required input.
    pub fn can_submit(&self) -> bool {
        !self.disabled && !self.region_code.trim().is_empty()
    }

    /// Build a condition from the current input.
    ///
    /// Empty optional fields become `None`, never "" or 0.
    pub fn submit(&self) -> Option<SearchCondition> {
        if !self.can_submit() {
            return None;
        }

        Some(SearchCondition {
            region_code: self.region_code.trim().to_string(),
            start_period: non_empty(&self.start_period),
            end_period: non_empty(&self.end_period),
            min_amount: parse_amount(&self.min_amount),
            max_amount: parse_amount(&self.max_amount),
            ..SearchCondition::default()
        })
    }

    /// Clear every field. Returns false when the form is disabled.
    pub fn reset(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        for field in FormField::ALL {
            self.value_mut(field).clear();
        }
        self.focused = FormField::RegionCode;
        true
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_amount(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut SearchForm, field: FormField, text: &str) {
        form.focus(field);
        for c in text.chars() {
            form.enter_char(c);
        }
    }

    #[test]
    fn region_only_leaves_every_optional_field_absent() {
        let mut form = SearchForm::new();
        type_into(&mut form, FormField::RegionCode, "11110");

        let cond = form.submit().unwrap();
        assert_eq!(cond, SearchCondition::new("11110"));
        assert_eq!(cond.start_period, None);
        assert_eq!(cond.min_amount, None);
        assert_eq!(cond.page, None);
    }

    #[test]
    fn amounts_are_converted_to_numbers() {
        let mut form = SearchForm::new();
        type_into(&mut form, FormField::RegionCode, "11680");
        type_into(&mut form, FormField::StartPeriod, "2023-01");
        type_into(&mut form, FormField::MinAmount, "50000");
        type_into(&mut form, FormField::MaxAmount, "100000");

        let cond = form.submit().unwrap();
        assert_eq!(cond.start_period.as_deref(), Some("2023-01"));
        assert_eq!(cond.end_period, None);
        assert_eq!(cond.min_amount, Some(50_000));
        assert_eq!(cond.max_amount, Some(100_000));
    }

    #[test]
    fn blank_region_cannot_submit() {
        let mut form = SearchForm::new();
        type_into(&mut form, FormField::MinAmount, "1000");
        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn fields_filter_like_native_inputs() {
        let mut form = SearchForm::new();
        type_into(&mut form, FormField::MinAmount, "12a3,4");
        assert_eq!(form.value(FormField::MinAmount), "1234");

        type_into(&mut form, FormField::StartPeriod, "2023-011999");
        assert_eq!(form.value(FormField::StartPeriod), "2023-01");

        type_into(&mut form, FormField::RegionCode, "11 110");
        assert_eq!(form.value(FormField::RegionCode), "11110");
    }

    #[test]
    fn disabled_form_keeps_input_and_ignores_submit_and_reset() {
        let mut form = SearchForm::new();
        type_into(&mut form, FormField::RegionCode, "11110");
        form.set_disabled(true);

        assert_eq!(form.submit(), None);
        assert!(!form.reset());
        assert_eq!(form.value(FormField::RegionCode), "11110");

        // still editable
        form.enter_char('9');
        assert_eq!(form.value(FormField::RegionCode), "111109");
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = SearchForm::new();
        type_into(&mut form, FormField::RegionCode, "11110");
        type_into(&mut form, FormField::EndPeriod, "2024-12");

        assert!(form.reset());
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.focused(), FormField::RegionCode);
    }
}
