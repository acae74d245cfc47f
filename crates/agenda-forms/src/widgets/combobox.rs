//! The accessible multi-select combobox.
//!
//! The browser script builds a filterable listbox plus a chip row on top of
//! a native `<select multiple>`. [`MultiCombobox`] is that script's state
//! model - options, query filter, active option, chip collapsing - and
//! [`ComboboxSelect`] renders the native select element the script enhances.

use super::{html_escape, Widget, WidgetAttrs};

/// Chips shown before the search input collapse past this many selections.
const MAX_VISIBLE_CHIPS_COLLAPSED: usize = 5;

/// One option of the combobox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    /// Submission value.
    pub value: String,
    /// Display label, also the filter target.
    pub label: String,
    /// Whether the option is selected.
    pub selected: bool,
    /// Whether the current query hides it.
    pub hidden: bool,
}

/// One chip of the chip row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chip {
    /// A selected option with its remove button.
    Item {
        /// Option value, for the remove action.
        value: String,
        /// Option label.
        label: String,
    },
    /// The `+n` chip that expands the collapsed row.
    Summary {
        /// How many selections are hidden.
        hidden: usize,
    },
    /// The control that collapses an expanded row.
    Collapse,
}

/// The chip row in its current collapse state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRow {
    /// Chips in display order.
    pub chips: Vec<Chip>,
    /// Whether the row is expanded.
    pub expanded: bool,
}

/// State model of the enhanced multi-select.
#[derive(Debug, Clone)]
pub struct MultiCombobox {
    options: Vec<ComboOption>,
    open: bool,
    active: Option<usize>,
    query: String,
    chips_expanded: bool,
}

impl MultiCombobox {
    /// Builds the model from `(value, label, selected)` triples, the state
    /// of the native select's options.
    pub fn new<V: Into<String>, L: Into<String>>(options: Vec<(V, L, bool)>) -> Self {
        Self {
            options: options
                .into_iter()
                .map(|(value, label, selected)| ComboOption {
                    value: value.into(),
                    label: label.into(),
                    selected,
                    hidden: false,
                })
                .collect(),
            open: false,
            active: None,
            query: String::new(),
            chips_expanded: false,
        }
    }

    /// Options the current query leaves visible, in listbox order.
    pub fn visible(&self) -> Vec<&ComboOption> {
        self.options.iter().filter(|o| !o.hidden).collect()
    }

    /// Selected values in option order.
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Whether the listbox is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Visible index of the active option.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Current filter query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Focus: opens the listbox and activates the first visible option.
    pub fn open_listbox(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        if !self.visible().is_empty() {
            self.active = Some(0);
        }
    }

    /// Escape or outside click: closes the listbox.
    pub fn close_listbox(&mut self) {
        self.open = false;
        self.active = None;
    }

    /// Typing: opens the listbox and filters by case-insensitive label
    /// containment. A blank query shows everything.
    pub fn filter(&mut self, query: &str) {
        self.open_listbox();
        self.query = query.to_string();
        let needle = query.trim().to_lowercase();
        for option in &mut self.options {
            option.hidden = !needle.is_empty() && !option.label.to_lowercase().contains(&needle);
        }
        self.clamp_active();
    }

    fn clamp_active(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.active = None;
            return;
        }
        self.active = Some(self.active.unwrap_or(0).min(len - 1));
    }

    /// Arrow down: moves the active option, clamped to the end.
    pub fn move_down(&mut self) {
        self.open_listbox();
        let len = self.visible().len();
        if len > 0 {
            self.active = Some(self.active.map_or(0, |i| (i + 1).min(len - 1)));
        }
    }

    /// Arrow up: moves the active option, clamped to the start.
    pub fn move_up(&mut self) {
        self.open_listbox();
        if !self.visible().is_empty() {
            self.active = Some(self.active.map_or(0, |i| i.saturating_sub(1)));
        }
    }

    /// Home: jumps to the first visible option.
    pub fn move_home(&mut self) {
        if self.open && !self.visible().is_empty() {
            self.active = Some(0);
        }
    }

    /// End: jumps to the last visible option.
    pub fn move_end(&mut self) {
        let len = self.visible().len();
        if self.open && len > 0 {
            self.active = Some(len - 1);
        }
    }

    /// Enter/space/click: toggles the option at a visible index.
    pub fn toggle_by_visible_index(&mut self, index: usize, keep_open: bool) {
        let Some(option) = self.visible().get(index).copied() else {
            return;
        };
        let (value, selected) = (option.value.clone(), option.selected);
        self.set_selected(&value, !selected);
        if !keep_open {
            self.close_listbox();
        }
    }

    /// Selects or deselects by value.
    ///
    /// Deselecting below the collapse threshold while expanded collapses
    /// the chip row again.
    pub fn set_selected(&mut self, value: &str, on: bool) {
        let Some(option) = self.options.iter_mut().find(|o| o.value == value) else {
            return;
        };
        option.selected = on;
        if !on
            && self.chips_expanded
            && self.selected_values().len() <= MAX_VISIBLE_CHIPS_COLLAPSED
        {
            self.chips_expanded = false;
        }
    }

    /// Backspace on an empty query removes the last selected option.
    /// Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        if !self.query.is_empty() {
            return false;
        }
        let Some(last) = self
            .options
            .iter()
            .rev()
            .find(|o| o.selected)
            .map(|o| o.value.clone())
        else {
            return false;
        };
        self.set_selected(&last, false);
        true
    }

    /// The `+n` chip: shows every selection.
    pub fn expand_chips(&mut self) {
        self.chips_expanded = true;
    }

    /// The collapse control.
    pub fn collapse_chips(&mut self) {
        self.chips_expanded = false;
    }

    /// The chip row for the current selection and collapse state.
    ///
    /// Collapsed rows with more than five selections show four chips plus a
    /// `+n` summary; expanded rows show everything plus a collapse control.
    pub fn chip_row(&self) -> ChipRow {
        let selected: Vec<&ComboOption> = self.options.iter().filter(|o| o.selected).collect();
        let total = selected.len();
        let mut chips = Vec::new();

        if !self.chips_expanded && total > MAX_VISIBLE_CHIPS_COLLAPSED {
            let shown = MAX_VISIBLE_CHIPS_COLLAPSED - 1;
            for option in &selected[..shown] {
                chips.push(Chip::Item {
                    value: option.value.clone(),
                    label: option.label.clone(),
                });
            }
            chips.push(Chip::Summary {
                hidden: total - shown,
            });
        } else {
            for option in &selected {
                chips.push(Chip::Item {
                    value: option.value.clone(),
                    label: option.label.clone(),
                });
            }
            if self.chips_expanded && total > MAX_VISIBLE_CHIPS_COLLAPSED {
                chips.push(Chip::Collapse);
            }
        }

        ChipRow {
            chips,
            expanded: self.chips_expanded,
        }
    }
}

/// The native `<select multiple>` element the combobox script enhances.
#[derive(Debug, Clone, Default)]
pub struct ComboboxSelect {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Currently selected values.
    pub selected: Vec<String>,
}

impl ComboboxSelect {
    /// Creates a new combobox select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            selected: Vec::new(),
        }
    }

    /// Marks values as selected.
    #[must_use]
    pub fn with_selected(mut self, selected: Vec<impl Into<String>>) -> Self {
        self.selected = selected.into_iter().map(Into::into).collect();
        self
    }
}

impl Widget for ComboboxSelect {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "form-select".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let mut options = String::new();
        for (value, label) in &self.choices {
            let selected_attr = if self.selected.contains(value) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(value),
                html_escape(label)
            ));
        }

        format!(
            r#"<select multiple data-combobox="multi" class="{class}" id="{id}" name="{name}">{options}</select>"#
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combobox() -> MultiCombobox {
        MultiCombobox::new(vec![
            ("1", "Ansiedade", false),
            ("2", "Depressão", false),
            ("3", "Fobias", false),
            ("4", "Luto", false),
            ("5", "Casais", false),
            ("6", "Adolescentes", false),
            ("7", "Carreira", false),
        ])
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut mc = combobox();
        mc.filter("ANSI");
        let visible: Vec<&str> = mc.visible().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(visible, vec!["Ansiedade"]);

        mc.filter("");
        assert_eq!(mc.visible().len(), 7);
    }

    #[test]
    fn open_activates_first_visible() {
        let mut mc = combobox();
        assert!(!mc.is_open());
        mc.open_listbox();
        assert!(mc.is_open());
        assert_eq!(mc.active_index(), Some(0));
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut mc = combobox();
        mc.filter("a");
        let len = mc.visible().len();
        assert_eq!(len, 5);

        mc.move_up();
        assert_eq!(mc.active_index(), Some(0));
        for _ in 0..20 {
            mc.move_down();
        }
        assert_eq!(mc.active_index(), Some(len - 1));
        mc.move_home();
        assert_eq!(mc.active_index(), Some(0));
        mc.move_end();
        assert_eq!(mc.active_index(), Some(len - 1));
    }

    #[test]
    fn filtering_clamps_the_active_option() {
        let mut mc = combobox();
        mc.open_listbox();
        mc.move_end();
        assert_eq!(mc.active_index(), Some(6));

        mc.filter("ansi");
        assert_eq!(mc.active_index(), Some(0));

        mc.filter("zzz");
        assert_eq!(mc.active_index(), None);
    }

    #[test]
    fn toggle_by_visible_index_respects_filter() {
        let mut mc = combobox();
        mc.filter("dep");
        mc.toggle_by_visible_index(0, true);
        assert_eq!(mc.selected_values(), vec!["2"]);
        assert!(mc.is_open());

        mc.toggle_by_visible_index(0, false);
        assert!(mc.selected_values().is_empty());
        assert!(!mc.is_open());
    }

    #[test]
    fn backspace_removes_last_selected_only_with_empty_query() {
        let mut mc = combobox();
        mc.set_selected("1", true);
        mc.set_selected("3", true);

        mc.filter("x");
        assert!(!mc.backspace());

        mc.filter("");
        assert!(mc.backspace());
        assert_eq!(mc.selected_values(), vec!["1"]);
    }

    #[test]
    fn chips_collapse_past_five() {
        let mut mc = combobox();
        for value in ["1", "2", "3", "4", "5"] {
            mc.set_selected(value, true);
        }
        // Five selections fit.
        assert_eq!(mc.chip_row().chips.len(), 5);

        mc.set_selected("6", true);
        let row = mc.chip_row();
        assert_eq!(row.chips.len(), 5); // 4 items + summary
        assert_eq!(row.chips[4], Chip::Summary { hidden: 2 });
    }

    #[test]
    fn expanded_chips_show_all_plus_collapse() {
        let mut mc = combobox();
        for value in ["1", "2", "3", "4", "5", "6"] {
            mc.set_selected(value, true);
        }
        mc.expand_chips();
        let row = mc.chip_row();
        assert!(row.expanded);
        assert_eq!(row.chips.len(), 7); // 6 items + collapse control
        assert_eq!(row.chips[6], Chip::Collapse);
    }

    #[test]
    fn deselecting_below_threshold_collapses_again() {
        let mut mc = combobox();
        for value in ["1", "2", "3", "4", "5", "6"] {
            mc.set_selected(value, true);
        }
        mc.expand_chips();
        mc.set_selected("6", false);
        assert!(!mc.chip_row().expanded);
    }

    #[test]
    fn select_renders_native_element() {
        let widget = ComboboxSelect::new(vec![("1", "Ansiedade"), ("2", "Depressão")])
            .with_selected(vec!["2"]);
        let html = widget.render("especializacoes", None, &WidgetAttrs::new());
        assert!(html.contains(r#"<select multiple data-combobox="multi""#));
        assert!(html.contains(r#"name="especializacoes""#));
        assert!(html.contains(r#"value="2" selected"#));
        assert!(!html.contains(r#"value="1" selected"#));
    }
}
